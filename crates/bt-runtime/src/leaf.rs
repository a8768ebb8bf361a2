use bt_core::{BbScope, BbView, Status, TickContext};

/// A terminal action leaf, supplied by the integrator.
///
/// `open` and `close` bracket one activation: `open` runs when the node is
/// first entered (set up side effects, subscribe callbacks), `close` when
/// it reports a terminal status or is force-closed by an abandoning parent.
/// A long-running action returns [`Status::Running`] from `tick` and is
/// polled again next tick without re-running `open`.
pub trait Action<E>: 'static {
    fn open(&mut self, _ctx: &TickContext, _entity: &mut E, _bb: BbScope<'_>) {}

    fn tick(&mut self, ctx: &TickContext, entity: &mut E, bb: BbScope<'_>) -> Status;

    fn close(&mut self, _ctx: &TickContext, _entity: &mut E, _bb: BbScope<'_>) {}
}

/// Side-effect-free eligibility check used by condition leaves and gates.
///
/// The condition leaf wrapper maps `true` to `Success` and `false` to
/// `Failure`; a predicate can never report `Running`.
pub trait Predicate<E>: 'static {
    fn is_eligible(&mut self, ctx: &TickContext, entity: &E, bb: BbView<'_>) -> bool;
}

impl<E, F> Predicate<E> for F
where
    F: FnMut(&TickContext, &E, BbView<'_>) -> bool + 'static,
{
    fn is_eligible(&mut self, ctx: &TickContext, entity: &E, bb: BbView<'_>) -> bool {
        self(ctx, entity, bb)
    }
}

impl<E, F> Action<E> for F
where
    F: FnMut(&TickContext, &mut E, BbScope<'_>) -> Status + 'static,
{
    fn tick(&mut self, ctx: &TickContext, entity: &mut E, bb: BbScope<'_>) -> Status {
        self(ctx, entity, bb)
    }
}
