//! Composite traversal policies.
//!
//! Per-activation memory (running index, cached child statuses, the random
//! pick) lives in the composite's private blackboard scope under the
//! reserved keys below, never in node fields. The private scope is what
//! keeps these keys from colliding between composite instances.

use bt_core::{Blackboard, Key, NodeId, ScopeId, SplitMix64, Status, TickContext};

use crate::node::Node;

/// Reserved key namespace (high ids; integrator keys should stay well below).
/// Running index for Sequence/Selector resumption.
pub(crate) const RUNNING_INDEX: Key<usize> = Key::new(0xB7C0_0000_0000_0001);
/// Cached per-child statuses for the Parallel family.
pub(crate) const CHILD_STATUS: Key<Vec<Status>> = Key::new(0xB7C0_0000_0000_0002);
/// Memoized pick for the weighted random selector.
pub(crate) const CHOSEN_INDEX: Key<Option<usize>> = Key::new(0xB7C0_0000_0000_0003);

pub(crate) enum Composite {
    Sequence,
    Selector,
    Parallel,
    ParallelAny,
    Random { cumulative: Vec<u32> },
}

impl Composite {
    /// Called once per tree at initialization, after children exist.
    pub(crate) fn bind<E: 'static>(&mut self, children: &[Node<E>]) {
        if let Composite::Random { cumulative } = self {
            cumulative.clear();
            let mut total = 0;
            for child in children {
                total += child.weight();
                cumulative.push(total);
            }
        }
    }

    /// Resets per-activation memory to its initial value.
    pub(crate) fn open(&self, bb: &mut Blackboard, scope: ScopeId, child_count: usize) {
        match self {
            Composite::Sequence | Composite::Selector => {
                bb.set(scope, RUNNING_INDEX, 0usize);
            }
            Composite::Parallel | Composite::ParallelAny => {
                bb.set(scope, CHILD_STATUS, vec![Status::Running; child_count]);
            }
            Composite::Random { .. } => {
                bb.set(scope, CHOSEN_INDEX, None::<usize>);
            }
        }
    }

    pub(crate) fn tick<E: 'static>(
        &mut self,
        ctx: &TickContext,
        entity: &mut E,
        bb: &mut Blackboard,
        scope: ScopeId,
        id: NodeId,
        children: &mut [Node<E>],
    ) -> Status {
        match self {
            Composite::Sequence => tick_sequence(ctx, entity, bb, scope, children),
            Composite::Selector => tick_selector(ctx, entity, bb, scope, children),
            Composite::Parallel => {
                tick_parallel(ctx, entity, bb, scope, children, Status::Failure, Status::Success)
            }
            Composite::ParallelAny => {
                tick_parallel(ctx, entity, bb, scope, children, Status::Success, Status::Failure)
            }
            Composite::Random { cumulative } => {
                tick_random(ctx, entity, bb, scope, id, children, cumulative)
            }
        }
    }
}

/// Children run left to right starting at the stored index: success moves
/// on, failure aborts, running persists the index for next tick.
fn tick_sequence<E: 'static>(
    ctx: &TickContext,
    entity: &mut E,
    bb: &mut Blackboard,
    scope: ScopeId,
    children: &mut [Node<E>],
) -> Status {
    let mut index = bb.get(scope, RUNNING_INDEX).copied().unwrap_or(0);
    while index < children.len() {
        match children[index].execute(ctx, entity, bb) {
            Status::Success => index += 1,
            Status::Failure => return Status::Failure,
            Status::Running => {
                bb.set(scope, RUNNING_INDEX, index);
                return Status::Running;
            }
        }
    }
    Status::Success
}

/// Mirror of the sequence: failure moves on, success aborts.
fn tick_selector<E: 'static>(
    ctx: &TickContext,
    entity: &mut E,
    bb: &mut Blackboard,
    scope: ScopeId,
    children: &mut [Node<E>],
) -> Status {
    let mut index = bb.get(scope, RUNNING_INDEX).copied().unwrap_or(0);
    while index < children.len() {
        match children[index].execute(ctx, entity, bb) {
            Status::Failure => index += 1,
            Status::Success => return Status::Success,
            Status::Running => {
                bb.set(scope, RUNNING_INDEX, index);
                return Status::Running;
            }
        }
    }
    Status::Failure
}

/// Logical parallel: sequential, same-thread execution over every child,
/// every tick, with no short-circuit. `veto` dominates the aggregate
/// (Failure for all-success, Success for any-success); `base` is the
/// everyone-finished default. Children whose cached status is already
/// terminal are not re-invoked.
fn tick_parallel<E: 'static>(
    ctx: &TickContext,
    entity: &mut E,
    bb: &mut Blackboard,
    scope: ScopeId,
    children: &mut [Node<E>],
    veto: Status,
    base: Status,
) -> Status {
    let mut statuses = bb
        .get(scope, CHILD_STATUS)
        .cloned()
        .unwrap_or_else(|| vec![Status::Running; children.len()]);

    let mut result = base;
    for (i, child) in children.iter_mut().enumerate() {
        let mut status = statuses[i];
        if status.is_running() {
            status = child.execute(ctx, entity, bb);
            statuses[i] = status;
        }

        if status == veto {
            result = veto;
        } else if status.is_running() && result != veto {
            result = Status::Running;
        }
    }
    bb.set(scope, CHILD_STATUS, statuses);

    // The per-child cache is owned here, not by the generic lifecycle
    // wrapper, so a terminal aggregate must close any child it strands.
    if !result.is_running() {
        for child in children.iter_mut() {
            child.force_close(ctx, entity, bb);
        }
    }
    result
}

/// One weighted pick per activation; the pick is memoized while the chosen
/// child reports running, and a fresh draw only happens after re-open.
fn tick_random<E: 'static>(
    ctx: &TickContext,
    entity: &mut E,
    bb: &mut Blackboard,
    scope: ScopeId,
    id: NodeId,
    children: &mut [Node<E>],
    cumulative: &[u32],
) -> Status {
    let index = match bb.get(scope, CHOSEN_INDEX).copied().flatten() {
        Some(index) => index,
        None => pick_weighted(ctx.rng_for(id.stable_id()), cumulative),
    };

    let status = children[index].execute(ctx, entity, bb);
    if status.is_running() {
        bb.set(scope, CHOSEN_INDEX, Some(index));
    }
    status
}

fn pick_weighted(mut rng: SplitMix64, cumulative: &[u32]) -> usize {
    let total = cumulative.last().copied().unwrap_or(1);
    let draw = rng.next_f32_unit() * total as f32;
    // Linear scan over the monotonic prefix table; child counts are small.
    for (i, bound) in cumulative.iter().enumerate() {
        if draw < *bound as f32 {
            return i;
        }
    }
    cumulative.len() - 1
}
