//! Decorator behaviors: exactly one child, wrapped.
//!
//! Counters are plain fields rather than blackboard entries: a node
//! instance is uniquely owned by one tree, so at most one activation is
//! live at a time, and `open` resets them before each activation (with the
//! one exception documented on `LimitTicks`).

use bt_core::{BbView, Blackboard, ScopeId, Status, TickContext};

use crate::leaf::Predicate;
use crate::node::Node;

pub(crate) enum Decorator<E> {
    Inverter,
    Gate(Box<dyn Predicate<E>>),
    LimitTime { max_seconds: f32, elapsed: f32 },
    LimitTicks { max: u32, completed: u32 },
    Repeat { max: u32, completed: u32 },
    UntilFailure { max: u32, successes: u32 },
    UntilSuccess { max: u32, failures: u32 },
    Weight(u32),
}

impl<E: 'static> Decorator<E> {
    pub(crate) fn open(&mut self) {
        match self {
            Decorator::LimitTime { elapsed, .. } => *elapsed = 0.0,
            Decorator::Repeat { completed, .. } => *completed = 0,
            Decorator::UntilFailure { successes, .. } => *successes = 0,
            Decorator::UntilSuccess { failures, .. } => *failures = 0,
            // LimitTicks caps total completed child runs over the node's
            // lifetime, so its count survives re-open.
            Decorator::LimitTicks { .. } => {}
            Decorator::Inverter | Decorator::Gate(_) | Decorator::Weight(_) => {}
        }
    }

    pub(crate) fn tick(
        &mut self,
        ctx: &TickContext,
        entity: &mut E,
        bb: &mut Blackboard,
        scope: ScopeId,
        child: &mut Node<E>,
    ) -> Status {
        match self {
            Decorator::Inverter => child.execute(ctx, entity, bb).invert(),

            Decorator::Gate(predicate) => {
                if predicate.is_eligible(ctx, entity, BbView::new(bb, scope)) {
                    child.execute(ctx, entity, bb)
                } else {
                    child.force_close(ctx, entity, bb);
                    Status::Failure
                }
            }

            Decorator::LimitTime { max_seconds, elapsed } => {
                *elapsed += ctx.dt_seconds;
                if *elapsed > *max_seconds {
                    child.force_close(ctx, entity, bb);
                    return Status::Failure;
                }
                child.execute(ctx, entity, bb)
            }

            Decorator::LimitTicks { max, completed } => {
                if *completed >= *max {
                    child.force_close(ctx, entity, bb);
                    return Status::Failure;
                }
                let status = child.execute(ctx, entity, bb);
                if !status.is_running() {
                    *completed += 1;
                }
                status
            }

            Decorator::Repeat { max, completed } => {
                let status = child.execute(ctx, entity, bb);
                if !status.is_running() {
                    *completed += 1;
                    if *completed >= *max {
                        // The child's last terminal status is the result.
                        return status;
                    }
                }
                Status::Running
            }

            Decorator::UntilFailure { max, successes } => {
                match child.execute(ctx, entity, bb) {
                    Status::Failure => Status::Failure,
                    Status::Success => {
                        *successes += 1;
                        if *successes >= *max {
                            // Retries exhausted while the child kept succeeding.
                            Status::Success
                        } else {
                            Status::Running
                        }
                    }
                    Status::Running => Status::Running,
                }
            }

            Decorator::UntilSuccess { max, failures } => {
                match child.execute(ctx, entity, bb) {
                    Status::Success => Status::Success,
                    Status::Failure => {
                        *failures += 1;
                        if *failures >= *max {
                            Status::Failure
                        } else {
                            Status::Running
                        }
                    }
                    Status::Running => Status::Running,
                }
            }

            Decorator::Weight(_) => child.execute(ctx, entity, bb),
        }
    }
}
