//! Status returned by behavior nodes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of evaluating a node for one tick.
///
/// `Running` is a polled status, not a blocking wait: a node that has not
/// finished returns `Running` up the call stack and is re-entered on the
/// next tick, resuming where it suspended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// The node completed and the outcome is positive.
    Success,

    /// The node completed and the outcome is negative.
    Failure,

    /// The node has unfinished work and must be re-entered next tick.
    Running,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Swaps `Success` and `Failure`; `Running` passes through unchanged.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }

    /// Stable numeric code, used in trace event payloads.
    #[inline]
    pub fn code(self) -> u64 {
        match self {
            Status::Success => 0,
            Status::Failure => 1,
            Status::Running => 2,
        }
    }
}
