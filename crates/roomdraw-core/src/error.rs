//! Typed failures of a draw run.
//!
//! Both variants are structural, not transient: retrying the same inputs
//! cannot succeed, so callers report and abort without persisting anything.

use thiserror::Error;

/// Reasons a draw run can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// More distinct rooms were requested than exist. Raised before any
    /// user or room is mutated.
    #[error("requested {requested} distinct rooms but only {available} exist")]
    InsufficientRooms { requested: usize, available: usize },

    /// The unassigned user pool ran out before a room's remaining capacity
    /// could be filled. The named room is left untouched.
    #[error(
        "user pool exhausted: room {room} needs {needed} occupants but only {remaining} unassigned users remain"
    )]
    ExhaustedUserPool {
        room: String,
        needed: usize,
        remaining: usize,
    },
}
