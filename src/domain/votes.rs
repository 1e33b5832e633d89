// src/domain/votes.rs
use std::fmt;

/// Relative change applied to a vote counter. Stored values are only ever
/// moved by a delta, never overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteDelta(pub i32);

impl VoteDelta {
    /// New counter value, or `None` when it would leave the `INTEGER` range.
    pub fn apply(self, current: i32) -> Option<i32> {
        current.checked_add(self.0)
    }
}

impl From<i32> for VoteDelta {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<VoteDelta> for i32 {
    fn from(value: VoteDelta) -> Self {
        value.0
    }
}

impl fmt::Display for VoteDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}
