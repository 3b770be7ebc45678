use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a saved casting.
///
/// Wraps the millisecond timestamp the casting was committed at, bumped
/// past the previously issued id when the clock has not advanced. Ids are
/// therefore unique and strictly increasing within a session, and
/// serialize as a bare JSON number (wire-compatible with blobs written by
/// earlier versions that used epoch milliseconds directly).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CastingId(u64);

impl CastingId {
    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CastingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CastingId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<CastingId> for u64 {
    fn from(value: CastingId) -> Self {
        value.0
    }
}
