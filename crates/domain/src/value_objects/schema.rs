//! Active casting schema selection

use serde::{Deserialize, Serialize};

/// Which casting schema is in effect for a session.
///
/// The source material ships two divergent shapes: a classic one with only
/// character/actor/image, and an extended one that adds a required race
/// tag and an optional free-text description. The persisted format is the
/// extended shape with optional fields omitted when absent, so both
/// variants read and write the same blobs; this enum only controls which
/// draft fields `commit()` demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastingSchema {
    /// Character, actor, and image only
    #[default]
    Classic,
    /// Adds a required race tag and an optional description
    Extended,
}

impl CastingSchema {
    /// Whether a race tag must be chosen before a draft can be committed
    pub fn requires_race(&self) -> bool {
        matches!(self, CastingSchema::Extended)
    }
}
