//! Casting entity - a committed "character → actor" pairing
//!
//! A `Casting` is the frozen snapshot of a draft at commit time: the
//! character name the user typed plus the name and portrait of the actor
//! candidate they picked. It is never mutated in place after creation; the
//! saved list is replaced wholesale on add/remove.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::CastingId;
use crate::value_objects::Race;

/// A saved character → actor casting.
///
/// `race` and `description` belong to the extended schema and are skipped
/// during serialization when absent, so blobs written by the race-less
/// schema parse and re-serialize unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Casting {
    pub id: CastingId,
    pub character: String,
    pub actor: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<Race>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Casting {
    /// Create a casting, enforcing the non-empty character/actor invariant.
    ///
    /// `actor` and `image` must come from the same selected candidate; the
    /// caller (the casting store) guarantees they are copied together.
    pub fn new(
        id: CastingId,
        character: impl Into<String>,
        actor: impl Into<String>,
        image: impl Into<String>,
        race: Option<Race>,
        description: Option<String>,
    ) -> Result<Self, DomainError> {
        let character = character.into();
        let actor = actor.into();

        if character.trim().is_empty() {
            return Err(DomainError::validation("Character name cannot be empty"));
        }
        if actor.trim().is_empty() {
            return Err(DomainError::validation("Actor name cannot be empty"));
        }

        Ok(Self {
            id,
            character,
            actor,
            image: image.into(),
            race,
            description,
        })
    }
}
