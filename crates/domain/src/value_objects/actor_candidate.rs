//! Actor search candidate value object

use serde::{Deserialize, Serialize};

/// A display-ready actor search result.
///
/// Transient: produced per search, consumed on selection or discarded when
/// the next search replaces the list. On commit, `name` and `image` are
/// copied verbatim into the new `Casting`; `description` is display-only
/// and is not carried over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorCandidate {
    /// Title of the matching page (the actor's name)
    pub name: String,
    /// Thumbnail URL, or the fixed placeholder path when the source has none
    pub image: String,
    /// Search snippet with all markup tags stripped
    pub description: String,
}
