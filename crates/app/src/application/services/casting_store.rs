//! Casting store - owner of the saved casting list and the draft
//!
//! The store is the only write path to persistence: every mutation
//! serializes the whole list and overwrites the blob under a fixed key.
//! Loading never fails outward - an absent or malformed blob falls back to
//! the empty list.

use std::sync::Arc;

use tracing::{error, warn};

use fancast_domain::{ActorCandidate, Casting, CastingId, CastingSchema, Race};
use fancast_ports::outbound::{storage_keys, ClockPort, StorageProvider};

/// In-progress casting being composed by the user.
///
/// Ephemeral session state: reset after a successful commit or when the
/// user navigates away. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftCasting {
    /// Character name text
    pub character_name: String,
    /// Actor search query text (mirrors the selected actor's name)
    pub actor_query: String,
    /// Chosen race tag, required under the extended schema
    pub race: Option<Race>,
    /// Free-text description
    pub description: String,
    /// Candidate picked from the search results, if any
    pub selected_actor: Option<ActorCandidate>,
}

/// Owner of the persisted casting list and the in-progress draft.
///
/// Insertion order is display order is persisted order. Castings are never
/// mutated in place; add and remove replace the list wholesale and
/// persist the result before returning.
pub struct CastingStore<S: StorageProvider> {
    storage: S,
    clock: Arc<dyn ClockPort>,
    schema: CastingSchema,
    castings: Vec<Casting>,
    draft: DraftCasting,
    /// Highest id issued or loaded this session, for monotonic allocation
    last_id: u64,
}

impl<S: StorageProvider> CastingStore<S> {
    /// Create an empty store; call [`CastingStore::load`] to hydrate it.
    pub fn new(storage: S, clock: Arc<dyn ClockPort>, schema: CastingSchema) -> Self {
        Self {
            storage,
            clock,
            schema,
            castings: Vec::new(),
            draft: DraftCasting::default(),
            last_id: 0,
        }
    }

    /// Read the persisted list into memory.
    ///
    /// An absent blob leaves the list empty; a malformed blob is logged
    /// and likewise falls back to empty. Never propagates an error.
    pub fn load(&mut self) {
        let Some(blob) = self.storage.load(storage_keys::CASTINGS) else {
            return;
        };
        match serde_json::from_str::<Vec<Casting>>(&blob) {
            Ok(list) => {
                // Seed id allocation past everything already on disk.
                self.last_id = list.iter().map(|c| c.id.value()).max().unwrap_or(0);
                self.castings = list;
            }
            Err(e) => warn!(error = %e, "failed to parse saved castings, starting empty"),
        }
    }

    /// Saved castings in display order.
    pub fn castings(&self) -> &[Casting] {
        &self.castings
    }

    /// Schema in effect for this session.
    pub fn schema(&self) -> CastingSchema {
        self.schema
    }

    /// Current draft state.
    pub fn draft(&self) -> &DraftCasting {
        &self.draft
    }

    /// Set the character name text.
    pub fn set_character_name(&mut self, name: impl Into<String>) {
        self.draft.character_name = name.into();
    }

    /// Set the actor query text.
    ///
    /// Typing a new query invalidates any previously selected candidate;
    /// the selection only survives as long as the text it mirrored.
    pub fn set_actor_query(&mut self, query: impl Into<String>) {
        self.draft.actor_query = query.into();
        self.draft.selected_actor = None;
    }

    /// Set or clear the race tag.
    pub fn set_race(&mut self, race: Option<Race>) {
        self.draft.race = race;
    }

    /// Set the free-text description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Select an actor candidate for the draft, mirroring its name into
    /// the actor query text.
    pub fn select_actor(&mut self, candidate: ActorCandidate) {
        self.draft.actor_query = candidate.name.clone();
        self.draft.selected_actor = Some(candidate);
    }

    /// Reset the draft without touching the saved list.
    pub fn clear_draft(&mut self) {
        self.draft = DraftCasting::default();
    }

    /// Freeze the draft into a casting, append it, persist, and reset the
    /// draft.
    ///
    /// Returns `None` without any state change when a precondition is
    /// unmet: blank character name, no selected actor, or a missing race
    /// tag under a schema that requires one. The caller is expected to
    /// have disabled the commit affordance in those states, so this is a
    /// defensive invariant rather than an error path.
    pub fn commit(&mut self) -> Option<CastingId> {
        if self.draft.character_name.trim().is_empty() {
            return None;
        }
        if self.schema.requires_race() && self.draft.race.is_none() {
            return None;
        }
        let selected = self.draft.selected_actor.clone()?;
        if selected.name.trim().is_empty() {
            return None;
        }

        let id = self.next_id();
        let description = match self.draft.description.trim() {
            "" => None,
            text => Some(text.to_string()),
        };
        let casting = match Casting::new(
            id,
            self.draft.character_name.clone(),
            selected.name,
            selected.image,
            self.draft.race,
            description,
        ) {
            Ok(casting) => casting,
            Err(e) => {
                warn!(error = %e, "draft failed validation, nothing committed");
                return None;
            }
        };

        self.castings.push(casting);
        self.persist();
        self.draft = DraftCasting::default();
        Some(id)
    }

    /// Remove the casting with the given id, if present, and persist.
    ///
    /// An absent id removes nothing and is not an error. No undo.
    pub fn remove(&mut self, id: CastingId) {
        self.castings.retain(|c| c.id != id);
        self.persist();
    }

    /// Allocate the next casting id: the clock's milliseconds, bumped past
    /// the last issued id whenever the clock has not advanced.
    fn next_id(&mut self) -> CastingId {
        let value = self.clock.now_millis().max(self.last_id + 1);
        self.last_id = value;
        CastingId::from_millis(value)
    }

    /// Serialize the whole list and overwrite the persisted blob.
    fn persist(&self) {
        match serde_json::to_string(&self.castings) {
            Ok(json) => self.storage.save(storage_keys::CASTINGS, &json),
            Err(e) => error!(error = %e, "failed to serialize castings"),
        }
    }
}
