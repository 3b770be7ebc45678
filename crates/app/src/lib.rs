//! Application services for the fan-casting list builder.
//!
//! Two cooperating state owners, split on purpose so transient search
//! state never couples to persisted data:
//!
//! - [`ActorSearchService`] turns a free-text query into display-ready
//!   actor candidates and owns the result list plus the in-progress flag.
//! - [`CastingStore`] owns the saved casting list and the in-progress
//!   draft, and is the only component that touches storage.
//!
//! They communicate only through candidate selection and the commit
//! contract: the UI takes a candidate out of the search service and hands
//! it to the store.

pub mod application;

pub use application::services::{ActorSearchService, CastingStore, DraftCasting};
pub use application::services::{MAX_CANDIDATES, PLACEHOLDER_IMAGE};
