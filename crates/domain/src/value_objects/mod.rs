pub mod actor_candidate;
pub mod race;
pub mod schema;

pub use actor_candidate::ActorCandidate;
pub use race::Race;
pub use schema::CastingSchema;
