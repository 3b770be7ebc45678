//! Core domain types for the fan-casting list builder.
//!
//! This crate holds the persisted `Casting` entity, the transient
//! `ActorCandidate` produced by actor searches, and the value objects that
//! govern how a casting may be composed. It performs no I/O and has no
//! async surface; services in `fancast-app` drive these types.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::Casting;
pub use error::DomainError;
pub use ids::CastingId;
pub use value_objects::{ActorCandidate, CastingSchema, Race};
