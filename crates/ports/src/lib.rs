//! Port traits for the fan-casting core.
//!
//! These traits define the contracts that infrastructure adapters must
//! implement, allowing application services to reach the actor search
//! source, persistent storage, and the clock without depending on
//! concrete implementations.

pub mod outbound;
