//! Outbound ports - Interfaces for external services

pub mod actor_source_port;
pub mod clock_port;
pub mod storage;

pub use actor_source_port::{ActorSourcePort, SearchHit, SourceError};
pub use clock_port::ClockPort;
pub use storage::{storage_keys, StorageProvider};

// Re-export mocks for convenience
#[cfg(any(test, feature = "testing"))]
pub use actor_source_port::MockActorSourcePort;
#[cfg(any(test, feature = "testing"))]
pub use clock_port::MockClockPort;
