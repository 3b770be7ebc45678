//! Infrastructure adapters for the fan-casting core.
//!
//! Concrete implementations of the `fancast-ports` traits: a Wikipedia
//! client for actor search, a file-per-key string store, and the system
//! clock.

pub mod infrastructure;

pub use infrastructure::clock::SystemClock;
pub use infrastructure::storage::FileStorageProvider;
pub use infrastructure::wikipedia::{WikipediaClient, DEFAULT_WIKIPEDIA_API_URL};
