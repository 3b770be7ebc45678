//! Persistent storage abstraction (localStorage/file-based)
//!
//! A minimal string key-value contract so the casting store is testable
//! without a real storage backend. Implementations absorb their own I/O
//! failures; the surface is deliberately infallible.

/// Well-known storage keys
pub mod storage_keys {
    /// Serialized casting list
    pub const CASTINGS: &str = "castings";
}

/// String key-value storage abstraction.
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key, overwriting prior content
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}
