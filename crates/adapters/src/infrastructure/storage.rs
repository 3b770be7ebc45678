//! File-backed storage provider
//!
//! Each key becomes its own file under the platform config dir (e.g.
//! `~/.config/fancast/castings` on Linux), holding the raw value string.
//! The casting store writes a single fixed key, so there is no index or
//! cache layer; every operation goes straight to the file.
//!
//! I/O failures are logged and absorbed here - the `StorageProvider`
//! surface stays infallible, and a value that cannot be read is simply
//! absent (the store already treats that as the empty list).

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use directories::ProjectDirs;

use fancast_ports::outbound::StorageProvider;

#[derive(Clone)]
pub struct FileStorageProvider {
    /// Directory the per-key files live in
    root: PathBuf,
}

impl Default for FileStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStorageProvider {
    /// Create a provider rooted at the platform-specific config location.
    pub fn new() -> Self {
        let root = match ProjectDirs::from("io", "fancast", "fancast") {
            Some(dirs) => dirs.config_dir().to_path_buf(),
            // No home directory to resolve against; keep data next to the
            // working directory instead.
            None => PathBuf::from("fancast_data"),
        };

        Self::with_root(root)
    }

    /// Create a provider rooted at an explicit directory.
    pub fn with_root(root: PathBuf) -> Self {
        tracing::debug!(root = %root.display(), "file storage rooted");
        Self { root }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl StorageProvider for FileStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Err(e) = fs::create_dir_all(&self.root) {
            tracing::error!(root = %self.root.display(), error = %e, "cannot create storage dir, value not saved");
            return;
        }
        if let Err(e) = fs::write(self.key_path(key), value) {
            tracing::error!(key, error = %e, "cannot write storage value");
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "cannot read storage value, treating as absent");
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(key, error = %e, "cannot remove storage value"),
        }
    }
}
