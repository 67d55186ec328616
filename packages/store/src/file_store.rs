//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used when the client runs natively
//! (desktop development builds). All entries live in one JSON object on disk so
//! the session keys are written together.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session.json        # {"@GoBarber:token": "...", "@GoBarber:user": "{...}"}
//! ```
//!
//! Use [`FileStore::default_location`] for a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/gobarber/` |
//! | Linux | `~/.local/share/gobarber/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\gobarber\` |

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::session::KeyValueStore;

const FILE_NAME: &str = "session.json";

/// Filesystem-backed KeyValueStore for native builds.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// `<data_dir>/gobarber`, or `./gobarber` when the platform has no data dir.
    pub fn default_location() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gobarber");
        Self::new(base)
    }

    fn path(&self) -> PathBuf {
        self.base.join(FILE_NAME)
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        let Ok(content) = std::fs::read_to_string(self.path()) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable {}: {}", FILE_NAME, e);
            BTreeMap::new()
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create {}: {}", self.base.display(), e);
            return;
        }
        let result = serde_json::to_string_pretty(entries)
            .map_err(std::io::Error::from)
            .and_then(|json| std::fs::write(self.path(), json));
        if let Err(e) = result {
            tracing::warn!("Failed to write {}: {}", FILE_NAME, e);
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.read_all();
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.read_all();
        if entries.remove(key).is_some() {
            self.write_all(&entries);
        }
    }
}
