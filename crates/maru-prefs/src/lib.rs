//! Per-browser UI preference storage for the shikamaru docs portal.
//!
//! Preferences live in named string slots, the way a browser's local storage
//! holds them. The [`PreferenceStore`] trait decouples the UI controllers
//! from where the slots actually live.
//!
//! # Implementations
//!
//! - [`MemoryStore`]: in-process map, the default for tests
//! - [`FileStore`]: one JSON object on disk
//! - [`DisabledStore`]: every call fails, as when storage is turned off
//!
//! Consumers treat every failure as non-fatal. [`PreferenceStoreExt`] offers
//! lossy accessors that log and swallow errors.
//!
//! # Example
//!
//! ```
//! use maru_prefs::{keys, MemoryStore, PreferenceStore, PreferenceStoreExt};
//!
//! let store = MemoryStore::new();
//! store.set_lossy(keys::THEME, "light");
//! assert_eq!(store.get_lossy(keys::THEME).as_deref(), Some("light"));
//! ```

mod file;

use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::RwLock;

pub use file::FileStore;

/// Slot names shared with the browser build.
pub mod keys {
    /// `"dark"` or `"light"`.
    pub const THEME: &str = "theme";
    /// Last text typed in the sidebar search box.
    pub const SIDEBAR_QUERY: &str = "docsSidebarQuery";
    /// Last vertical scroll offset of the sidebar, in pixels.
    pub const SIDEBAR_SCROLL: &str = "docsSidebarScroll";
}

/// Preference store error.
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    /// Storage is disabled or unreachable.
    #[error("preference storage unavailable")]
    Unavailable,
    /// I/O failure on the backing file.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Backing file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Backing file does not hold a JSON object of strings.
    #[error("corrupt preference file {}: {source}", path.display())]
    Corrupt {
        /// Backing file.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },
}

/// Named string slots, last write wins.
pub trait PreferenceStore: Send + Sync {
    /// Read a slot. `Ok(None)` when the slot was never written.
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError>;

    /// Write a slot, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// Lossy accessors for [`PreferenceStore`].
///
/// Failures are logged at debug level and otherwise ignored, so callers keep
/// their in-memory state authoritative.
pub trait PreferenceStoreExt: PreferenceStore {
    /// Read a slot, mapping errors to `None`.
    fn get_lossy(&self, key: &str) -> Option<String> {
        match self.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(key, error = %e, "Ignoring preference read failure");
                None
            }
        }
    }

    /// Read and parse a slot. Unparseable values read as `None`.
    fn get_parsed<T: FromStr>(&self, key: &str) -> Option<T> {
        self.get_lossy(key)?.trim().parse().ok()
    }

    /// Write a slot, ignoring failures.
    fn set_lossy(&self, key: &str, value: &str) {
        if let Err(e) = self.set(key, value) {
            tracing::debug!(key, error = %e, "Ignoring preference write failure");
        }
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStoreExt for S {}

/// In-memory [`PreferenceStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one slot pre-populated.
    #[must_use]
    pub fn with(self, key: &str, value: &str) -> Self {
        self.set_lossy(key, value);
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        let slots = self.slots.read().map_err(|_| PrefsError::Unavailable)?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let mut slots = self.slots.write().map_err(|_| PrefsError::Unavailable)?;
        slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// [`PreferenceStore`] that rejects every call.
pub struct DisabledStore;

impl PreferenceStore for DisabledStore {
    fn get(&self, _key: &str) -> Result<Option<String>, PrefsError> {
        Err(PrefsError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PrefsError> {
        Err(PrefsError::Unavailable)
    }
}
