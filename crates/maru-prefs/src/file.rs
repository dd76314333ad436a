//! File-backed preference store.
//!
//! All slots are kept in a single JSON object:
//!
//! ```text
//! {"theme":"light","docsSidebarQuery":"ports"}
//! ```
//!
//! Every read loads the file and every write rewrites it, so the most recent
//! writer wins.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::{PreferenceStore, PrefsError};

/// [`PreferenceStore`] persisted as a JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, PrefsError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(PrefsError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|source| PrefsError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let mut slots = self.load()?;
        slots.insert(key.to_owned(), value.to_owned());

        let io_err = |source| PrefsError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(&slots).map_err(|source| PrefsError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(io_err)?;

        tracing::debug!(key, path = %self.path.display(), "Stored preference");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.get(keys::THEME).unwrap(), None);
    }

    #[test]
    fn test_set_creates_parent_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/state/prefs.json");

        FileStore::new(&path).set(keys::THEME, "light").unwrap();
        FileStore::new(&path)
            .set(keys::SIDEBAR_QUERY, "docker")
            .unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get(keys::THEME).unwrap().as_deref(), Some("light"));
        assert_eq!(
            reopened.get(keys::SIDEBAR_QUERY).unwrap().as_deref(),
            Some("docker")
        );
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "[1, 2").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.get(keys::THEME),
            Err(PrefsError::Corrupt { .. })
        ));
        assert!(store.set(keys::THEME, "dark").is_err());
    }
}
