//! Content source trait and error type.

use std::path::PathBuf;

use crate::record::{ContentRef, DocumentRecord};

/// Error raised by a [`ContentSource`].
///
/// These are build-time failures of the content pipeline. The site core never
/// produces them itself.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Referenced content does not exist.
    #[error("Content not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O failure while reading a file or directory.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File or directory being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Frontmatter block is not valid YAML for the expected fields.
    #[error("Invalid frontmatter in {}: {source}", path.display())]
    Frontmatter {
        /// Offending file.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: serde_yaml::Error,
    },
}

impl ContentError {
    /// Build an I/O error, mapping `NotFound` onto [`ContentError::NotFound`].
    pub fn io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::Io { path, source: err }
        }
    }
}

/// Provider of documentation records and their bodies.
///
/// The site core only consumes already-parsed records. Implementations own
/// file discovery, frontmatter parsing and slug assignment.
pub trait ContentSource: Send + Sync {
    /// Return every documentation record.
    ///
    /// An empty result is valid and makes the site fall back to its static
    /// navigation list.
    fn scan(&self) -> Result<Vec<DocumentRecord>, ContentError>;

    /// Read the markdown body behind `content_ref`, frontmatter removed.
    fn read(&self, content_ref: &ContentRef) -> Result<String, ContentError>;
}
