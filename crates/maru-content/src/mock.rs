//! In-memory content source for tests.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::record::{ContentRef, DocumentRecord};
use crate::slug::derive_slug;
use crate::source::{ContentError, ContentSource};

/// Content source holding records and bodies in memory.
///
/// # Example
///
/// ```ignore
/// use maru_content::{ContentSource, MockContentSource};
///
/// let source = MockContentSource::new()
///     .with_document("install.md", Some("Install"), Some(1), "## Setup\n");
/// assert_eq!(source.scan().unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockContentSource {
    records: RwLock<Vec<DocumentRecord>>,
    bodies: RwLock<HashMap<PathBuf, String>>,
}

impl MockContentSource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document whose slug is derived from `id`.
    ///
    /// # Panics
    ///
    /// Panics if an internal lock is poisoned.
    #[must_use]
    pub fn with_document(
        self,
        id: &str,
        title: Option<&str>,
        order: Option<i64>,
        body: &str,
    ) -> Self {
        let mut record = DocumentRecord::new(id, Some(derive_slug(id, None)), ContentRef::new(id));
        record.title = title.map(str::to_owned);
        record.order = order;
        self.with_record(record, body)
    }

    /// Add a prebuilt record with its body.
    ///
    /// # Panics
    ///
    /// Panics if an internal lock is poisoned.
    #[must_use]
    pub fn with_record(self, record: DocumentRecord, body: &str) -> Self {
        self.bodies
            .write()
            .unwrap()
            .insert(record.content_ref.location().to_path_buf(), body.to_owned());
        self.records.write().unwrap().push(record);
        self
    }
}

impl ContentSource for MockContentSource {
    fn scan(&self) -> Result<Vec<DocumentRecord>, ContentError> {
        Ok(self.records.read().unwrap().clone())
    }

    fn read(&self, content_ref: &ContentRef) -> Result<String, ContentError> {
        self.bodies
            .read()
            .unwrap()
            .get(content_ref.location())
            .cloned()
            .ok_or_else(|| ContentError::NotFound(content_ref.location().to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_scan_and_read() {
        let source = MockContentSource::new()
            .with_document("commands.md", Some("Commands"), Some(2), "## up\n")
            .with_record(DocumentRecord::new("orphan.md", None, ContentRef::new("orphan.md")), "");

        let records = source.scan().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].slug.as_deref(), Some("commands"));
        assert_eq!(records[1].slug, None);
        assert_eq!(source.read(&records[0].content_ref).unwrap(), "## up\n");
    }

    #[test]
    fn test_mock_read_unknown_ref() {
        let source = MockContentSource::new();
        let err = source.read(&ContentRef::new("missing.md")).unwrap_err();
        assert!(matches!(err, ContentError::NotFound(_)));
    }
}
