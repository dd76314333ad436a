//! Document records handed to the site core.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Opaque reference to a document's content.
///
/// Only the [`ContentSource`](crate::ContentSource) that produced it knows how
/// to resolve it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentRef(PathBuf);

impl ContentRef {
    /// Wrap a backend-specific location.
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self(location.into())
    }

    /// Backend-specific location.
    #[must_use]
    pub fn location(&self) -> &Path {
        &self.0
    }
}

/// One documentation file as seen by the content pipeline.
///
/// Immutable for the lifetime of a build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Stable identifier (the path relative to the docs root).
    pub id: String,
    /// URL slug, `None` when nothing could be resolved.
    pub slug: Option<String>,
    /// Frontmatter title.
    pub title: Option<String>,
    /// Frontmatter sort order.
    pub order: Option<i64>,
    /// Where the body lives.
    pub content_ref: ContentRef,
}

impl DocumentRecord {
    /// Create a record with only an id, slug and content reference.
    pub fn new(id: impl Into<String>, slug: Option<String>, content_ref: ContentRef) -> Self {
        Self {
            id: id.into(),
            slug,
            title: None,
            order: None,
            content_ref,
        }
    }

    /// Set the frontmatter title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the frontmatter order.
    #[must_use]
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }
}

/// Frontmatter fields the portal understands. Unknown keys are ignored.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Frontmatter {
    /// Page title.
    #[serde(default)]
    pub title: Option<String>,
    /// Explicit URL slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Sort order in navigation.
    #[serde(default)]
    pub order: Option<i64>,
}
