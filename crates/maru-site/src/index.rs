//! Ordered documentation index.
//!
//! Projects document records into display-ready [`NavigationEntry`] values
//! sorted by `(order, title)`. When nothing resolvable comes out of the
//! content pipeline, the static fallback list is used so navigation never
//! renders empty.

use maru_content::DocumentRecord;
use serde::{Deserialize, Serialize};

/// Sort order for documents that do not declare one.
pub const DEFAULT_ORDER: i64 = 9999;

/// URL prefix under which documentation pages live.
pub const DOCS_PREFIX: &str = "/docs/";

/// A display-ready navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// Display title.
    pub title: String,
    /// Absolute site path, e.g. `/docs/commands`.
    pub path: String,
    /// Resolved sort order.
    pub order: i64,
}

impl NavigationEntry {
    /// Create an entry.
    pub fn new(title: impl Into<String>, path: impl Into<String>, order: i64) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            order,
        }
    }
}

/// The built-in static navigation list.
pub fn default_static_nav() -> Vec<NavigationEntry> {
    [
        ("Getting Started", "/docs/getting-started"),
        ("Commands", "/docs/commands"),
        ("Configuration", "/docs/configuration"),
        ("Infra: Docker vs External", "/docs/infra"),
        ("Port Management", "/docs/ports"),
        ("Troubleshooting", "/docs/troubleshooting"),
    ]
    .into_iter()
    .map(|(title, path)| NavigationEntry::new(title, path, DEFAULT_ORDER))
    .collect()
}

/// Options for building the index.
#[derive(Clone, Debug)]
pub struct IndexOptions {
    /// Order given to records without one.
    pub default_order: i64,
    /// Static list used when no record resolves to a page.
    pub fallback: Vec<NavigationEntry>,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            default_order: DEFAULT_ORDER,
            fallback: default_static_nav(),
        }
    }
}

/// Ordered list of navigable documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentIndex {
    entries: Vec<NavigationEntry>,
    is_fallback: bool,
}

impl DocumentIndex {
    /// Build the index from content pipeline records.
    ///
    /// Records without a usable slug are dropped. The remaining entries are
    /// sorted by order, then by title (byte-wise). If none remain, the
    /// fallback list is used with every order forced to the default.
    pub fn build(records: &[DocumentRecord], options: &IndexOptions) -> Self {
        let mut entries: Vec<NavigationEntry> = records
            .iter()
            .filter_map(|record| {
                let entry = project(record, options.default_order);
                if entry.is_none() {
                    tracing::debug!(id = %record.id, "Dropping document without slug from index");
                }
                entry
            })
            .collect();

        if entries.is_empty() {
            tracing::debug!("No indexed documents, using static navigation");
            let fallback = options
                .fallback
                .iter()
                .map(|e| NavigationEntry::new(e.title.clone(), e.path.clone(), DEFAULT_ORDER))
                .collect();
            return Self {
                entries: fallback,
                is_fallback: true,
            };
        }

        entries.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.title.cmp(&b.title)));
        Self {
            entries,
            is_fallback: false,
        }
    }

    /// Entries in navigation order.
    #[must_use]
    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    /// Whether the static fallback list is in use.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index has no entries (only when the fallback is empty too).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Project a record into an entry, `None` when it has no usable slug.
fn project(record: &DocumentRecord, default_order: i64) -> Option<NavigationEntry> {
    let slug = record.slug.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
    let title = record
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .map_or_else(|| title_from_slug(slug), str::to_owned);

    Some(NavigationEntry {
        title,
        path: format!("{DOCS_PREFIX}{slug}"),
        order: record.order.unwrap_or(default_order),
    })
}

/// Derive a display title from a slug: hyphens and underscores become spaces.
pub fn title_from_slug(slug: &str) -> String {
    slug.replace(['-', '_'], " ")
}
