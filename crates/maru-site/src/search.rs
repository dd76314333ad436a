//! Case-insensitive substring search over the document index.

use crate::index::NavigationEntry;

/// Default number of results returned.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Message shown when a query matches nothing.
pub const NO_RESULTS: &str = "No results";

/// Search over navigation entries.
///
/// An entry matches when its title or its path contains the query, ignoring
/// case. Results keep index order and are capped at `max_results`.
#[derive(Clone, Copy, Debug)]
pub struct SearchIndex<'a> {
    entries: &'a [NavigationEntry],
    max_results: usize,
}

impl<'a> SearchIndex<'a> {
    /// Create a search over `entries` with the default result cap.
    #[must_use]
    pub fn new(entries: &'a [NavigationEntry]) -> Self {
        Self {
            entries,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Set the result cap.
    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Run a query. Surrounding whitespace is ignored; a blank query returns
    /// the first `max_results` entries.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&'a NavigationEntry> {
        let query = query.trim().to_lowercase();
        let results: Vec<_> = self
            .entries
            .iter()
            .filter(|entry| query.is_empty() || matches(entry, &query))
            .take(self.max_results)
            .collect();
        tracing::debug!(query = %query, results = results.len(), "Search");
        results
    }
}

fn matches(entry: &NavigationEntry, needle: &str) -> bool {
    entry.title.to_lowercase().contains(needle) || entry.path.to_lowercase().contains(needle)
}
