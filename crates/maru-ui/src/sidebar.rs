//! Docs sidebar: filter box and scroll position, both persisted.

use std::sync::Arc;

use maru_prefs::{PreferenceStore, PreferenceStoreExt, keys};
use maru_site::NavigationEntry;

/// Sidebar state.
pub struct Sidebar {
    entries: Vec<NavigationEntry>,
    store: Arc<dyn PreferenceStore>,
    query: String,
    scroll_top: f64,
}

impl Sidebar {
    /// Mount over `entries`, restoring the saved query and scroll offset.
    ///
    /// An empty saved query is ignored; an unparseable scroll offset
    /// restores as 0.
    pub fn mount(entries: Vec<NavigationEntry>, store: Arc<dyn PreferenceStore>) -> Self {
        let query = store
            .get_lossy(keys::SIDEBAR_QUERY)
            .filter(|q| !q.is_empty())
            .unwrap_or_default();
        let scroll_top = store
            .get_parsed::<f64>(keys::SIDEBAR_SCROLL)
            .filter(|offset| offset.is_finite())
            .unwrap_or(0.0);
        tracing::debug!(query = %query, scroll_top, "Restored sidebar");

        Self {
            entries,
            store,
            query,
            scroll_top,
        }
    }

    /// Filter text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the filter text and persist it.
    pub fn set_query(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.store.set_lossy(keys::SIDEBAR_QUERY, query);
    }

    /// Scroll offset in pixels.
    #[must_use]
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Record a scroll event and persist the offset.
    pub fn on_scroll(&mut self, scroll_top: f64) {
        self.scroll_top = scroll_top;
        self.store
            .set_lossy(keys::SIDEBAR_SCROLL, &scroll_top.to_string());
    }

    /// Entries whose title contains the filter text, ignoring case.
    ///
    /// Unlike search, the filter is not trimmed and paths are not matched.
    #[must_use]
    pub fn visible(&self) -> Vec<&NavigationEntry> {
        let needle = self.query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.title.to_lowercase().contains(&needle))
            .collect()
    }
}
