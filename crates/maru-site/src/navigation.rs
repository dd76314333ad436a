//! Sequential previous/next navigation over the static docs list.
//!
//! The current page is located by title first and by path second. Stepping
//! past either end is a no-op.

use crate::index::NavigationEntry;

/// Direction of a sequential step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards the end of the list (`j`).
    Next,
    /// Towards the start of the list (`k`).
    Previous,
}

/// What is known about the page being displayed.
#[derive(Clone, Copy, Debug, Default)]
pub struct CurrentPage<'a> {
    /// Page title, if the page has one.
    pub title: Option<&'a str>,
    /// Current location path.
    pub path: Option<&'a str>,
}

impl<'a> CurrentPage<'a> {
    /// Describe a page by title and path.
    #[must_use]
    pub fn new(title: Option<&'a str>, path: Option<&'a str>) -> Self {
        Self { title, path }
    }
}

/// Neighbours of the current page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrevNext<'a> {
    /// Entry before the current page.
    pub previous: Option<&'a NavigationEntry>,
    /// Entry after the current page.
    pub next: Option<&'a NavigationEntry>,
}

/// Prev/next controller over a fixed, ordered list.
#[derive(Clone, Debug)]
pub struct NavigationController {
    entries: Vec<NavigationEntry>,
}

impl NavigationController {
    /// Create a controller over `entries`.
    #[must_use]
    pub fn new(entries: Vec<NavigationEntry>) -> Self {
        Self { entries }
    }

    /// The navigation list.
    #[must_use]
    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    /// Index of the current page, `None` if it is not in the list.
    #[must_use]
    pub fn position(&self, current: CurrentPage<'_>) -> Option<usize> {
        if let Some(title) = current.title
            && let Some(pos) = self.entries.iter().position(|e| e.title == title)
        {
            return Some(pos);
        }
        let path = normalize_path(current.path?);
        self.entries
            .iter()
            .position(|e| normalize_path(&e.path) == path)
    }

    /// Neighbours of the current page. Both are `None` when it is unknown.
    #[must_use]
    pub fn neighbours(&self, current: CurrentPage<'_>) -> PrevNext<'_> {
        let Some(pos) = self.position(current) else {
            return PrevNext::default();
        };
        PrevNext {
            previous: pos.checked_sub(1).and_then(|i| self.entries.get(i)),
            next: self.entries.get(pos + 1),
        }
    }

    /// Entry to move to for a step in `direction`, `None` at the boundary
    /// or when the current page is unknown.
    #[must_use]
    pub fn step(&self, current: CurrentPage<'_>, direction: Direction) -> Option<&NavigationEntry> {
        let neighbours = self.neighbours(current);
        let target = match direction {
            Direction::Next => neighbours.next,
            Direction::Previous => neighbours.previous,
        };
        if let Some(entry) = target {
            tracing::debug!(?direction, path = %entry.path, "Sequential navigation");
        }
        target
    }
}

/// Trailing slashes do not distinguish pages.
fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::index::default_static_nav;

    fn controller() -> NavigationController {
        NavigationController::new(default_static_nav())
    }

    fn path(entry: Option<&NavigationEntry>) -> Option<&str> {
        entry.map(|e| e.path.as_str())
    }

    #[test]
    fn test_position_prefers_title() {
        let nav = controller();
        let current = CurrentPage::new(Some("Commands"), Some("/docs/ports"));
        assert_eq!(nav.position(current), Some(1));
    }

    #[test]
    fn test_position_falls_back_to_path() {
        let nav = controller();
        assert_eq!(
            nav.position(CurrentPage::new(Some("Unknown"), Some("/docs/ports"))),
            Some(4)
        );
        assert_eq!(
            nav.position(CurrentPage::new(None, Some("/docs/ports/"))),
            Some(4)
        );
        assert_eq!(nav.position(CurrentPage::new(None, Some("/docs/nope"))), None);
        assert_eq!(nav.position(CurrentPage::default()), None);
    }

    #[test]
    fn test_neighbours_in_the_middle() {
        let nav = controller();
        let current = CurrentPage::new(Some("Configuration"), None);
        let neighbours = nav.neighbours(current);
        assert_eq!(path(neighbours.previous), Some("/docs/commands"));
        assert_eq!(path(neighbours.next), Some("/docs/infra"));
    }

    #[test]
    fn test_step_stops_at_boundaries() {
        let nav = controller();
        let first = CurrentPage::new(Some("Getting Started"), None);
        let last = CurrentPage::new(Some("Troubleshooting"), None);

        assert_eq!(nav.step(first, Direction::Previous), None);
        assert_eq!(path(nav.step(first, Direction::Next)), Some("/docs/commands"));
        assert_eq!(nav.step(last, Direction::Next), None);
        assert_eq!(path(nav.step(last, Direction::Previous)), Some("/docs/ports"));
    }

    #[test]
    fn test_next_walks_every_entry_once() {
        let nav = controller();
        let first = &nav.entries()[0];
        let mut current = (first.title.clone(), first.path.clone());
        let mut visited = vec![current.1.clone()];

        while let Some(entry) =
            nav.step(CurrentPage::new(Some(&current.0), Some(&current.1)), Direction::Next)
        {
            visited.push(entry.path.clone());
            current = (entry.title.clone(), entry.path.clone());
        }

        let expected: Vec<_> = nav.entries().iter().map(|e| e.path.clone()).collect();
        assert_eq!(visited, expected);
        assert_eq!(
            nav.step(CurrentPage::new(Some(&current.0), Some(&current.1)), Direction::Next),
            None
        );
    }

    #[test]
    fn test_unknown_page_has_no_neighbours() {
        let nav = controller();
        let current = CurrentPage::new(Some("Changelog"), Some("/docs/changelog"));
        assert_eq!(nav.neighbours(current), PrevNext::default());
        assert_eq!(nav.step(current, Direction::Next), None);
    }

    #[test]
    fn test_empty_list() {
        let nav = NavigationController::new(Vec::new());
        assert_eq!(nav.step(CurrentPage::new(Some("x"), Some("/")), Direction::Next), None);
    }
}
