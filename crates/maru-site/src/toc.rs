//! Table of contents extraction.
//!
//! Walks the H2 and H3 headings of a rendered page in document order. Each
//! heading gets a stable id (derived from its text when the source has
//! none), the `group` class and a `#id` anchor link, and contributes one
//! [`HeadingEntry`] to the outline.

use maru_renderer::HeadingView;
use serde::Serialize;

/// Class added to every outlined heading.
pub const HEADING_CLASS: &str = "group";

/// One outline entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeadingEntry {
    /// Element id, usable as a URL fragment.
    pub id: String,
    /// Visible heading text.
    pub text: String,
    /// 2 or 3.
    pub level: u8,
}

/// Turn heading text into an element id.
///
/// Lowercases, drops everything except ASCII letters, digits, whitespace and
/// hyphens, turns whitespace runs into a single hyphen and collapses
/// repeated hyphens. The result never starts or ends with a hyphen.
///
/// ```
/// use maru_site::derive_heading_id;
///
/// assert_eq!(derive_heading_id("What's New?"), "whats-new");
/// assert_eq!(derive_heading_id("Ports & Docker"), "ports-docker");
/// ```
#[must_use]
pub fn derive_heading_id(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.trim().chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !id.is_empty() {
                id.push('-');
            }
            pending_hyphen = false;
            id.push(c);
        }
    }

    id
}

/// Extract the outline of `view`, decorating its headings in place.
///
/// Headings with empty text, or whose text yields an empty id, are left
/// untouched and skipped. Existing ids are kept verbatim. Running the
/// extractor twice yields the same outline and adds nothing new.
pub fn extract_toc<V: HeadingView + ?Sized>(view: &mut V) -> Vec<HeadingEntry> {
    let mut entries = Vec::new();

    for index in 0..view.headings().len() {
        let heading = &view.headings()[index];
        if !matches!(heading.level, 2 | 3) || heading.text.is_empty() {
            continue;
        }
        let level = heading.level;
        let text = heading.text.clone();

        let id = match heading.id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => id.to_owned(),
            None => {
                let id = derive_heading_id(&text);
                if id.is_empty() {
                    tracing::debug!(heading = %text, "Skipping heading without usable id");
                    continue;
                }
                view.set_id(index, &id);
                id
            }
        };

        view.add_class(index, HEADING_CLASS);
        view.append_anchor(index, &format!("#{id}"));
        entries.push(HeadingEntry { id, text, level });
    }

    entries
}

#[cfg(test)]
mod tests {
    use maru_renderer::MarkdownRenderer;
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(id: &str, text: &str, level: u8) -> HeadingEntry {
        HeadingEntry {
            id: id.to_owned(),
            text: text.to_owned(),
            level,
        }
    }

    #[test]
    fn test_derive_heading_id() {
        assert_eq!(derive_heading_id("Setup"), "setup");
        assert_eq!(derive_heading_id("  Getting   Started  "), "getting-started");
        assert_eq!(derive_heading_id("Infra: Docker vs External"), "infra-docker-vs-external");
        assert_eq!(derive_heading_id("a -- b"), "a-b");
        assert_eq!(derive_heading_id("- leading and trailing -"), "leading-and-trailing");
        assert_eq!(derive_heading_id("Café au lait"), "caf-au-lait");
        assert_eq!(derive_heading_id("!!!"), "");
    }

    #[test]
    fn test_derive_heading_id_is_idempotent() {
        for text in ["What's New?", "Port  Management", "x_y z", "--A--"] {
            let once = derive_heading_id(text);
            assert_eq!(derive_heading_id(&once), once);
        }
    }

    #[test]
    fn test_extracts_h2_and_h3_only() {
        let mut page = MarkdownRenderer::new()
            .render("# Title\n\n## Install\n\n### From source\n\n#### Deep\n\n## Usage\n");
        let toc = extract_toc(&mut page);
        assert_eq!(
            toc,
            vec![
                entry("install", "Install", 2),
                entry("from-source", "From source", 3),
                entry("usage", "Usage", 2),
            ]
        );

        let h1 = &page.headings()[0];
        assert_eq!(h1.id, None);
        assert!(!h1.has_class(HEADING_CLASS));
        assert_eq!(page.headings()[3].anchor, None);
    }

    #[test]
    fn test_decorates_headings() {
        let mut page = MarkdownRenderer::new().render("## Setup\n");
        extract_toc(&mut page);
        let heading = &page.headings()[0];
        assert_eq!(heading.id.as_deref(), Some("setup"));
        assert!(heading.has_class(HEADING_CLASS));
        assert_eq!(heading.anchor.as_deref(), Some("#setup"));
    }

    #[test]
    fn test_existing_id_is_kept() {
        let mut page = MarkdownRenderer::new().render("## Ports {#port-allocation}\n");
        let toc = extract_toc(&mut page);
        assert_eq!(toc, vec![entry("port-allocation", "Ports", 2)]);
        assert_eq!(page.headings()[0].anchor.as_deref(), Some("#port-allocation"));
    }

    #[test]
    fn test_duplicate_texts_share_an_id() {
        let mut page = MarkdownRenderer::new().render("## Setup\n\ntext\n\n## Setup\n");
        let toc = extract_toc(&mut page);
        assert_eq!(toc, vec![entry("setup", "Setup", 2), entry("setup", "Setup", 2)]);
    }

    #[test]
    fn test_skips_headings_without_usable_id() {
        let mut page = MarkdownRenderer::new().render("## ???\n\n## Real\n");
        let toc = extract_toc(&mut page);
        assert_eq!(toc, vec![entry("real", "Real", 2)]);
        assert_eq!(page.headings()[0].id, None);
        assert_eq!(page.headings()[0].anchor, None);
    }

    #[test]
    fn test_second_run_changes_nothing() {
        let mut page = MarkdownRenderer::new().render("## Setup\n\n### Notes\n");
        let first = extract_toc(&mut page);
        let html = page.to_html();

        let second = extract_toc(&mut page);
        assert_eq!(first, second);
        assert_eq!(page.to_html(), html);
        assert_eq!(html.matches("doc-anchor").count(), 2);
    }

    #[test]
    fn test_no_headings() {
        let mut page = MarkdownRenderer::new().render("Just a paragraph.\n");
        assert!(extract_toc(&mut page).is_empty());
    }
}
