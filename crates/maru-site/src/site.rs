//! Docs site facade.
//!
//! [`Site`] ties the content source to the index, search, page plan and
//! prev/next navigation, and renders individual pages with their outline.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use maru_content::FsContentSource;
//! use maru_site::{Site, SiteOptions};
//!
//! let source = Arc::new(FsContentSource::new("src/docs"));
//! let site = Site::load(source, SiteOptions::default())?;
//! let page = site.render("getting-started")?;
//! println!("{}", page.html);
//! ```

use std::sync::Arc;

use maru_content::{ContentError, ContentSource, DocumentRecord};
use maru_renderer::MarkdownRenderer;
use serde::Serialize;

use crate::index::{DOCS_PREFIX, DocumentIndex, IndexOptions, NavigationEntry, default_static_nav};
use crate::navigation::{CurrentPage, NavigationController};
use crate::pages::{PageRequest, plan_pages};
use crate::search::{DEFAULT_MAX_RESULTS, SearchIndex};
use crate::seo::{SeoMeta, SiteMeta};
use crate::toc::{HeadingEntry, extract_toc};

/// Site error.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// No page is published under the slug.
    #[error("page not found: {0}")]
    PageNotFound(String),
    /// The content source failed.
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Site configuration.
#[derive(Clone, Debug)]
pub struct SiteOptions {
    /// Order given to documents without one.
    pub default_order: i64,
    /// Static navigation list, used for prev/next and as the index fallback.
    pub static_nav: Vec<NavigationEntry>,
    /// Search result cap.
    pub max_results: usize,
    /// Head metadata.
    pub meta: SiteMeta,
    /// Inline scripts injected into every page head.
    pub head_scripts: Vec<String>,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            default_order: crate::DEFAULT_ORDER,
            static_nav: default_static_nav(),
            max_results: DEFAULT_MAX_RESULTS,
            meta: SiteMeta::default(),
            head_scripts: Vec::new(),
        }
    }
}

/// A rendered documentation page.
#[derive(Clone, Debug, Serialize)]
pub struct DocPage {
    /// URL path.
    pub path: String,
    /// Frontmatter title. Drives prev/next and the head title.
    pub title: Option<String>,
    /// Title shown on the page: the frontmatter title, else the first H1.
    pub display_title: Option<String>,
    /// Rendered body with decorated headings.
    pub html: String,
    /// H2/H3 outline.
    pub toc: Vec<HeadingEntry>,
    /// Rendered `<head>` content.
    pub head: String,
    /// Previous page in the static list.
    pub previous: Option<NavigationEntry>,
    /// Next page in the static list.
    pub next: Option<NavigationEntry>,
}

/// Loaded documentation site.
pub struct Site {
    source: Arc<dyn ContentSource>,
    options: SiteOptions,
    records: Vec<DocumentRecord>,
    index: DocumentIndex,
    pages: Vec<PageRequest>,
    navigation: NavigationController,
    renderer: MarkdownRenderer,
}

impl Site {
    /// Scan `source` and build the index and page plan.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Content`] if the source cannot be scanned.
    pub fn load(source: Arc<dyn ContentSource>, options: SiteOptions) -> Result<Self, SiteError> {
        let records = source.scan()?;
        let index = DocumentIndex::build(
            &records,
            &IndexOptions {
                default_order: options.default_order,
                fallback: options.static_nav.clone(),
            },
        );
        let pages = plan_pages(&records);
        let navigation = NavigationController::new(options.static_nav.clone());

        tracing::info!(
            documents = records.len(),
            pages = pages.len(),
            fallback = index.is_fallback(),
            "Loaded docs site"
        );

        Ok(Self {
            source,
            options,
            records,
            index,
            pages,
            navigation,
            renderer: MarkdownRenderer::new().with_title_extraction(),
        })
    }

    /// Ordered navigation entries.
    #[must_use]
    pub fn navigation(&self) -> &[NavigationEntry] {
        self.index.entries()
    }

    /// The document index.
    #[must_use]
    pub fn index(&self) -> &DocumentIndex {
        &self.index
    }

    /// Pages to generate.
    #[must_use]
    pub fn pages(&self) -> &[PageRequest] {
        &self.pages
    }

    /// Prev/next controller over the static list.
    #[must_use]
    pub fn navigation_controller(&self) -> &NavigationController {
        &self.navigation
    }

    /// Site configuration.
    #[must_use]
    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    /// Search the index.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&NavigationEntry> {
        SearchIndex::new(self.index.entries())
            .with_max_results(self.options.max_results)
            .search(query)
    }

    /// Render the page published under `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::PageNotFound`] for unknown slugs and
    /// [`SiteError::Content`] if the body cannot be read.
    pub fn render(&self, slug: &str) -> Result<DocPage, SiteError> {
        let slug = slug.trim().trim_start_matches(DOCS_PREFIX).trim_matches('/');
        let request = self
            .pages
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| SiteError::PageNotFound(slug.to_owned()))?;

        let body = self.source.read(&request.content_ref)?;
        let mut page = self.renderer.render(&body);
        let toc = extract_toc(&mut page);
        let html = page.to_html();

        let title = self
            .records
            .iter()
            .find(|r| r.id == request.id)
            .and_then(|r| r.title.clone())
            .filter(|t| !t.is_empty());
        let display_title = title.clone().or_else(|| page.title().map(str::to_owned));

        let neighbours = self
            .navigation
            .neighbours(CurrentPage::new(title.as_deref(), Some(&request.path)));
        let scripts: Vec<&str> = self.options.head_scripts.iter().map(String::as_str).collect();
        let head = SeoMeta::new(title.as_deref(), None)
            .with_path(&request.path)
            .render_head(&self.options.meta, &scripts);

        tracing::debug!(path = %request.path, headings = toc.len(), "Rendered page");

        Ok(DocPage {
            path: request.path.clone(),
            title,
            display_title,
            html,
            toc,
            head,
            previous: neighbours.previous.cloned(),
            next: neighbours.next.cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use maru_content::MockContentSource;
    use pretty_assertions::assert_eq;

    use super::*;

    fn site(source: MockContentSource) -> Site {
        Site::load(Arc::new(source), SiteOptions::default()).unwrap()
    }

    fn sample() -> MockContentSource {
        MockContentSource::new()
            .with_document("usage.md", Some("Usage"), Some(2), "## Run\n\n### Flags\n")
            .with_document("install.md", Some("Install"), Some(1), "## Setup\n\ntext\n\n## Setup\n")
            .with_document("about.md", Some("About"), Some(1), "Hello\n")
    }

    #[test]
    fn test_navigation_order() {
        let site = site(sample());
        let titles: Vec<_> = site.navigation().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["About", "Install", "Usage"]);
        assert_eq!(site.pages().len(), 3);
    }

    #[test]
    fn test_search() {
        let site = site(sample());
        let results = site.search("ins");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path, "/docs/install");
    }

    #[test]
    fn test_render_builds_toc_and_html() {
        let site = site(sample());
        let page = site.render("install").unwrap();
        assert_eq!(page.title.as_deref(), Some("Install"));
        let ids: Vec<_> = page.toc.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["setup", "setup"]);
        assert!(page.html.contains("<h2 id=\"setup\" class=\"group\">"));
        assert!(page.head.starts_with("<title>Install — shikamaru</title>"));
    }

    #[test]
    fn test_render_accepts_full_path() {
        let site = site(sample());
        let page = site.render("/docs/usage/").unwrap();
        assert_eq!(page.path, "/docs/usage");
        assert_eq!(page.toc.len(), 2);
        assert_eq!(page.toc[1].level, 3);
    }

    #[test]
    fn test_render_unknown_slug() {
        let site = site(sample());
        assert!(matches!(site.render("missing"), Err(SiteError::PageNotFound(slug)) if slug == "missing"));
    }

    #[test]
    fn test_h1_is_display_only() {
        let site = site(MockContentSource::new().with_document(
            "changelog.md",
            None,
            None,
            "# Commands\n\n## v1\n",
        ));
        let page = site.render("changelog").unwrap();
        assert_eq!(page.title, None);
        assert_eq!(page.display_title.as_deref(), Some("Commands"));
        assert_eq!(page.previous, None);
        assert_eq!(page.next, None);
        assert!(page.head.starts_with("<title>shikamaru CLI</title>"));
    }

    #[test]
    fn test_neighbours_from_path_without_title() {
        let site = site(MockContentSource::new().with_document("commands.md", None, None, "# Commands\n"));
        let page = site.render("commands").unwrap();
        assert_eq!(page.previous.map(|e| e.path).as_deref(), Some("/docs/getting-started"));
        assert_eq!(page.next.map(|e| e.path).as_deref(), Some("/docs/configuration"));
    }

    #[test]
    fn test_head_carries_site_metadata() {
        let site = site(sample());
        let page = site.render("install").unwrap();
        assert!(page.head.contains("<meta name=\"description\" content=\"Spin up"));
        assert!(
            page.head
                .contains("<meta property=\"og:url\" content=\"https://maru.ibrahimasry.com/docs/install\">")
        );
        assert!(page.head.contains("og:image"));
    }

    #[test]
    fn test_empty_source_uses_static_nav() {
        let site = site(MockContentSource::new());
        assert!(site.index().is_fallback());
        assert_eq!(site.navigation().len(), 6);
        assert!(site.pages().is_empty());
    }
}
