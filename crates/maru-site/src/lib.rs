//! Documentation site core for the shikamaru docs portal.
//!
//! Builds the ordered [`DocumentIndex`] from content records, plans one page
//! per slug, searches the index, walks the static navigation list and
//! extracts per-page tables of contents.
//!
//! # Example
//!
//! ```
//! use maru_site::{DocumentIndex, IndexOptions, SearchIndex};
//!
//! let index = DocumentIndex::build(&[], &IndexOptions::default());
//! assert!(index.is_fallback());
//!
//! let results = SearchIndex::new(index.entries()).search("ports");
//! assert_eq!(results[0].title, "Port Management");
//! ```

mod index;
mod navigation;
mod pages;
mod search;
mod seo;
mod site;
mod toc;

pub use index::{
    DEFAULT_ORDER, DOCS_PREFIX, DocumentIndex, IndexOptions, NavigationEntry, default_static_nav,
    title_from_slug,
};
pub use maru_content::{derive_slug, normalize_path};
pub use navigation::{CurrentPage, Direction, NavigationController, PrevNext};
pub use pages::{PageRequest, plan_pages};
pub use search::{DEFAULT_MAX_RESULTS, NO_RESULTS, SearchIndex};
pub use seo::{SeoMeta, SiteMeta};
pub use site::{DocPage, Site, SiteError, SiteOptions};
pub use toc::{HEADING_CLASS, HeadingEntry, derive_heading_id, extract_toc};
