//! Documentation records and content sources for the shikamaru docs portal.
//!
//! The content pipeline is an external collaborator of the site core. This
//! crate models its output and ships adapters for it:
//!
//! - [`DocumentRecord`]: one documentation file with its slug, title and order
//! - [`ContentSource`]: trait with `scan()` and `read()`
//! - [`FsContentSource`]: walks a docs directory and parses YAML frontmatter
//! - [`MockContentSource`]: in-memory records for tests (behind `mock`)
//! - [`derive_slug`]: the slug rules applied to every record
//!
//! # Example
//!
//! ```no_run
//! use maru_content::{ContentSource, FsContentSource};
//!
//! let source = FsContentSource::new("src/docs");
//! for record in source.scan()? {
//!     println!("{} -> {:?}", record.id, record.slug);
//! }
//! # Ok::<(), maru_content::ContentError>(())
//! ```

mod frontmatter;
mod fs;
#[cfg(feature = "mock")]
mod mock;
mod record;
mod slug;
mod source;

pub use frontmatter::{parse_frontmatter, split_frontmatter};
pub use fs::FsContentSource;
#[cfg(feature = "mock")]
pub use mock::MockContentSource;
pub use record::{ContentRef, DocumentRecord, Frontmatter};
pub use slug::{derive_slug, normalize_path};
pub use source::{ContentError, ContentSource};
