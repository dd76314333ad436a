//! Markdown rendering into heading-aware page views.
//!
//! [`MarkdownRenderer`] parses markdown with pulldown-cmark and returns a
//! [`RenderedPage`]: the event stream plus a table of heading elements. The
//! page implements [`HeadingView`], so later stages can assign heading ids,
//! add classes and append anchor links before serializing to HTML.
//!
//! # Example
//!
//! ```
//! use maru_renderer::{HeadingView, MarkdownRenderer};
//!
//! let mut page = MarkdownRenderer::new().render("## Install\n\nRun it.");
//! page.set_id(0, "install");
//! assert!(page.to_html().starts_with(r#"<h2 id="install">"#));
//! ```

mod page;
mod renderer;
mod util;
mod view;

pub use page::RenderedPage;
pub use renderer::MarkdownRenderer;
pub use util::escape_html;
pub use view::{HeadingElement, HeadingView};
