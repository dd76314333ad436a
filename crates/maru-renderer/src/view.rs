//! Heading-level view over rendered content.
//!
//! [`HeadingView`] is the narrow surface the table-of-contents extractor
//! needs from a rendered page: read heading elements in document order and
//! mutate their id, classes and anchor affordance.

/// A heading element of a rendered page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadingElement {
    /// Heading level (1-6).
    pub level: u8,
    /// Element id, `None` when the source gave none.
    pub id: Option<String>,
    /// CSS classes on the element.
    pub classes: Vec<String>,
    /// Visible text content.
    pub text: String,
    /// Target of the appended anchor link, if one was appended.
    pub anchor: Option<String>,
}

impl HeadingElement {
    /// Whether the element carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Mutable view over the headings of rendered content.
///
/// Indices refer to positions in [`headings`](Self::headings) and stay valid
/// across mutations.
pub trait HeadingView {
    /// All heading elements in document order.
    fn headings(&self) -> &[HeadingElement];

    /// Assign an element id.
    fn set_id(&mut self, index: usize, id: &str);

    /// Add a CSS class if not already present.
    fn add_class(&mut self, index: usize, class: &str);

    /// Append an anchor link pointing at `href`.
    ///
    /// Returns `false` if the heading already has one; nothing changes then.
    fn append_anchor(&mut self, index: usize, href: &str) -> bool;
}
