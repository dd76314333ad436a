//! Rendered page: an event stream plus its heading table.

use std::collections::HashMap;

use pulldown_cmark::{CowStr, Event, HeadingLevel, Tag, html};

use crate::util::escape_html;
use crate::view::{HeadingElement, HeadingView};

/// Heading attributes as parsed, kept for re-serialization.
pub(crate) type HeadingAttrs = Vec<(CowStr<'static>, Option<CowStr<'static>>)>;

/// Where a heading sits in the event stream.
#[derive(Debug)]
pub(crate) struct HeadingSpan {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) level: HeadingLevel,
    pub(crate) attrs: HeadingAttrs,
}

/// Markdown rendered into a mutable, heading-aware view.
///
/// Heading mutations made through [`HeadingView`] are applied when the page
/// is serialized with [`to_html`](Self::to_html).
#[derive(Debug)]
pub struct RenderedPage {
    events: Vec<Event<'static>>,
    headings: Vec<HeadingElement>,
    spans: Vec<HeadingSpan>,
    title: Option<String>,
}

impl RenderedPage {
    pub(crate) fn new(
        events: Vec<Event<'static>>,
        headings: Vec<HeadingElement>,
        spans: Vec<HeadingSpan>,
        title: Option<String>,
    ) -> Self {
        Self {
            events,
            headings,
            spans,
            title,
        }
    }

    /// Title taken from the first H1, when extraction was enabled.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Serialize to HTML with heading ids, classes and anchors applied.
    #[must_use]
    pub fn to_html(&self) -> String {
        let starts: HashMap<usize, usize> = self
            .spans
            .iter()
            .enumerate()
            .map(|(i, span)| (span.start, i))
            .collect();
        let ends: HashMap<usize, usize> = self
            .spans
            .iter()
            .enumerate()
            .map(|(i, span)| (span.end, i))
            .collect();

        let mut events = Vec::with_capacity(self.events.len() + self.headings.len());
        for (pos, event) in self.events.iter().enumerate() {
            if let Some(&i) = starts.get(&pos) {
                events.push(Event::Start(self.heading_tag(i)));
                continue;
            }
            if let Some(&i) = ends.get(&pos)
                && let Some(href) = &self.headings[i].anchor
            {
                events.push(Event::InlineHtml(anchor_html(href).into()));
            }
            events.push(event.clone());
        }

        let mut out = String::with_capacity(self.events.len() * 16);
        html::push_html(&mut out, events.into_iter());
        out
    }

    fn heading_tag(&self, index: usize) -> Tag<'static> {
        let span = &self.spans[index];
        let element = &self.headings[index];
        Tag::Heading {
            level: span.level,
            id: element.id.clone().map(CowStr::from),
            classes: element.classes.iter().cloned().map(CowStr::from).collect(),
            attrs: span.attrs.clone(),
        }
    }
}

fn anchor_html(href: &str) -> String {
    format!(
        r##"<a class="doc-anchor" href="{}" aria-label="Link to this section">#</a>"##,
        escape_html(href)
    )
}

impl HeadingView for RenderedPage {
    fn headings(&self) -> &[HeadingElement] {
        &self.headings
    }

    fn set_id(&mut self, index: usize, id: &str) {
        if let Some(element) = self.headings.get_mut(index) {
            element.id = Some(id.to_owned());
        }
    }

    fn add_class(&mut self, index: usize, class: &str) {
        if let Some(element) = self.headings.get_mut(index)
            && !element.has_class(class)
        {
            element.classes.push(class.to_owned());
        }
    }

    fn append_anchor(&mut self, index: usize, href: &str) -> bool {
        match self.headings.get_mut(index) {
            Some(element) if element.anchor.is_none() => {
                element.anchor = Some(href.to_owned());
                true
            }
            _ => false,
        }
    }
}
