//! Markdown to [`RenderedPage`] conversion.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::page::{HeadingAttrs, HeadingSpan, RenderedPage};
use crate::util::heading_level_to_num;
use crate::view::HeadingElement;

/// Markdown renderer producing heading-aware pages.
///
/// GFM and smart punctuation are enabled by default. Heading attribute
/// syntax (`## Title {#custom-id .class}`) is always on so authors can pin
/// anchor ids.
pub struct MarkdownRenderer {
    gfm: bool,
    smart_punctuation: bool,
    extract_title: bool,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Heading being collected while its inline events stream by.
struct OpenHeading {
    start: usize,
    level: HeadingLevel,
    id: Option<String>,
    classes: Vec<String>,
    attrs: HeadingAttrs,
    text: String,
}

impl MarkdownRenderer {
    /// Create a renderer with GFM and smart punctuation enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gfm: true,
            smart_punctuation: true,
            extract_title: false,
        }
    }

    /// Enable or disable GitHub Flavored Markdown (tables, strikethrough,
    /// task lists, alerts).
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Enable or disable curly quotes and dashes.
    #[must_use]
    pub fn with_smart_punctuation(mut self, enabled: bool) -> Self {
        self.smart_punctuation = enabled;
        self
    }

    /// Take the first H1 as the page title. The H1 is still rendered.
    #[must_use]
    pub fn with_title_extraction(mut self) -> Self {
        self.extract_title = true;
        self
    }

    /// Parser options for the current configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        let mut options = Options::ENABLE_HEADING_ATTRIBUTES;
        if self.gfm {
            options |= Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM;
        }
        if self.smart_punctuation {
            options |= Options::ENABLE_SMART_PUNCTUATION;
        }
        options
    }

    /// Render markdown into a page view.
    #[must_use]
    pub fn render(&self, markdown: &str) -> RenderedPage {
        let parser = Parser::new_ext(markdown, self.parser_options());

        let mut events: Vec<Event<'static>> = Vec::new();
        let mut headings = Vec::new();
        let mut spans = Vec::new();
        let mut title = None;
        let mut open: Option<OpenHeading> = None;

        for event in parser {
            let event = event.into_static();
            match &event {
                Event::Start(Tag::Heading {
                    level,
                    id,
                    classes,
                    attrs,
                }) => {
                    open = Some(OpenHeading {
                        start: events.len(),
                        level: *level,
                        id: id.as_deref().map(str::to_owned),
                        classes: classes.iter().map(|c| c.to_string()).collect(),
                        attrs: attrs.clone(),
                        text: String::new(),
                    });
                }
                Event::Text(text) | Event::Code(text) => {
                    if let Some(heading) = open.as_mut() {
                        heading.text.push_str(text);
                    }
                }
                Event::SoftBreak | Event::HardBreak => {
                    if let Some(heading) = open.as_mut() {
                        heading.text.push(' ');
                    }
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some(heading) = open.take() {
                        let text = heading.text.trim().to_owned();
                        if self.extract_title
                            && heading.level == HeadingLevel::H1
                            && title.is_none()
                        {
                            title = Some(text.clone());
                        }
                        spans.push(HeadingSpan {
                            start: heading.start,
                            end: events.len(),
                            level: heading.level,
                            attrs: heading.attrs,
                        });
                        headings.push(HeadingElement {
                            level: heading_level_to_num(heading.level),
                            id: heading.id,
                            classes: heading.classes,
                            text,
                            anchor: None,
                        });
                    }
                }
                _ => {}
            }
            events.push(event);
        }

        RenderedPage::new(events, headings, spans, title)
    }
}
