//! Document head metadata.

use maru_renderer::escape_html;
use serde::Serialize;

/// Site-wide metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteMeta {
    /// Title used when a page has none.
    pub title: String,
    /// Short name appended to page titles.
    pub name: String,
    /// Canonical site URL.
    pub url: String,
    /// Default description.
    pub description: String,
    /// Author handle.
    pub author: String,
    /// Social preview image path.
    pub image: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "shikamaru CLI".to_owned(),
            name: "shikamaru".to_owned(),
            url: "https://maru.ibrahimasry.com".to_owned(),
            description: "Spin up multi-repo dev environments with env management, \
                          port allocation, Docker/Hybrid orchestration, and web logs."
                .to_owned(),
            author: "@ibrahimasry".to_owned(),
            image: "/0.png".to_owned(),
        }
    }
}

/// Per-page head metadata.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeoMeta<'a> {
    /// Page title.
    pub title: Option<&'a str>,
    /// Page description. The site description is used when absent.
    pub description: Option<&'a str>,
    /// Page path, joined to the site URL for `og:url`.
    pub path: Option<&'a str>,
}

impl<'a> SeoMeta<'a> {
    /// Metadata for a page.
    #[must_use]
    pub fn new(title: Option<&'a str>, description: Option<&'a str>) -> Self {
        Self {
            title,
            description,
            path: None,
        }
    }

    /// Set the page path.
    #[must_use]
    pub fn with_path(mut self, path: &'a str) -> Self {
        self.path = Some(path);
        self
    }

    /// `"<title> — <name>"`, or the site title when the page has none.
    #[must_use]
    pub fn full_title(&self, site: &SiteMeta) -> String {
        match self.title.filter(|t| !t.is_empty()) {
            Some(title) => format!("{title} \u{2014} {}", site.name),
            None => site.title.clone(),
        }
    }

    /// Render `<title>` and `<meta>` tags, followed by `scripts` as inline
    /// `<script>` elements. Empty values produce no tag.
    #[must_use]
    pub fn render_head(&self, site: &SiteMeta, scripts: &[&str]) -> String {
        let title = escape_html(&self.full_title(site));
        let mut head = format!("<title>{title}</title>\n");

        let description = self
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or(&site.description);
        if !description.is_empty() {
            let description = escape_html(description);
            head.push_str(&format!(
                "<meta name=\"description\" content=\"{description}\">\n\
                 <meta property=\"og:description\" content=\"{description}\">\n"
            ));
        }

        head.push_str(&format!(
            "<meta property=\"og:title\" content=\"{title}\">\n\
             <meta property=\"og:type\" content=\"website\">\n"
        ));
        if let Some(url) = self.path.and_then(|path| absolute_url(&site.url, path)) {
            head.push_str(&meta_property("og:url", &url));
        }
        if let Some(image) = absolute_url(&site.url, &site.image) {
            head.push_str(&meta_property("og:image", &image));
        }
        if !site.author.is_empty() {
            head.push_str(&format!(
                "<meta name=\"twitter:creator\" content=\"{}\">\n",
                escape_html(&site.author)
            ));
        }

        for script in scripts {
            head.push_str(&format!("<script>{script}</script>\n"));
        }
        head
    }
}

fn meta_property(property: &str, content: &str) -> String {
    format!(
        "<meta property=\"{property}\" content=\"{}\">\n",
        escape_html(content)
    )
}

/// Join `path` onto `base`. Absolute URLs are returned unchanged; an empty
/// path yields nothing.
fn absolute_url(base: &str, path: &str) -> Option<String> {
    if path.is_empty() {
        return None;
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_owned());
    }
    Some(format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn bare_site() -> SiteMeta {
        SiteMeta {
            url: String::new(),
            description: String::new(),
            author: String::new(),
            image: String::new(),
            ..SiteMeta::default()
        }
    }

    #[test]
    fn test_full_title() {
        let site = SiteMeta::default();
        assert_eq!(SeoMeta::new(Some("Commands"), None).full_title(&site), "Commands — shikamaru");
        assert_eq!(SeoMeta::default().full_title(&site), "shikamaru CLI");
        assert_eq!(SeoMeta::new(Some(""), None).full_title(&site), "shikamaru CLI");
    }

    #[test]
    fn test_render_head() {
        let head = SeoMeta::new(Some("Ports & Docker"), Some("How \"ports\" work"))
            .render_head(&bare_site(), &["console.log(1)"]);
        assert_eq!(
            head,
            "<title>Ports &amp; Docker — shikamaru</title>\n\
             <meta name=\"description\" content=\"How &quot;ports&quot; work\">\n\
             <meta property=\"og:description\" content=\"How &quot;ports&quot; work\">\n\
             <meta property=\"og:title\" content=\"Ports &amp; Docker — shikamaru\">\n\
             <meta property=\"og:type\" content=\"website\">\n\
             <script>console.log(1)</script>\n"
        );
    }

    #[test]
    fn test_render_head_without_description() {
        let head = SeoMeta::default().render_head(&bare_site(), &[]);
        assert!(!head.contains("description"));
        assert!(head.starts_with("<title>shikamaru CLI</title>"));
    }

    #[test]
    fn test_render_head_uses_site_metadata() {
        let site = SiteMeta {
            url: "https://docs.example.com/".to_owned(),
            description: "Multi-repo dev environments".to_owned(),
            author: "@maru".to_owned(),
            image: "/0.png".to_owned(),
            ..SiteMeta::default()
        };
        let head = SeoMeta::new(Some("Commands"), None)
            .with_path("/docs/commands")
            .render_head(&site, &[]);
        assert_eq!(
            head,
            "<title>Commands — shikamaru</title>\n\
             <meta name=\"description\" content=\"Multi-repo dev environments\">\n\
             <meta property=\"og:description\" content=\"Multi-repo dev environments\">\n\
             <meta property=\"og:title\" content=\"Commands — shikamaru\">\n\
             <meta property=\"og:type\" content=\"website\">\n\
             <meta property=\"og:url\" content=\"https://docs.example.com/docs/commands\">\n\
             <meta property=\"og:image\" content=\"https://docs.example.com/0.png\">\n\
             <meta name=\"twitter:creator\" content=\"@maru\">\n"
        );
    }

    #[test]
    fn test_page_description_overrides_site() {
        let head = SeoMeta::new(None, Some("Page text")).render_head(&SiteMeta::default(), &[]);
        assert!(head.contains("<meta name=\"description\" content=\"Page text\">"));
        assert!(!head.contains("Spin up"));
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(absolute_url("https://a.dev", "/x.png").as_deref(), Some("https://a.dev/x.png"));
        assert_eq!(
            absolute_url("https://a.dev", "https://cdn.dev/x.png").as_deref(),
            Some("https://cdn.dev/x.png")
        );
        assert_eq!(absolute_url("https://a.dev", ""), None);
    }
}
