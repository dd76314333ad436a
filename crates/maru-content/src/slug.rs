//! URL slug derivation for documentation files.

use std::path::Path;

/// Document extensions stripped before normalization.
const EXTENSIONS: [&str; 2] = [".mdx", ".md"];

/// Derive the URL slug for a document.
///
/// An explicit slug (trimmed, non-empty) always wins. Otherwise the relative
/// path is normalized with [`normalize_path`]. When that normalizes to
/// nothing (e.g. a root `index.md`), the bare file name without extension is
/// used.
///
/// # Examples
///
/// ```
/// use maru_content::derive_slug;
///
/// assert_eq!(derive_slug("guides/index.md", None), "guides");
/// assert_eq!(derive_slug("Getting Started!!.mdx", None), "getting-started");
/// assert_eq!(derive_slug("anything.md", Some("custom-slug")), "custom-slug");
/// ```
pub fn derive_slug(relative_path: &str, explicit: Option<&str>) -> String {
    if let Some(explicit) = explicit.map(str::trim).filter(|s| !s.is_empty()) {
        return explicit.to_owned();
    }

    let normalized = normalize_path(relative_path);
    if !normalized.is_empty() {
        return normalized;
    }

    Path::new(relative_path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Normalize a relative document path into a slug.
///
/// Strips the `.md`/`.mdx` extension and a trailing `index` segment, turns
/// every run of characters outside `[a-z0-9/_-]` into one hyphen, collapses
/// hyphen runs, trims hyphens and slashes from both ends and lowercases.
pub fn normalize_path(relative_path: &str) -> String {
    let without_ext = EXTENSIONS
        .iter()
        .find_map(|ext| strip_suffix_ignore_case(relative_path, ext))
        .unwrap_or(relative_path);
    let without_index = strip_index_segment(without_ext);

    let mut slug = String::with_capacity(without_index.len());
    for c in without_index.chars() {
        let kept = c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '-');
        let next = if kept { c.to_ascii_lowercase() } else { '-' };
        if next == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(next);
    }

    slug.trim_matches(|c| c == '-' || c == '/').to_owned()
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    if !s.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = s.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

/// Drop a trailing `index` path segment so `a/index` maps to `a/`.
fn strip_index_segment(path: &str) -> &str {
    match strip_suffix_ignore_case(path, "index") {
        Some(head) if head.is_empty() || head.ends_with('/') => head,
        _ => path,
    }
}
