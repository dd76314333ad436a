//! Page generation plan.

use maru_content::{ContentRef, DocumentRecord};
use serde::Serialize;

use crate::index::DOCS_PREFIX;

/// One page to generate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    /// URL path, `/docs/<slug>`.
    pub path: String,
    /// Slug the page is rendered from.
    pub slug: String,
    /// Record identifier.
    pub id: String,
    /// Where the body lives.
    #[serde(skip)]
    pub content_ref: ContentRef,
}

/// One page per record with a usable slug, in input order.
///
/// When two records resolve to the same slug only the first is kept.
pub fn plan_pages(records: &[DocumentRecord]) -> Vec<PageRequest> {
    let mut pages: Vec<PageRequest> = Vec::with_capacity(records.len());
    for record in records {
        let Some(slug) = record.slug.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            tracing::debug!(id = %record.id, "No page for document without slug");
            continue;
        };
        if pages.iter().any(|p| p.slug == slug) {
            tracing::warn!(id = %record.id, slug, "Duplicate slug, page skipped");
            continue;
        }
        pages.push(PageRequest {
            path: format!("{DOCS_PREFIX}{slug}"),
            slug: slug.to_owned(),
            id: record.id.clone(),
            content_ref: record.content_ref.clone(),
        });
    }
    pages
}
