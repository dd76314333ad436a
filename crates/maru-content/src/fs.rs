//! Filesystem content source.
//!
//! Walks the docs directory, keeps `.md`/`.mdx` files, parses their
//! frontmatter and assigns slugs. Discovery and record building are separate
//! phases so that a missing directory simply yields no records.

use std::fs;
use std::path::{Path, PathBuf};

use crate::frontmatter::{parse_frontmatter, split_frontmatter};
use crate::record::{ContentRef, DocumentRecord, Frontmatter};
use crate::slug::derive_slug;
use crate::source::{ContentError, ContentSource};

/// [`ContentSource`] backed by a directory of markdown files.
#[derive(Debug)]
pub struct FsContentSource {
    source_dir: PathBuf,
}

impl FsContentSource {
    /// Create a source rooted at `source_dir`.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
        }
    }

    /// Root directory being scanned.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Collect document files below `dir`, sorted for stable output.
    fn discover(&self, dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), ContentError> {
        let entries = fs::read_dir(dir).map_err(|e| ContentError::io(e, dir))?;

        let mut entries: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|e| {
                let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
                (e.path(), is_dir)
            })
            .collect();
        entries.sort();

        for (path, is_dir) in entries {
            let hidden = path
                .file_name()
                .is_some_and(|n| n.to_string_lossy().starts_with('.'));
            if hidden {
                continue;
            }

            if is_dir {
                self.discover(&path, files)?;
            } else if is_document(&path) {
                files.push(path);
            }
        }
        Ok(())
    }

    fn build_record(&self, path: &Path) -> Result<DocumentRecord, ContentError> {
        let text = fs::read_to_string(path).map_err(|e| ContentError::io(e, path))?;
        let (yaml, _) = split_frontmatter(&text);
        let frontmatter = match yaml {
            Some(yaml) => parse_frontmatter(yaml).map_err(|source| ContentError::Frontmatter {
                path: path.to_path_buf(),
                source,
            })?,
            None => Frontmatter::default(),
        };

        let relative = path
            .strip_prefix(&self.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");
        let slug = derive_slug(&relative, frontmatter.slug.as_deref());

        Ok(DocumentRecord {
            id: relative,
            slug: (!slug.is_empty()).then_some(slug),
            title: frontmatter.title,
            order: frontmatter.order,
            content_ref: ContentRef::new(path),
        })
    }
}

fn is_document(path: &Path) -> bool {
    path.extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("md") || e.eq_ignore_ascii_case("mdx"))
}

impl ContentSource for FsContentSource {
    fn scan(&self) -> Result<Vec<DocumentRecord>, ContentError> {
        if !self.source_dir.exists() {
            tracing::info!(dir = %self.source_dir.display(), "Docs directory missing, no records");
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        self.discover(&self.source_dir, &mut files)?;

        let records = files
            .iter()
            .map(|path| self.build_record(path))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(count = records.len(), "Scanned documentation records");
        Ok(records)
    }

    fn read(&self, content_ref: &ContentRef) -> Result<String, ContentError> {
        let path = content_ref.location();
        let text = fs::read_to_string(path).map_err(|e| ContentError::io(e, path))?;
        let (_, body) = split_frontmatter(&text);
        Ok(body.to_owned())
    }
}
