//! Markdown artifact store
//!
//! Persist, list, and retrieve generated articles as flat `.md` files under
//! one root directory (the process working directory in production). The
//! filesystem is the database: titles are re-derived from content on every
//! listing and ordering comes from modification timestamps. There is no
//! locking; concurrent writes to the same filename race and the last writer
//! wins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::error::StoreError;
use crate::models::BlogSummary;

/// Filenames never surfaced by `list`, even when present on disk.
pub const RESERVED_FILENAMES: [&str; 3] = ["README.md", "task.md", "implementation_plan.md"];

/// Flat-file store for generated articles.
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create-or-overwrite `filename` with UTF-8 `content`. Later writes
    /// silently overwrite earlier ones; there is no versioning.
    pub fn persist(&self, filename: &str, content: &str) -> Result<(), StoreError> {
        fs::write(self.root.join(filename), content)?;
        Ok(())
    }

    /// Enumerate stored articles, newest first.
    ///
    /// Reserved filenames are excluded. Unreadable entries are skipped with
    /// a warning rather than aborting the whole listing.
    pub fn list(&self) -> Result<Vec<BlogSummary>, StoreError> {
        let mut blogs = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable directory entry: {err}");
                    continue;
                }
            };

            let filename = entry.file_name().to_string_lossy().into_owned();
            if !filename.ends_with(".md") || RESERVED_FILENAMES.contains(&filename.as_str()) {
                continue;
            }

            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            match summarize(&filename, &path) {
                Ok(summary) => blogs.push(summary),
                Err(err) => warn!(%filename, "Skipping unreadable blog: {err}"),
            }
        }

        blogs.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
        Ok(blogs)
    }

    /// Return the raw text of one stored article.
    ///
    /// Rejects any filename containing a path separator or parent-directory
    /// reference, and anything not ending in `.md`. Invalid UTF-8 sequences
    /// in the file are replaced rather than rejected.
    pub fn get(&self, filename: &str) -> Result<String, StoreError> {
        if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
            return Err(StoreError::InvalidFilename(filename.to_string()));
        }
        if !filename.ends_with(".md") {
            return Err(StoreError::InvalidFilename(filename.to_string()));
        }

        let path = self.root.join(filename);
        if !path.is_file() {
            return Err(StoreError::NotFound(filename.to_string()));
        }

        Ok(read_lossy(&path)?)
    }
}

fn summarize(filename: &str, path: &Path) -> Result<BlogSummary, StoreError> {
    let content = read_lossy(path)?;
    let modified = fs::metadata(path)?.modified()?;

    Ok(BlogSummary {
        filename: filename.to_string(),
        title: derive_title(filename, &content),
        modified_at: DateTime::<Utc>::from(modified),
    })
}

fn read_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Title from the first `# ` heading line, falling back to the filename stem.
fn derive_title(filename: &str, content: &str) -> String {
    for line in content.lines() {
        if let Some(heading) = line.strip_prefix("# ") {
            return heading.trim().to_string();
        }
    }
    filename.strip_suffix(".md").unwrap_or(filename).to_string()
}
