use std::path::{Path, PathBuf};

use pubcheck_core::Page;

/// A parsed document: its pages plus the path it was loaded from.
#[derive(Debug, Clone)]
pub struct Document<P> {
    path: PathBuf,
    pages: Vec<P>,
}

impl<P: Page> Document<P> {
    pub fn new(path: impl Into<PathBuf>, pages: Vec<P>) -> Self {
        Self {
            path: path.into(),
            pages,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pages(&self) -> &[P] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Pages paired with their 1-based page number.
    pub fn numbered_pages(&self) -> impl Iterator<Item = (usize, &P)> {
        self.pages.iter().enumerate().map(|(i, page)| (i + 1, page))
    }

    /// Short name used in artifact file names: the file stem up to the first
    /// underscore (`123_paper.pdf` is `123`).
    pub fn identifier(&self) -> String {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        stem.split('_').next().unwrap_or_default().to_string()
    }
}
