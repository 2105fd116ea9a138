//! Error type for per-page operations.
//!
//! Provides [`PageError`], returned by every fallible [`crate::Page`] accessor.
//! The checkers never propagate it past the page it occurred on: it is turned
//! into a finding for that page and analysis moves on.

use std::fmt;

/// Failure while reading or rendering one page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageError {
    /// Words, glyphs, text or links could not be extracted.
    Extraction(String),
    /// A region of the page could not be cropped or rendered.
    Render(String),
    /// Any other error not covered by specific variants.
    Other(String),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::Extraction(msg) => write!(f, "extraction error: {msg}"),
            PageError::Render(msg) => write!(f, "render error: {msg}"),
            PageError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PageError {}
