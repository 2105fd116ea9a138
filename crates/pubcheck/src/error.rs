//! Error types for the plumbing around the checks.
//!
//! Uses [`thiserror`] for ergonomic error derivation. The checks themselves
//! never fail: per-page problems become findings. [`PubcheckError`] covers
//! loading policies and snapshots and persisting artifacts.

use pubcheck_core::PageError;
use thiserror::Error;

/// Error type for loading inputs and writing outputs.
#[derive(Debug, Error)]
pub enum PubcheckError {
    /// Error reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed policy, snapshot or findings JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error encoding an annotated page.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// A snapshot parsed as JSON but describes an impossible document.
    #[error("invalid snapshot: {0}")]
    Snapshot(String),

    /// The external name checker could not be run or returned garbage.
    #[error("name check failed: {0}")]
    NameCheck(String),

    /// A page could not be read or rendered.
    #[error(transparent)]
    Page(#[from] PageError),
}
