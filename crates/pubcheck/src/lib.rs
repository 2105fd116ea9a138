//! pubcheck: formatting compliance checks for camera-ready papers.
//!
//! Given a parsed document, [`FormatChecker`] runs five checks in a fixed
//! order (page size, margin bleed, page limit, main font and bibliography
//! links) and classifies the findings. Page size, margin, page-limit and font
//! findings block acceptance; parsing failures and bibliography advisories do
//! not.
//!
//! # Architecture
//!
//! - **pubcheck-core**: page model, the [`Page`] trait and finding types
//! - **pubcheck** (this crate): policy, checks, artifacts and the
//!   [`SnapshotPage`] adapter for pdfplumber-style JSON dumps
//!
//! # Example
//!
//! ```no_run
//! use pubcheck::{CheckOptions, FormatChecker, PaperType, Policy, load_snapshot};
//!
//! let doc = load_snapshot("123_paper.json")?;
//! let checker = FormatChecker::new(Policy::default());
//! let report = checker.format_check(&doc, PaperType::Long, &CheckOptions::default());
//! for (kind, messages) in report.iter() {
//!     for message in messages {
//!         println!("{}: {message}", kind.label());
//!     }
//! }
//! # Ok::<(), pubcheck::PubcheckError>(())
//! ```

pub mod artifacts;
pub mod background;
pub mod checks;
pub mod document;
pub mod error;
pub mod formatter;
pub mod name_check;
pub mod options;
pub mod policy;
pub mod snapshot;

#[cfg(test)]
mod test_support;

pub use pubcheck_core;
pub use pubcheck_core::{
    BBox, Color, ComplianceReport, FindingKind, FindingStore, Glyph, Hyperlink, Page, PageError,
    PageImage, Severity, Status, Word,
};

pub use background::BackgroundSampler;
pub use document::Document;
pub use error::PubcheckError;
pub use formatter::FormatChecker;
pub use name_check::{NameCheckConfig, NameChecker};
pub use options::{CheckOptions, PaperType, ParsePaperTypeError};
pub use policy::Policy;
pub use snapshot::{Snapshot, SnapshotPage, load_snapshot, parse_snapshot};
