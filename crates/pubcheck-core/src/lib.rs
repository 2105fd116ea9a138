//! pubcheck-core: Backend-independent page model and finding types.
//!
//! This crate provides the page view the compliance checkers consume
//! ([`Page`], [`Word`], [`PageImage`], [`Glyph`], [`Hyperlink`]) and the
//! types they report through ([`FindingKind`], [`FindingStore`],
//! [`ComplianceReport`]). It knows nothing about any particular document
//! format.

pub mod color;
pub mod error;
pub mod findings;
pub mod geometry;
pub mod hyperlink;
pub mod images;
pub mod page;
pub mod text;
pub mod words;

pub use color::{Color, ColorComponentsError};
pub use error::PageError;
pub use findings::{
    ComplianceReport, FindingKind, FindingStore, Severity, Status, parsing_failure_message,
};
pub use geometry::BBox;
pub use hyperlink::Hyperlink;
pub use images::PageImage;
pub use page::{POINTS_PER_INCH, Page};
pub use text::Glyph;
pub use words::Word;
