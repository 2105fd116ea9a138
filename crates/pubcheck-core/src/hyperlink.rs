//! Page hyperlink types.
//!
//! Provides [`Hyperlink`] for representing resolved URI links extracted from
//! Link annotations.

use crate::BBox;

/// A resolved hyperlink on a page.
///
/// The bounding box is optional because upstream extractors frequently report
/// only the target URI.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hyperlink {
    /// The resolved URI or destination string.
    pub uri: String,
    /// Bounding box of the link on the page.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bbox: Option<BBox>,
}

impl Hyperlink {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            bbox: None,
        }
    }
}
