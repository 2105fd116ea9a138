//! Images placed on a page.

use crate::geometry::BBox;

/// An image drawn on a page.
///
/// Coordinates use pdfplumber's top-left origin system. Image contents are
/// irrelevant to layout checks; only the placement is kept.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageImage {
    /// Display area on the page.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub bbox: BBox,
    /// XObject name (e.g., "Im0"), when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
}

impl PageImage {
    pub fn new(bbox: BBox) -> Self {
        Self { bbox, name: None }
    }
}
