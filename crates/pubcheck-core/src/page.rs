//! The parser boundary.
//!
//! A [`Page`] is a read-only view over one page of a parsed document. The
//! compliance checkers only ever see pages through this trait, so any
//! extractor (a PDF backend, a JSON snapshot, a test double) can feed them.

use image::GrayImage;

use crate::{BBox, Glyph, Hyperlink, PageError, PageImage, Word};

/// Resolution, in dots per inch, at which one point maps to one pixel.
pub const POINTS_PER_INCH: f64 = 72.0;

/// One page of a parsed document.
///
/// Every accessor apart from the dimensions can fail. Callers treat a failure
/// as affecting only the page it came from.
pub trait Page {
    /// Page width in points.
    fn width(&self) -> f64;

    /// Page height in points.
    fn height(&self) -> f64;

    /// The whole page as a bounding box.
    fn bbox(&self) -> BBox {
        BBox::new(0.0, 0.0, self.width(), self.height())
    }

    /// Words on the page, with their fill and stroke colors.
    fn extract_words(&self) -> Result<Vec<Word>, PageError>;

    /// Images placed on the page.
    fn images(&self) -> Result<Vec<PageImage>, PageError>;

    /// Every glyph drawn on the page.
    fn glyphs(&self) -> Result<Vec<Glyph>, PageError>;

    /// Plain text in reading order, lines separated by `\n`.
    fn extract_text(&self) -> Result<String, PageError>;

    /// Outbound links on the page.
    fn hyperlinks(&self) -> Result<Vec<Hyperlink>, PageError>;

    /// Render `region` (page coordinates, points) to a greyscale raster at
    /// `resolution` DPI.
    fn render(&self, region: &BBox, resolution: f64) -> Result<GrayImage, PageError>;
}
