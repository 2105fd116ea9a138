//! Page snapshots.
//!
//! A snapshot is a JSON dump of what an upstream extractor saw on every page,
//! using pdfplumber attribute names:
//!
//! ```json
//! {"pages": [{"width": 595, "height": 842,
//!             "words": [{"text": "Title", "x0": 72, "top": 60, "x1": 120, "bottom": 72,
//!                        "non_stroking_color": [0]}],
//!             "images": [{"x0": 72, "top": 100, "x1": 300, "bottom": 250}],
//!             "chars": [{"fontname": "ABCDEF+TimesNewRomanPSMT", "text": "T"}],
//!             "text": "Title\n...",
//!             "hyperlinks": [{"uri": "https://doi.org/10.18653/v1/P19-1001"}]}]}
//! ```
//!
//! Rendering uses a box model: a white sheet with every word box filled in its
//! fill luminance and every image box filled black.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{GrayImage, Luma};
use pubcheck_core::{
    BBox, Glyph, Hyperlink, POINTS_PER_INCH, Page, PageError, PageImage, Word,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::Document;
use crate::error::PubcheckError;

const PAPER_WHITE: u8 = 255;
const IMAGE_INK: u8 = 0;

/// One page of a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotPage {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub words: Vec<Word>,
    #[serde(default)]
    pub images: Vec<PageImage>,
    /// Every glyph on the page; pdfplumber calls these `chars`.
    #[serde(default)]
    pub chars: Vec<Glyph>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub hyperlinks: Vec<Hyperlink>,
}

/// A whole snapshot file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub pages: Vec<SnapshotPage>,
}

impl SnapshotPage {
    /// An empty page of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// An empty A4 page.
    pub fn a4() -> Self {
        Self::new(595.0, 842.0)
    }

    pub fn with_word(mut self, word: Word) -> Self {
        self.words.push(word);
        self
    }

    pub fn with_image(mut self, bbox: BBox) -> Self {
        self.images.push(PageImage::new(bbox));
        self
    }

    /// Add `count` glyphs drawn in `fontname`.
    pub fn with_glyphs(mut self, fontname: &str, count: usize) -> Self {
        self.chars
            .extend(std::iter::repeat_with(|| Glyph::new("x", fontname)).take(count));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_hyperlink(mut self, uri: impl Into<String>) -> Self {
        self.hyperlinks.push(Hyperlink::new(uri));
        self
    }

    fn validate(&self, number: usize) -> Result<(), PubcheckError> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(PubcheckError::Snapshot(format!(
                "page {number} has invalid dimensions {} x {}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Clip `region` to the page, or fail when nothing of it is on the page.
    fn clip(&self, region: &BBox) -> Result<BBox, PageError> {
        if !region.is_finite() {
            return Err(PageError::Render(format!(
                "region {region:?} has non-finite coordinates"
            )));
        }
        let clipped = BBox::new(
            region.x0.max(0.0),
            region.top.max(0.0),
            region.x1.min(self.width),
            region.bottom.min(self.height),
        );
        if clipped.x0 > clipped.x1 || clipped.top > clipped.bottom {
            return Err(PageError::Render(format!(
                "region {region:?} lies outside the {} x {} page",
                self.width, self.height
            )));
        }
        Ok(clipped)
    }
}

/// Fill the part of `bbox` that falls inside `origin` onto `canvas`.
fn paint(canvas: &mut GrayImage, origin: &BBox, scale: f64, bbox: &BBox, value: u8) {
    let Some(visible) = bbox.intersection(origin) else {
        return;
    };
    let to_px = |v: f64| v.max(0.0) as u32;
    let x_start = to_px(((visible.x0 - origin.x0) * scale).floor());
    let y_start = to_px(((visible.top - origin.top) * scale).floor());
    let x_end = to_px(((visible.x1 - origin.x0) * scale).ceil()).min(canvas.width());
    let y_end = to_px(((visible.bottom - origin.top) * scale).ceil()).min(canvas.height());
    for y in y_start..y_end {
        for x in x_start..x_end {
            canvas.put_pixel(x, y, Luma([value]));
        }
    }
}

impl Page for SnapshotPage {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn extract_words(&self) -> Result<Vec<Word>, PageError> {
        Ok(self.words.clone())
    }

    fn images(&self) -> Result<Vec<PageImage>, PageError> {
        Ok(self.images.clone())
    }

    fn glyphs(&self) -> Result<Vec<Glyph>, PageError> {
        Ok(self.chars.clone())
    }

    fn extract_text(&self) -> Result<String, PageError> {
        Ok(self.text.clone())
    }

    fn hyperlinks(&self) -> Result<Vec<Hyperlink>, PageError> {
        Ok(self.hyperlinks.clone())
    }

    fn render(&self, region: &BBox, resolution: f64) -> Result<GrayImage, PageError> {
        if !(resolution.is_finite() && resolution > 0.0) {
            return Err(PageError::Render(format!("invalid resolution {resolution}")));
        }
        let clipped = self.clip(region)?;
        let scale = resolution / POINTS_PER_INCH;
        let width = (clipped.width() * scale).round() as u32;
        let height = (clipped.height() * scale).round() as u32;
        let mut canvas = GrayImage::from_pixel(width, height, Luma([PAPER_WHITE]));
        for word in &self.words {
            paint(
                &mut canvas,
                &clipped,
                scale,
                &word.bbox,
                word.fill_color().luminance(),
            );
        }
        for image in &self.images {
            paint(&mut canvas, &clipped, scale, &image.bbox, IMAGE_INK);
        }
        Ok(canvas)
    }
}

/// Parse a snapshot that was read from `path`.
pub fn parse_snapshot(
    path: impl AsRef<Path>,
    json: &str,
) -> Result<Document<SnapshotPage>, PubcheckError> {
    let snapshot: Snapshot = serde_json::from_str(json)?;
    into_document(path.as_ref(), snapshot)
}

/// Load a snapshot file.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Document<SnapshotPage>, PubcheckError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let snapshot: Snapshot = serde_json::from_reader(reader)?;
    into_document(path, snapshot)
}

fn into_document(path: &Path, snapshot: Snapshot) -> Result<Document<SnapshotPage>, PubcheckError> {
    for (i, page) in snapshot.pages.iter().enumerate() {
        page.validate(i + 1)?;
    }
    debug!(path = %path.display(), pages = snapshot.pages.len(), "snapshot loaded");
    Ok(Document::new(path, snapshot.pages))
}
