//! Shared page doubles for the integration tests.

#![allow(dead_code)]

use image::{GrayImage, Luma};
use pubcheck::{
    BBox, Color, Document, Glyph, Hyperlink, Page, PageError, PageImage, SnapshotPage, Word,
};

/// A snapshot page that can be broken or forced to render a flat raster.
#[derive(Debug, Clone)]
pub struct TestPage {
    pub inner: SnapshotPage,
    /// Every fallible accessor fails.
    pub broken: bool,
    /// Render this luminance everywhere instead of the box model.
    pub raster: Option<u8>,
}

impl From<SnapshotPage> for TestPage {
    fn from(inner: SnapshotPage) -> Self {
        Self {
            inner,
            broken: false,
            raster: None,
        }
    }
}

impl TestPage {
    pub fn a4() -> Self {
        SnapshotPage::a4().into()
    }

    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::a4()
        }
    }

    pub fn with_raster(mut self, luminance: u8) -> Self {
        self.raster = Some(luminance);
        self
    }

    fn check(&self) -> Result<(), PageError> {
        if self.broken {
            Err(PageError::Extraction("corrupt content stream".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Page for TestPage {
    fn width(&self) -> f64 {
        self.inner.width
    }

    fn height(&self) -> f64 {
        self.inner.height
    }

    fn extract_words(&self) -> Result<Vec<Word>, PageError> {
        self.check()?;
        self.inner.extract_words()
    }

    fn images(&self) -> Result<Vec<PageImage>, PageError> {
        self.check()?;
        self.inner.images()
    }

    fn glyphs(&self) -> Result<Vec<Glyph>, PageError> {
        self.check()?;
        self.inner.glyphs()
    }

    fn extract_text(&self) -> Result<String, PageError> {
        self.check()?;
        self.inner.extract_text()
    }

    fn hyperlinks(&self) -> Result<Vec<Hyperlink>, PageError> {
        self.check()?;
        self.inner.hyperlinks()
    }

    fn render(&self, region: &BBox, resolution: f64) -> Result<GrayImage, PageError> {
        self.check()?;
        match self.raster {
            Some(value) => {
                let scale = resolution / 72.0;
                Ok(GrayImage::from_pixel(
                    (region.width() * scale).round().max(1.0) as u32,
                    (region.height() * scale).round().max(1.0) as u32,
                    Luma([value]),
                ))
            }
            None => self.inner.render(region, resolution),
        }
    }
}

/// A black word in the left margin.
pub fn left_margin_word() -> Word {
    Word::new("Overfull", BBox::new(40.0, 300.0, 120.0, 310.0)).with_fill(Color::black())
}

/// An A4 page of Times text.
pub fn times_page(text: &str) -> TestPage {
    SnapshotPage::a4()
        .with_text(text)
        .with_glyphs("ABCDEF+TimesNewRomanPSMT", 200)
        .into()
}

/// A well-formed paper: `pages` Times pages, bibliography on the last page
/// with five DOI links.
pub fn compliant_paper(pages: usize) -> Document<TestPage> {
    let mut out: Vec<TestPage> = (1..pages).map(|_| times_page("Body text\nMore body")).collect();
    let mut last = SnapshotPage::a4()
        .with_text("Conclusion\nReferences\nA. Author. 2020. A paper.")
        .with_glyphs("ABCDEF+TimesNewRomanPSMT", 200);
    for i in 0..5 {
        last = last.with_hyperlink(format!("https://doi.org/10.18653/v1/2020.acl-main.{i}"));
    }
    out.push(last.into());
    Document::new("1001_camera_ready.json", out)
}

/// A paper with `pages` pages whose back matter starts at `page`, `line`.
pub fn paper_with_marker(pages: usize, page: usize, line: usize) -> Document<TestPage> {
    let out = (1..=pages)
        .map(|n| {
            if n == page {
                let mut lines = vec!["Body"; line - 1];
                lines.push("References");
                times_page(&lines.join("\n"))
            } else {
                times_page("Body")
            }
        })
        .collect();
    Document::new("paper.json", out)
}
