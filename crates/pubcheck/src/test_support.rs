//! Page double with failure injection, shared by the unit tests.

use image::GrayImage;
use pubcheck_core::{BBox, Glyph, Hyperlink, Page, PageError, PageImage, Word};

use crate::snapshot::SnapshotPage;

/// Accessors that should fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct Failures {
    pub words: bool,
    pub images: bool,
    pub glyphs: bool,
    pub text: bool,
    pub hyperlinks: bool,
    pub render: bool,
}

/// A snapshot page whose accessors can be made to fail.
#[derive(Debug, Clone, Default)]
pub struct MockPage {
    pub inner: SnapshotPage,
    pub fail: Failures,
}

impl MockPage {
    pub fn a4() -> Self {
        SnapshotPage::a4().into()
    }

    pub fn failing_everywhere() -> Self {
        Self {
            inner: SnapshotPage::a4(),
            fail: Failures {
                words: true,
                images: true,
                glyphs: true,
                text: true,
                hyperlinks: true,
                render: true,
            },
        }
    }
}

impl From<SnapshotPage> for MockPage {
    fn from(inner: SnapshotPage) -> Self {
        Self {
            inner,
            fail: Failures::default(),
        }
    }
}

fn guard(fail: bool, what: &str) -> Result<(), PageError> {
    if fail {
        Err(PageError::Extraction(format!("injected {what} failure")))
    } else {
        Ok(())
    }
}

impl Page for MockPage {
    fn width(&self) -> f64 {
        self.inner.width()
    }

    fn height(&self) -> f64 {
        self.inner.height()
    }

    fn extract_words(&self) -> Result<Vec<Word>, PageError> {
        guard(self.fail.words, "words")?;
        self.inner.extract_words()
    }

    fn images(&self) -> Result<Vec<PageImage>, PageError> {
        guard(self.fail.images, "images")?;
        self.inner.images()
    }

    fn glyphs(&self) -> Result<Vec<Glyph>, PageError> {
        guard(self.fail.glyphs, "glyphs")?;
        self.inner.glyphs()
    }

    fn extract_text(&self) -> Result<String, PageError> {
        guard(self.fail.text, "text")?;
        self.inner.extract_text()
    }

    fn hyperlinks(&self) -> Result<Vec<Hyperlink>, PageError> {
        guard(self.fail.hyperlinks, "hyperlinks")?;
        self.inner.hyperlinks()
    }

    fn render(&self, region: &BBox, resolution: f64) -> Result<GrayImage, PageError> {
        if self.fail.render {
            return Err(PageError::Render("injected render failure".to_string()));
        }
        self.inner.render(region, resolution)
    }
}
