use crate::color::Color;
use crate::geometry::BBox;

/// A word extracted from a page, with the colors it is painted in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    /// The text content of this word.
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: String,
    /// Bounding box encompassing all constituent characters.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub bbox: BBox,
    /// Non-stroking (fill) color, if the parser reported one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub non_stroking_color: Option<Color>,
    /// Stroking (outline) color, if the parser reported one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stroking_color: Option<Color>,
}

impl Word {
    /// Create a word painted in the default fill color.
    pub fn new(text: impl Into<String>, bbox: BBox) -> Self {
        Self {
            text: text.into(),
            bbox,
            non_stroking_color: None,
            stroking_color: None,
        }
    }

    /// Set the fill color.
    pub fn with_fill(mut self, color: Color) -> Self {
        self.non_stroking_color = Some(color);
        self
    }

    /// The color the word is filled with. Text without an explicit fill is black.
    pub fn fill_color(&self) -> Color {
        self.non_stroking_color.unwrap_or_default()
    }
}
