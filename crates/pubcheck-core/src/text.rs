/// A single glyph drawn on a page.
///
/// Only the font name matters for font-dominance analysis; the text is kept
/// so that snapshots stay readable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    /// The text content of this glyph.
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: String,
    /// Font name, including any subset prefix (e.g. `ABCDEF+TimesNewRomanPSMT`).
    pub fontname: String,
}

impl Glyph {
    pub fn new(text: impl Into<String>, fontname: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fontname: fontname.into(),
        }
    }
}
