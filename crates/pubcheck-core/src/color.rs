//! Fill and stroke colors of page objects.
//!
//! Colors arrive from the parser in their PDF color space with components in
//! `[0.0, 1.0]`. The checkers only ever compare them against a background
//! luminance, so every space reduces to a single 8-bit luma value.

use std::fmt;

/// A device color as reported by the parser.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub enum Color {
    /// DeviceGray: 0.0 is black, 1.0 is white.
    Gray(f64),
    /// DeviceRGB.
    Rgb(f64, f64, f64),
    /// DeviceCMYK.
    Cmyk(f64, f64, f64, f64),
}

impl Color {
    /// Black in DeviceGray.
    pub fn black() -> Self {
        Color::Gray(0.0)
    }

    /// White in DeviceGray.
    pub fn white() -> Self {
        Color::Gray(1.0)
    }

    /// Convert to RGB components in `[0.0, 1.0]`.
    pub fn to_rgb(&self) -> (f64, f64, f64) {
        match *self {
            Color::Gray(g) => (g, g, g),
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Cmyk(c, m, y, k) => ((1.0 - c) * (1.0 - k), (1.0 - m) * (1.0 - k), (1.0 - y) * (1.0 - k)),
        }
    }

    /// 8-bit luma (ITU-R BT.601 weights), the value a greyscale render of this
    /// color would produce.
    pub fn luminance(&self) -> u8 {
        let (r, g, b) = self.to_rgb();
        let luma = 0.299 * r.clamp(0.0, 1.0) + 0.587 * g.clamp(0.0, 1.0) + 0.114 * b.clamp(0.0, 1.0);
        (luma * 255.0).round() as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Error returned when a component list does not describe a known color space.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorComponentsError(pub usize);

impl fmt::Display for ColorComponentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected 1, 3 or 4 color components, found {}",
            self.0
        )
    }
}

impl std::error::Error for ColorComponentsError {}

impl TryFrom<Vec<f64>> for Color {
    type Error = ColorComponentsError;

    fn try_from(components: Vec<f64>) -> Result<Self, Self::Error> {
        match components.as_slice() {
            [g] => Ok(Color::Gray(*g)),
            [r, g, b] => Ok(Color::Rgb(*r, *g, *b)),
            [c, m, y, k] => Ok(Color::Cmyk(*c, *m, *y, *k)),
            other => Err(ColorComponentsError(other.len())),
        }
    }
}

impl From<Color> for Vec<f64> {
    fn from(color: Color) -> Self {
        match color {
            Color::Gray(g) => vec![g],
            Color::Rgb(r, g, b) => vec![r, g, b],
            Color::Cmyk(c, m, y, k) => vec![c, m, y, k],
        }
    }
}
