//! Background sampling.
//!
//! A region counts as empty when its rendered pixels are indistinguishable
//! from the page background. Text painted in the background colour, or fully
//! hidden behind a same-coloured box, does not count as content.

use image::GrayImage;
use pubcheck_core::{BBox, Page, PageError};
use tracing::trace;

use crate::policy::Policy;

/// Decides whether page regions are blank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundSampler {
    luminance: u8,
    resolution: f64,
}

impl BackgroundSampler {
    pub fn new(luminance: u8, resolution: f64) -> Self {
        Self {
            luminance,
            resolution,
        }
    }

    pub fn from_policy(policy: &Policy) -> Self {
        Self::new(policy.background_luminance, policy.sampling_resolution)
    }

    /// The background luminance being compared against.
    pub fn luminance(&self) -> u8 {
        self.luminance
    }

    /// Render `region` of `page` and test it against the background.
    pub fn is_background<P: Page + ?Sized>(
        &self,
        page: &P,
        region: &BBox,
    ) -> Result<bool, PageError> {
        let raster = page.render(region, self.resolution)?;
        Ok(self.raster_is_background(&raster))
    }

    /// `true` when the mean pixel value equals the background luminance.
    /// An empty raster is background.
    pub fn raster_is_background(&self, raster: &GrayImage) -> bool {
        let count = u64::from(raster.width()) * u64::from(raster.height());
        if count == 0 {
            return true;
        }
        let sum: u64 = raster.pixels().map(|p| u64::from(p.0[0])).sum();
        let mean = sum as f64 / count as f64;
        trace!(mean, background = self.luminance, "sampled region");
        mean == f64::from(self.luminance)
    }
}
