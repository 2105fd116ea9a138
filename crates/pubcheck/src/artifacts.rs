//! Files written next to a check run: annotated violation pages and the
//! findings JSON.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use pubcheck_core::{BBox, FindingStore, POINTS_PER_INCH, Page, PageError};
use tracing::instrument;

use crate::error::PubcheckError;
use crate::policy::Policy;

const OUTLINE: Rgb<u8> = Rgb([255, 0, 0]);

/// `errors-<identifier>-page-<n>.png`
pub fn annotated_page_file_name(identifier: &str, page_number: usize) -> String {
    format!("errors-{identifier}-page-{page_number}.png")
}

/// `errors-<identifier>.json`
pub fn findings_file_name(identifier: &str) -> String {
    format!("errors-{identifier}.json")
}

/// Draw a `stroke`-pixel outline around `bbox` (pixel coordinates), growing
/// outwards.
fn outline(canvas: &mut RgbImage, bbox: &BBox, stroke: u32) {
    let x = bbox.x0.round() as i32;
    let y = bbox.top.round() as i32;
    let width = (bbox.width().round() as u32).max(1);
    let height = (bbox.height().round() as u32).max(1);
    for i in 0..stroke {
        let grow = i as i32;
        let rect = Rect::at(x - grow, y - grow).of_size(width + 2 * i, height + 2 * i);
        draw_hollow_rect_mut(canvas, rect, OUTLINE);
    }
}

/// Render the whole page at `resolution` DPI and outline every region in red.
pub fn annotate_page<P: Page + ?Sized>(
    page: &P,
    regions: &[BBox],
    resolution: f64,
    stroke: u32,
) -> Result<RgbImage, PageError> {
    let raster = page.render(&page.bbox(), resolution)?;
    let mut canvas = DynamicImage::ImageLuma8(raster).to_rgb8();
    let scale = resolution / POINTS_PER_INCH;
    for region in regions {
        outline(&mut canvas, &region.scale(scale), stroke);
    }
    Ok(canvas)
}

/// Annotate a page with the policy's resolution and stroke and save it as PNG
/// at `path`, creating the parent directory when needed.
#[instrument(skip_all, fields(path = %path.display(), regions = regions.len()))]
pub fn save_annotated_page<P: Page + ?Sized>(
    page: &P,
    regions: &[BBox],
    path: &Path,
    policy: &Policy,
) -> Result<(), PubcheckError> {
    let canvas = annotate_page(
        page,
        regions,
        policy.annotation_resolution,
        policy.annotation_stroke,
    )?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    canvas.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Write every recorded finding, warnings included, as a JSON object keyed by
/// kind name.
pub fn save_findings(findings: &FindingStore, path: &Path) -> Result<(), PubcheckError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &findings.to_report())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
