//! Margin bleed detection.
//!
//! A word counts as bleeding when its box crosses a margin band, it is not
//! painted in the background colour, and the pixels under its box are not
//! background either. Images only need to cross a band. The bottom band must
//! be completely empty because page numbers are stamped in later.

use std::collections::BTreeSet;
use std::fmt;

use pubcheck_core::{BBox, FindingKind, FindingStore, Page, PageError};
use tracing::{debug, warn};

use super::PageErrorSet;
use crate::artifacts::{annotated_page_file_name, save_annotated_page};
use crate::background::BackgroundSampler;
use crate::document::Document;
use crate::error::PubcheckError;
use crate::options::CheckOptions;
use crate::policy::{MarginPolicy, Policy};

/// A page edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarginEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl MarginEdge {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarginEdge::Left => "left",
            MarginEdge::Right => "right",
            MarginEdge::Top => "top",
            MarginEdge::Bottom => "bottom",
        }
    }
}

impl fmt::Display for MarginEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Edges checked for words and, with the bottom check off, for images.
const SIDE_AND_TOP: [MarginEdge; 3] = [MarginEdge::Left, MarginEdge::Right, MarginEdge::Top];
const ALL_EDGES: [MarginEdge; 4] = [
    MarginEdge::Left,
    MarginEdge::Right,
    MarginEdge::Top,
    MarginEdge::Bottom,
];

/// Margin band limits for one page, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginBands {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    width: f64,
    height: f64,
}

impl MarginBands {
    pub fn for_page(margins: &MarginPolicy, width: f64, height: f64) -> Self {
        Self {
            left: margins.left_limit(),
            right: margins.right_limit(),
            top: margins.top_limit(),
            bottom: margins.bottom_limit(),
            width,
            height,
        }
    }

    /// Returns `true` if `bbox` reaches into the band along `edge`.
    pub fn crosses(&self, edge: MarginEdge, bbox: &BBox) -> bool {
        match edge {
            MarginEdge::Left => bbox.x0 < self.left,
            MarginEdge::Right => self.width - bbox.x1 < self.right,
            MarginEdge::Top => bbox.top < self.top,
            MarginEdge::Bottom => self.height - bbox.bottom < self.bottom,
        }
    }

    /// The subset of `edges` whose band `bbox` reaches into.
    pub fn edges_crossed(&self, bbox: &BBox, edges: &[MarginEdge]) -> Vec<MarginEdge> {
        edges
            .iter()
            .copied()
            .filter(|edge| self.crosses(*edge, bbox))
            .collect()
    }

    /// The full-width bottom band.
    pub fn bottom_band(&self) -> BBox {
        BBox::new(0.0, self.height - self.bottom, self.width, self.height)
    }
}

/// Margin analysis result for one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMargins {
    pub messages: Vec<String>,
    /// Offending regions in page coordinates, for annotation.
    pub regions: Vec<BBox>,
}

impl PageMargins {
    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Analyse one page, collecting into `out`.
///
/// On error `out` keeps whatever was found before the failing call.
pub fn inspect_page_margins<P: Page + ?Sized>(
    page: &P,
    number: usize,
    margins: &MarginPolicy,
    sampler: &BackgroundSampler,
    check_bottom: bool,
    out: &mut PageMargins,
) -> Result<(), PageError> {
    let bands = MarginBands::for_page(margins, page.width(), page.height());

    let mut reported = BTreeSet::new();
    for word in page.extract_words()? {
        if word.fill_color().luminance() == sampler.luminance() {
            continue;
        }
        let edges = bands.edges_crossed(&word.bbox, &SIDE_AND_TOP);
        if edges.is_empty() || sampler.is_background(page, &word.bbox)? {
            continue;
        }
        out.regions.push(word.bbox);
        for edge in edges {
            if reported.insert(edge) {
                out.messages
                    .push(format!("Text on page {number} bleeds into the {edge} margin."));
            }
        }
    }

    let image_edges: &[MarginEdge] = if check_bottom {
        &ALL_EDGES
    } else {
        &SIDE_AND_TOP
    };
    let mut image_reported = false;
    for image in page.images()? {
        if bands.edges_crossed(&image.bbox, image_edges).is_empty() {
            continue;
        }
        out.regions.push(image.bbox);
        if !image_reported {
            image_reported = true;
            out.messages
                .push(format!("An image on page {number} bleeds into the margin."));
        }
    }

    if check_bottom {
        let band = bands.bottom_band();
        if !sampler.is_background(page, &band)? {
            out.regions.push(band);
            out.messages.push(format!(
                "Text on page {number} bleeds into the bottom margin. It should be empty \
                 (e.g., without page number) and populated when building the proceedings."
            ));
        }
    }
    Ok(())
}

/// Check every page outside `page_errors` for margin bleed, saving an
/// annotated render of each offending page when an output directory is set.
pub fn check_page_margins<P: Page>(
    document: &Document<P>,
    policy: &Policy,
    options: &CheckOptions,
    page_errors: &PageErrorSet,
    findings: &mut FindingStore,
) {
    let sampler = BackgroundSampler::from_policy(policy);
    let identifier = document.identifier();

    for (number, page) in document.numbered_pages() {
        if page_errors.contains(&number) {
            continue;
        }
        let mut result = PageMargins::default();
        let outcome = inspect_page_margins(
            page,
            number,
            &policy.margins,
            &sampler,
            !options.disable_bottom_check,
            &mut result,
        );
        let PageMargins { messages, regions } = result;
        let clean = messages.is_empty();
        findings.extend(FindingKind::Margin, messages);

        if let Err(err) = outcome {
            warn!(page = number, error = %err, "margin analysis aborted");
            findings.record_page_failure(number);
            continue;
        }
        if clean {
            continue;
        }
        debug!(page = number, regions = regions.len(), "margin violations");

        let Some(dir) = options.output_dir() else {
            continue;
        };
        let path = dir.join(annotated_page_file_name(&identifier, number));
        match save_annotated_page(page, &regions, &path, policy) {
            Ok(()) => debug!(path = %path.display(), "annotated page saved"),
            Err(PubcheckError::Page(err)) => {
                warn!(page = number, error = %err, "could not render page for annotation");
                findings.record_page_failure(number);
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not save annotated page");
            }
        }
    }
}
