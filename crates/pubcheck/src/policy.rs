//! Policy constants for a venue.
//!
//! Every threshold the checks compare against lives in [`Policy`]. The
//! defaults describe an ACL-style A4 template; a JSON file can override any
//! subset of the fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PubcheckError;
use crate::options::PaperType;

/// Expected physical page size, in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperSize {
    pub width: f64,
    pub height: f64,
    /// Largest accepted absolute difference per dimension.
    pub tolerance: f64,
}

impl Default for PaperSize {
    fn default() -> Self {
        // ISO A4.
        Self {
            width: 595.0,
            height: 842.0,
            tolerance: 0.0,
        }
    }
}

impl PaperSize {
    /// Returns `true` if `width` x `height` matches within tolerance.
    pub fn matches(&self, width: f64, height: f64) -> bool {
        (width - self.width).abs() <= self.tolerance
            && (height - self.height).abs() <= self.tolerance
    }
}

/// Nominal margins and the slack allowed on each edge, in points.
///
/// A coordinate is inside the left band when `x0 < horizontal - left_offset`,
/// and likewise for the other edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginPolicy {
    /// Left and right margin width.
    pub horizontal: f64,
    /// Top and bottom margin height.
    pub vertical: f64,
    pub left_offset: f64,
    pub right_offset: f64,
    pub top_offset: f64,
    pub bottom_offset: f64,
}

impl Default for MarginPolicy {
    fn default() -> Self {
        Self {
            horizontal: 71.0,
            vertical: 57.0,
            left_offset: 2.0,
            right_offset: 4.5,
            top_offset: 1.0,
            bottom_offset: 1.0,
        }
    }
}

impl MarginPolicy {
    pub fn left_limit(&self) -> f64 {
        self.horizontal - self.left_offset
    }

    pub fn right_limit(&self) -> f64 {
        self.horizontal - self.right_offset
    }

    pub fn top_limit(&self) -> f64 {
        self.vertical - self.top_offset
    }

    pub fn bottom_limit(&self) -> f64 {
        self.vertical - self.bottom_offset
    }
}

/// Maximum main-content pages per paper type. `None` is unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageBudgets {
    pub long: Option<usize>,
    pub short: Option<usize>,
    pub demo: Option<usize>,
    pub other: Option<usize>,
}

impl Default for PageBudgets {
    fn default() -> Self {
        Self {
            long: Some(9),
            short: Some(5),
            demo: Some(7),
            other: None,
        }
    }
}

impl PageBudgets {
    pub fn budget(&self, paper_type: PaperType) -> Option<usize> {
        match paper_type {
            PaperType::Long => self.long,
            PaperType::Short => self.short,
            PaperType::Demo => self.demo,
            PaperType::Other => self.other,
        }
    }
}

/// Bibliography link thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BibliographyPolicy {
    /// Substrings that identify a DOI resolver link.
    pub doi_domains: Vec<String>,
    /// Fewer DOI links than this is reported.
    pub min_doi_links: usize,
    /// A share of arXiv links above this is reported.
    pub max_arxiv_link_ratio: f64,
    /// Fewer links in total than this is reported.
    pub min_links: usize,
    /// More textual arXiv mentions after the references marker than this is
    /// reported.
    pub max_arxiv_mentions: usize,
}

impl Default for BibliographyPolicy {
    fn default() -> Self {
        Self {
            doi_domains: vec!["doi.org".to_string()],
            min_doi_links: 3,
            max_arxiv_link_ratio: 0.2,
            min_links: 5,
            max_arxiv_mentions: 10,
        }
    }
}

/// Every constant the checks use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub paper: PaperSize,
    pub margins: MarginPolicy,
    /// Luminance of an empty page.
    pub background_luminance: u8,
    /// DPI used when sampling regions for background.
    pub sampling_resolution: f64,
    /// DPI of annotated violation pages.
    pub annotation_resolution: f64,
    /// Outline width on annotated pages, in pixels.
    pub annotation_stroke: u32,
    pub page_budgets: PageBudgets,
    /// Substrings marking the start of back matter.
    pub limit_keywords: Vec<String>,
    /// Substrings marking the start of the bibliography.
    pub reference_keywords: Vec<String>,
    /// A main font is accepted when its name ends with one of these.
    pub accepted_fonts: Vec<String>,
    /// Smallest share of glyphs the main font must cover.
    pub min_main_font_share: f64,
    pub bibliography: BibliographyPolicy,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            paper: PaperSize::default(),
            margins: MarginPolicy::default(),
            background_luminance: 255,
            sampling_resolution: 72.0,
            annotation_resolution: 150.0,
            annotation_stroke: 5,
            page_budgets: PageBudgets::default(),
            limit_keywords: strings(&[
                "References",
                "Acknowledgments",
                "Acknowledgements",
                "Acknowledgment",
                "Acknowledgement",
                "EthicsStatement",
                "EthicalConsiderations",
                "BroaderImpact",
                "EthicalConcerns",
                "EthicalStatement",
                "EthicalDiscussion",
                "Limitations",
            ]),
            reference_keywords: strings(&["References"]),
            accepted_fonts: strings(&[
                "TimesNewRomanPSMT",
                "NimbusRomNo9L-Regu",
                "TeXGyreTermesX-Regular",
                "STIXTwoText-Regular",
                "Times-Roman",
            ]),
            min_main_font_share: 0.35,
            bibliography: BibliographyPolicy::default(),
        }
    }
}

impl Policy {
    /// Parse a policy from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, PubcheckError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a policy override file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PubcheckError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Page budget for `paper_type`.
    pub fn page_budget(&self, paper_type: PaperType) -> Option<usize> {
        self.page_budgets.budget(paper_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paper_is_exact_a4() {
        let paper = PaperSize::default();
        assert!(paper.matches(595.0, 842.0));
        assert!(!paper.matches(595.0, 842.5));
        assert!(!paper.matches(612.0, 792.0));
    }

    #[test]
    fn tolerance_widens_match() {
        let paper = PaperSize {
            tolerance: 1.0,
            ..PaperSize::default()
        };
        assert!(paper.matches(595.9, 841.1));
        assert!(!paper.matches(597.0, 842.0));
    }

    #[test]
    fn default_margin_limits() {
        let margins = MarginPolicy::default();
        assert_eq!(margins.left_limit(), 69.0);
        assert_eq!(margins.right_limit(), 66.5);
        assert_eq!(margins.top_limit(), 56.0);
        assert_eq!(margins.bottom_limit(), 56.0);
    }

    #[test]
    fn default_budgets() {
        let policy = Policy::default();
        assert_eq!(policy.page_budget(PaperType::Long), Some(9));
        assert_eq!(policy.page_budget(PaperType::Short), Some(5));
        assert_eq!(policy.page_budget(PaperType::Demo), Some(7));
        assert_eq!(policy.page_budget(PaperType::Other), None);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let policy = Policy::from_json_str(
            r#"{"margins": {"left_offset": 0}, "page_budgets": {"long": 8}, "min_main_font_share": 0.5}"#,
        )
        .unwrap();
        assert_eq!(policy.margins.left_offset, 0.0);
        assert_eq!(policy.margins.right_offset, 4.5);
        assert_eq!(policy.page_budget(PaperType::Long), Some(8));
        assert_eq!(policy.page_budget(PaperType::Short), Some(5));
        assert_eq!(policy.min_main_font_share, 0.5);
        assert_eq!(policy.accepted_fonts, Policy::default().accepted_fonts);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = Policy::from_json_str(r#"{"margins": 3}"#).unwrap_err();
        assert!(matches!(err, PubcheckError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Policy::from_json_file("/nonexistent/policy.json").unwrap_err();
        assert!(matches!(err, PubcheckError::Io(_)));
    }

    #[test]
    fn from_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.json");
        std::fs::write(&path, r#"{"background_luminance": 250}"#).unwrap();
        let policy = Policy::from_json_file(&path).unwrap();
        assert_eq!(policy.background_luminance, 250);
        assert_eq!(policy.sampling_resolution, 72.0);
    }
}
