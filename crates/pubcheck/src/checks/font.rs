//! Main font check: the most used font must cover enough of the glyphs and
//! must be one of the accepted Times-like fonts.

use std::collections::BTreeMap;

use pubcheck_core::{FindingKind, FindingStore, Glyph, Page};
use tracing::{debug, warn};

use crate::policy::Policy;

/// Glyph counts per font name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontTally {
    counts: BTreeMap<String, usize>,
    total: usize,
}

impl FontTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, fontname: &str) {
        *self.counts.entry(fontname.to_string()).or_default() += 1;
        self.total += 1;
    }

    pub fn add_glyphs(&mut self, glyphs: &[Glyph]) {
        for glyph in glyphs {
            self.add(&glyph.fontname);
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, fontname: &str) -> usize {
        self.counts.get(fontname).copied().unwrap_or(0)
    }

    /// The most used font and its glyph count. Ties go to the greater name.
    pub fn main_font(&self) -> Option<(&str, usize)> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)))
            .map(|(name, count)| (name.as_str(), *count))
    }
}

/// Tally glyph fonts over every readable page and judge the main font.
pub fn check_font<P: Page>(pages: &[P], policy: &Policy, findings: &mut FindingStore) {
    let mut tally = FontTally::new();
    for (i, page) in pages.iter().enumerate() {
        match page.glyphs() {
            Ok(glyphs) => tally.add_glyphs(&glyphs),
            Err(err) => {
                let number = i + 1;
                warn!(page = number, error = %err, "could not read glyphs");
                findings.push(FindingKind::Font, format!("Can't parse page #{number}"));
                findings.record_page_failure(number);
            }
        }
    }

    let Some((name, count)) = tally.main_font() else {
        debug!("no glyphs to tally");
        return;
    };
    let share = count as f64 / tally.total() as f64;
    debug!(font = name, count, total = tally.total(), share, "main font");

    if share < policy.min_main_font_share {
        findings.push(FindingKind::Font, "Can't find the main font");
    }
    if !policy
        .accepted_fonts
        .iter()
        .any(|accepted| name.ends_with(accepted.as_str()))
    {
        findings.push(
            FindingKind::Font,
            format!("Wrong font. The main font used is {name}"),
        );
    }
}
