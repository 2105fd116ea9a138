use pubcheck_core::{FindingKind, FindingStore, Page};
use tracing::debug;

use super::PageErrorSet;
use crate::policy::PaperSize;

/// Flag every page whose dimensions differ from `paper`.
pub fn check_page_size<P: Page>(
    pages: &[P],
    paper: &PaperSize,
    findings: &mut FindingStore,
    page_errors: &mut PageErrorSet,
) {
    for (i, page) in pages.iter().enumerate() {
        let number = i + 1;
        if !paper.matches(page.width(), page.height()) {
            debug!(
                page = number,
                width = page.width(),
                height = page.height(),
                "page size mismatch"
            );
            findings.push(FindingKind::Size, format!("Page #{number} is not A4."));
            page_errors.insert(number);
        }
    }
}
