//! Page-limit check.
//!
//! Main content may fill the page budget; back matter (references,
//! acknowledgments, ethics or limitations sections) may begin at the top of
//! the following page at the latest.

use pubcheck_core::{FindingKind, FindingStore, Page};
use tracing::{debug, warn};

use super::PageErrorSet;
use crate::document::Document;
use crate::options::PaperType;
use crate::policy::Policy;

/// Where back matter starts. Ordered by page, then line; both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageLimitMarker {
    pub page: usize,
    pub line: usize,
}

impl PageLimitMarker {
    pub fn new(page: usize, line: usize) -> Self {
        Self { page, line }
    }

    /// Back matter may start no later than the first line after `budget`
    /// pages.
    pub fn exceeds(&self, budget: usize) -> bool {
        *self > PageLimitMarker::new(budget + 1, 1)
    }
}

/// 1-based number of the first line of `text` containing any of `keywords`.
pub(crate) fn first_keyword_line(text: &str, keywords: &[String]) -> Option<usize> {
    text.lines()
        .position(|line| keywords.iter().any(|k| line.contains(k.as_str())))
        .map(|i| i + 1)
}

/// Find the first line, in reading order, containing a limit keyword.
///
/// Pages in `page_errors` are skipped. A page whose text cannot be extracted
/// is recorded as a parsing failure and skipped.
pub fn find_marker<P: Page>(
    document: &Document<P>,
    keywords: &[String],
    page_errors: &PageErrorSet,
    findings: &mut FindingStore,
) -> Option<PageLimitMarker> {
    for (number, page) in document.numbered_pages() {
        if page_errors.contains(&number) {
            continue;
        }
        let text = match page.extract_text() {
            Ok(text) => text,
            Err(err) => {
                warn!(page = number, error = %err, "could not extract text");
                findings.record_page_failure(number);
                continue;
            }
        };
        if let Some(line) = first_keyword_line(&text, keywords) {
            return Some(PageLimitMarker::new(number, line));
        }
    }
    None
}

/// Flag documents whose back matter starts after the page budget.
pub fn check_page_limit<P: Page>(
    document: &Document<P>,
    paper_type: PaperType,
    policy: &Policy,
    page_errors: &PageErrorSet,
    findings: &mut FindingStore,
) {
    let Some(budget) = policy.page_budget(paper_type) else {
        debug!(%paper_type, "no page budget");
        return;
    };
    if document.page_count() <= budget {
        return;
    }
    let Some(marker) = find_marker(document, &policy.limit_keywords, page_errors, findings) else {
        debug!("no back-matter marker found");
        return;
    };
    debug!(page = marker.page, line = marker.line, budget, "back-matter marker");
    if marker.exceeds(budget) {
        findings.push(
            FindingKind::PageLimit,
            format!(
                "Paper exceeds the page limit because first (References, Acknowledgments, \
                 Ethics Statement) was found on page {}, line {}.",
                marker.page, marker.line
            ),
        );
    }
}
