//! Compliance finding types.
//!
//! Provides [`FindingKind`] for categorising what a checker reported,
//! [`Severity`] for deciding whether a kind blocks acceptance,
//! [`FindingStore`] for accumulating messages during one document analysis and
//! [`ComplianceReport`] for the final, serialisable result.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// How a finding affects acceptance of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A formatting defect that blocks acceptance.
    Error,
    /// A page could not be read or rendered. Recorded, never blocking.
    Parsing,
    /// A stylistic suggestion. Never blocking.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Parsing => write!(f, "parsing"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Category of a finding. Declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum FindingKind {
    /// Page dimensions differ from the expected paper size.
    Size,
    /// Text or images bleed into a page margin.
    Margin,
    /// Back matter starts after the page budget.
    PageLimit,
    /// The main font is missing or not an accepted font.
    Font,
    /// A page could not be parsed or rendered.
    Parsing,
    /// Bibliography link hygiene.
    Bib,
}

impl FindingKind {
    /// Every kind, in report order.
    pub const ALL: [FindingKind; 6] = [
        FindingKind::Size,
        FindingKind::Margin,
        FindingKind::PageLimit,
        FindingKind::Font,
        FindingKind::Parsing,
        FindingKind::Bib,
    ];

    /// Returns the severity class of this kind.
    pub fn severity(&self) -> Severity {
        match self {
            FindingKind::Size | FindingKind::Margin | FindingKind::PageLimit | FindingKind::Font => {
                Severity::Error
            }
            FindingKind::Parsing => Severity::Parsing,
            FindingKind::Bib => Severity::Warning,
        }
    }

    /// Returns `true` if findings of this kind block acceptance.
    pub fn is_blocking(&self) -> bool {
        self.severity() == Severity::Error
    }

    /// Machine-readable name, as used for JSON keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::Size => "SIZE",
            FindingKind::Margin => "MARGIN",
            FindingKind::PageLimit => "PAGELIMIT",
            FindingKind::Font => "FONT",
            FindingKind::Parsing => "PARSING",
            FindingKind::Bib => "BIB",
        }
    }

    /// Human-readable label used in console output.
    pub fn label(&self) -> &'static str {
        match self {
            FindingKind::Size => "Size",
            FindingKind::Margin => "Margin",
            FindingKind::PageLimit => "Exceeding Page Limit",
            FindingKind::Font => "Font",
            FindingKind::Parsing => "Parsing",
            FindingKind::Bib => "Bibliography",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall classification of one document analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No findings at all.
    Clean,
    /// Only parsing failures and advisories.
    WarningsOnly,
    /// At least one blocking finding.
    Errors,
}

/// Message recorded under [`FindingKind::Parsing`] for a page that failed.
pub fn parsing_failure_message(page_number: usize) -> String {
    format!("Error occurs when parsing page #{page_number}.")
}

/// Findings accumulated while analysing one document.
///
/// Messages keep insertion order within a kind. A store belongs to exactly
/// one document analysis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindingStore {
    findings: BTreeMap<FindingKind, Vec<String>>,
    failed_pages: BTreeSet<usize>,
}

impl FindingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message under `kind`.
    pub fn push(&mut self, kind: FindingKind, message: impl Into<String>) {
        self.findings.entry(kind).or_default().push(message.into());
    }

    /// Append several messages under `kind`, in order.
    pub fn extend<I>(&mut self, kind: FindingKind, messages: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut messages = messages.into_iter().map(Into::into).peekable();
        if messages.peek().is_some() {
            self.findings.entry(kind).or_default().extend(messages);
        }
    }

    /// Record that page `page_number` (1-based) could not be parsed.
    ///
    /// Each page is recorded once no matter how many checkers fail on it, and
    /// the messages stay in page order.
    pub fn record_page_failure(&mut self, page_number: usize) {
        if !self.failed_pages.insert(page_number) {
            return;
        }
        let position = self.failed_pages.range(..page_number).count();
        let messages = self.findings.entry(FindingKind::Parsing).or_default();
        let position = position.min(messages.len());
        messages.insert(position, parsing_failure_message(page_number));
    }

    /// Messages recorded under `kind`.
    pub fn get(&self, kind: FindingKind) -> &[String] {
        self.findings.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns `true` if `message` was recorded under `kind`.
    pub fn contains(&self, kind: FindingKind, message: &str) -> bool {
        self.get(kind).iter().any(|m| m == message)
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.findings.values().all(Vec::is_empty)
    }

    /// Non-empty kinds with their messages, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (FindingKind, &[String])> {
        self.findings
            .iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(kind, messages)| (*kind, messages.as_slice()))
    }

    /// Returns `true` if any blocking kind has a message.
    pub fn has_blocking_errors(&self) -> bool {
        self.iter().any(|(kind, _)| kind.is_blocking())
    }

    /// Classify the findings.
    pub fn status(&self) -> Status {
        if self.has_blocking_errors() {
            Status::Errors
        } else if self.is_empty() {
            Status::Clean
        } else {
            Status::WarningsOnly
        }
    }

    /// Drop every finding.
    pub fn clear(&mut self) {
        self.findings.clear();
        self.failed_pages.clear();
    }

    /// Snapshot every non-empty kind into a report, regardless of severity.
    pub fn to_report(&self) -> ComplianceReport {
        ComplianceReport {
            findings: self
                .iter()
                .map(|(kind, messages)| (kind, messages.to_vec()))
                .collect(),
        }
    }
}

/// The result of a compliance check.
///
/// Empty when the document is clean or only carries warnings; otherwise every
/// recorded finding, keyed by kind.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ComplianceReport {
    findings: BTreeMap<FindingKind, Vec<String>>,
}

impl ComplianceReport {
    /// A report with no findings.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The report a finished analysis returns: empty unless something blocks.
    pub fn from_findings(store: &FindingStore) -> Self {
        if store.has_blocking_errors() {
            store.to_report()
        } else {
            Self::empty()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Messages reported under `kind`.
    pub fn get(&self, kind: FindingKind) -> &[String] {
        self.findings.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Kinds with their messages, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (FindingKind, &[String])> {
        self.findings
            .iter()
            .map(|(kind, messages)| (*kind, messages.as_slice()))
    }

    /// Returns `true` if any blocking kind is present.
    pub fn has_blocking_errors(&self) -> bool {
        self.findings.keys().any(FindingKind::is_blocking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Parsing.to_string(), "parsing");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn kind_severity_classes() {
        for kind in [
            FindingKind::Size,
            FindingKind::Margin,
            FindingKind::PageLimit,
            FindingKind::Font,
        ] {
            assert!(kind.is_blocking(), "{kind} should block");
        }
        assert_eq!(FindingKind::Parsing.severity(), Severity::Parsing);
        assert!(!FindingKind::Parsing.is_blocking());
        assert_eq!(FindingKind::Bib.severity(), Severity::Warning);
        assert!(!FindingKind::Bib.is_blocking());
    }

    #[test]
    fn kind_names_and_labels() {
        assert_eq!(FindingKind::PageLimit.to_string(), "PAGELIMIT");
        assert_eq!(FindingKind::PageLimit.label(), "Exceeding Page Limit");
        assert_eq!(FindingKind::Bib.label(), "Bibliography");
    }

    #[test]
    fn store_keeps_insertion_order_within_kind() {
        let mut store = FindingStore::new();
        store.push(FindingKind::Margin, "second page");
        store.push(FindingKind::Margin, "first page");
        assert_eq!(store.get(FindingKind::Margin), ["second page", "first page"]);
        assert!(store.contains(FindingKind::Margin, "first page"));
        assert!(!store.contains(FindingKind::Size, "first page"));
    }

    #[test]
    fn store_iterates_in_kind_order() {
        let mut store = FindingStore::new();
        store.push(FindingKind::Bib, "bib");
        store.push(FindingKind::Size, "size");
        store.push(FindingKind::Font, "font");
        let kinds: Vec<FindingKind> = store.iter().map(|(kind, _)| kind).collect();
        assert_eq!(
            kinds,
            vec![FindingKind::Size, FindingKind::Font, FindingKind::Bib]
        );
    }

    #[test]
    fn extend_with_nothing_leaves_store_empty() {
        let mut store = FindingStore::new();
        store.extend(FindingKind::Bib, Vec::<String>::new());
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
    }

    #[test]
    fn page_failures_are_deduplicated_and_sorted() {
        let mut store = FindingStore::new();
        store.record_page_failure(3);
        store.record_page_failure(1);
        store.record_page_failure(3);
        store.record_page_failure(2);
        assert_eq!(
            store.get(FindingKind::Parsing),
            [
                "Error occurs when parsing page #1.",
                "Error occurs when parsing page #2.",
                "Error occurs when parsing page #3.",
            ]
        );
    }

    #[test]
    fn status_classification() {
        let mut store = FindingStore::new();
        assert_eq!(store.status(), Status::Clean);
        store.push(FindingKind::Bib, "Couldn't find any references.");
        store.record_page_failure(1);
        assert_eq!(store.status(), Status::WarningsOnly);
        store.push(FindingKind::Font, "Can't find the main font");
        assert_eq!(store.status(), Status::Errors);
        store.clear();
        assert_eq!(store.status(), Status::Clean);
    }

    #[test]
    fn report_is_empty_without_blocking_errors() {
        let mut store = FindingStore::new();
        store.push(FindingKind::Bib, "warning");
        store.record_page_failure(4);
        let report = ComplianceReport::from_findings(&store);
        assert!(report.is_empty());
        assert!(!report.has_blocking_errors());
    }

    #[test]
    fn report_carries_every_kind_when_blocking() {
        let mut store = FindingStore::new();
        store.push(FindingKind::Size, "Page #2 is not A4.");
        store.push(FindingKind::Bib, "warning");
        let report = ComplianceReport::from_findings(&store);
        assert!(report.has_blocking_errors());
        assert_eq!(report.get(FindingKind::Size), ["Page #2 is not A4."]);
        assert_eq!(report.get(FindingKind::Bib), ["warning"]);
        assert!(report.get(FindingKind::Margin).is_empty());
    }
}
