//! The aggregator: runs every check over a document and classifies the
//! outcome.

use pubcheck_core::{ComplianceReport, FindingStore, Page, Status};
use tracing::{debug, info, instrument, warn};

use crate::artifacts::{findings_file_name, save_findings};
use crate::checks::{
    PageErrorSet, check_font, check_page_limit, check_page_margins, check_page_size,
    check_references,
};
use crate::document::Document;
use crate::name_check::NameChecker;
use crate::options::{CheckOptions, PaperType};
use crate::policy::Policy;

/// Runs the compliance checks under one policy.
///
/// A checker holds no per-document state and can be shared across threads.
///
/// # Example
///
/// ```
/// use pubcheck::{CheckOptions, Document, FormatChecker, PaperType, Policy, SnapshotPage};
///
/// let doc = Document::new("123_paper.json", vec![SnapshotPage::new(612.0, 792.0)]);
/// let checker = FormatChecker::new(Policy::default());
/// let options = CheckOptions {
///     check_references: false,
///     ..CheckOptions::default()
/// };
/// let report = checker.format_check(&doc, PaperType::Long, &options);
/// assert!(report.has_blocking_errors());
/// ```
pub struct FormatChecker {
    policy: Policy,
    name_checker: Option<Box<dyn NameChecker>>,
}

impl Default for FormatChecker {
    fn default() -> Self {
        Self::new(Policy::default())
    }
}

impl FormatChecker {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            name_checker: None,
        }
    }

    /// Use `checker` for the author-name audit.
    pub fn with_name_checker(mut self, checker: impl NameChecker + 'static) -> Self {
        self.name_checker = Some(Box::new(checker));
        self
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Run every check and return all findings, warnings included.
    ///
    /// Writes `errors-<identifier>.json` into the output directory unless
    /// `print_only_errors` is set. Persistence failures are logged only.
    #[instrument(skip_all, fields(path = %document.path().display(), %paper_type))]
    pub fn analyze<P: Page>(
        &self,
        document: &Document<P>,
        paper_type: PaperType,
        options: &CheckOptions,
    ) -> FindingStore {
        let mut findings = FindingStore::new();
        let mut page_errors = PageErrorSet::new();

        debug!(pages = document.page_count(), "checking page size");
        check_page_size(
            document.pages(),
            &self.policy.paper,
            &mut findings,
            &mut page_errors,
        );
        debug!("checking margins");
        check_page_margins(document, &self.policy, options, &page_errors, &mut findings);
        debug!("checking page limit");
        check_page_limit(document, paper_type, &self.policy, &page_errors, &mut findings);
        debug!("checking fonts");
        check_font(document.pages(), &self.policy, &mut findings);
        if options.check_references {
            debug!("checking references");
            let name_checker = if options.disable_name_check {
                None
            } else {
                self.name_checker.as_deref()
            };
            check_references(document, &self.policy, name_checker, &mut findings);
        }

        if let Some(dir) = options.output_dir().filter(|_| !options.print_only_errors) {
            let path = dir.join(findings_file_name(&document.identifier()));
            if let Err(err) = save_findings(&findings, &path) {
                warn!(path = %path.display(), error = %err, "could not save findings");
            }
        }

        match findings.status() {
            Status::Clean => info!("all clear"),
            Status::WarningsOnly => info!("warnings only"),
            Status::Errors => info!("blocking errors found"),
        }
        findings
    }

    /// Check a document: an empty report when nothing blocks acceptance,
    /// otherwise every finding.
    pub fn format_check<P: Page>(
        &self,
        document: &Document<P>,
        paper_type: PaperType,
        options: &CheckOptions,
    ) -> ComplianceReport {
        ComplianceReport::from_findings(&self.analyze(document, paper_type, options))
    }

    /// [`analyze`](Self::analyze) several documents concurrently. Results are
    /// in input order.
    #[cfg(feature = "parallel")]
    pub fn analyze_batch<P: Page + Sync>(
        &self,
        documents: &[Document<P>],
        paper_type: PaperType,
        options: &CheckOptions,
    ) -> Vec<FindingStore> {
        use rayon::prelude::*;

        documents
            .par_iter()
            .map(|document| self.analyze(document, paper_type, options))
            .collect()
    }

    /// [`format_check`](Self::format_check) several documents concurrently.
    /// Reports are in input order.
    #[cfg(feature = "parallel")]
    pub fn check_batch<P: Page + Sync>(
        &self,
        documents: &[Document<P>],
        paper_type: PaperType,
        options: &CheckOptions,
    ) -> Vec<ComplianceReport> {
        self.analyze_batch(documents, paper_type, options)
            .iter()
            .map(ComplianceReport::from_findings)
            .collect()
    }
}
