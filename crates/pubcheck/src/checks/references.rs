//! Bibliography audit.
//!
//! Counts DOI and arXiv links from the page where the bibliography starts,
//! plus textual arXiv mentions from the heading line on, and appends the name
//! checker's warnings. Every finding here is advisory.

use pubcheck_core::{FindingKind, FindingStore, Hyperlink, Page, PageError};
use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use super::page_limit::first_keyword_line;
use crate::document::Document;
use crate::name_check::{NameCheckConfig, NameChecker};
use crate::policy::{BibliographyPolicy, Policy};

const ARXIV: &str = "arxiv";

/// Link tallies over the bibliography.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkCounts {
    pub total: usize,
    pub doi: usize,
    pub arxiv: usize,
}

impl LinkCounts {
    /// Count one link. DOI resolver links take precedence over arXiv ones.
    pub fn add(&mut self, uri: &str, doi_domains: &[String]) {
        self.total += 1;
        if doi_domains.iter().any(|domain| uri.contains(domain.as_str())) {
            self.doi += 1;
        } else if uri.to_ascii_lowercase().contains(ARXIV) {
            self.arxiv += 1;
        }
    }

    /// Share of links pointing at arXiv, or `None` without links.
    pub fn arxiv_ratio(&self) -> Option<f64> {
        (self.total > 0).then(|| self.arxiv as f64 / self.total as f64)
    }
}

fn arxiv_pattern() -> Result<Regex, regex::Error> {
    RegexBuilder::new(&regex::escape(ARXIV))
        .case_insensitive(true)
        .build()
}

fn unreadable(findings: &mut FindingStore, number: usize, err: &PageError) {
    warn!(page = number, error = %err, "could not read page for bibliography audit");
    findings.push(FindingKind::Bib, format!("Can't parse page #{number}"));
    findings.record_page_failure(number);
}

/// The advisory messages for the tallied counts.
fn link_messages(counts: &LinkCounts, mentions: usize, thresholds: &BibliographyPolicy) -> Vec<String> {
    let mut messages = Vec::new();
    if counts.doi < thresholds.min_doi_links {
        messages.push(format!(
            "Bibliography should use ACL Anthology DOIs whenever possible. Only {} references do.",
            counts.doi
        ));
    }
    if counts
        .arxiv_ratio()
        .is_some_and(|ratio| ratio > thresholds.max_arxiv_link_ratio)
    {
        messages.push(format!(
            "It appears you are using arXiv links more than you should ({}/{}). Consider using \
             ACL Anthology DOIs instead.",
            counts.arxiv, counts.total
        ));
    }
    if counts.total < thresholds.min_links {
        messages.push(format!(
            "It appears most of the references are not using paper links. Only {} links found.",
            counts.total
        ));
    }
    if mentions > thresholds.max_arxiv_mentions {
        messages.push(format!(
            "It appears you are using arXiv references more than you should ({mentions} found). \
             Consider using ACL Anthology references instead."
        ));
    }
    messages
}

/// Audit bibliography links, then run `name_checker` if one is given.
pub fn check_references<P: Page>(
    document: &Document<P>,
    policy: &Policy,
    name_checker: Option<&dyn NameChecker>,
    findings: &mut FindingStore,
) {
    let mut readable: Vec<(String, Vec<Hyperlink>)> = Vec::new();
    for (number, page) in document.numbered_pages() {
        let text = match page.extract_text() {
            Ok(text) => text,
            Err(err) => {
                unreadable(findings, number, &err);
                continue;
            }
        };
        let links = page.hyperlinks().unwrap_or_else(|err| {
            unreadable(findings, number, &err);
            Vec::new()
        });
        readable.push((text, links));
    }

    let marker = readable.iter().enumerate().find_map(|(i, (text, _))| {
        first_keyword_line(text, &policy.reference_keywords).map(|line| (i, line))
    });
    let (start, start_line) = marker.unwrap_or_else(|| {
        findings.push(FindingKind::Bib, "Couldn't find any references.");
        (0, 1)
    });

    let arxiv = arxiv_pattern()
        .inspect_err(|err| warn!(error = %err, "arXiv pattern unavailable, mentions not counted"))
        .ok();
    let mut counts = LinkCounts::default();
    let mut mentions = 0;
    for (i, (text, links)) in readable.iter().enumerate().skip(start) {
        for link in links {
            counts.add(&link.uri, &policy.bibliography.doi_domains);
        }
        if let Some(arxiv) = &arxiv {
            let skip_lines = if i == start { start_line - 1 } else { 0 };
            mentions += text
                .lines()
                .skip(skip_lines)
                .map(|line| arxiv.find_iter(line).count())
                .sum::<usize>();
        }
    }
    debug!(
        links = counts.total,
        doi = counts.doi,
        arxiv_links = counts.arxiv,
        arxiv_mentions = mentions,
        "bibliography tallies"
    );
    findings.extend(
        FindingKind::Bib,
        link_messages(&counts, mentions, &policy.bibliography),
    );

    if let Some(checker) = name_checker {
        match checker.check(&NameCheckConfig::for_file(document.path())) {
            Ok(warnings) => findings.extend(FindingKind::Bib, warnings),
            Err(err) => warn!(error = %err, "name check failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PubcheckError;
    use crate::snapshot::SnapshotPage;
    use crate::test_support::MockPage;

    fn run(pages: Vec<MockPage>, checker: Option<&dyn NameChecker>) -> FindingStore {
        let doc = Document::new("dummy.pdf", pages);
        let mut findings = FindingStore::new();
        check_references(&doc, &Policy::default(), checker, &mut findings);
        findings
    }

    fn bibliography(links: &[&str]) -> MockPage {
        links
            .iter()
            .fold(SnapshotPage::a4().with_text("Conclusion\nReferences\nSmith 2020"), |page, uri| {
                page.with_hyperlink(*uri)
            })
            .into()
    }

    #[test]
    fn classification() {
        let doi = vec!["doi.org".to_string()];
        let mut counts = LinkCounts::default();
        counts.add("https://doi.org/10.18653/v1/P19-1001", &doi);
        counts.add("https://arXiv.org/abs/1706.03762", &doi);
        counts.add("https://example.com", &doi);
        assert_eq!(counts, LinkCounts { total: 3, doi: 1, arxiv: 1 });
        assert_eq!(LinkCounts::default().arxiv_ratio(), None);
    }

    #[test]
    fn healthy_bibliography_is_quiet() {
        let findings = run(
            vec![bibliography(&[
                "https://doi.org/10.18653/v1/1",
                "https://doi.org/10.18653/v1/2",
                "https://doi.org/10.18653/v1/3",
                "https://aclanthology.org/P19-1001",
                "https://arxiv.org/abs/1706.03762",
            ])],
            None,
        );
        assert!(findings.is_empty(), "{findings:?}");
    }

    #[test]
    fn too_few_dois_and_links() {
        let findings = run(
            vec![bibliography(&[
                "https://doi.org/10.18653/v1/1",
                "https://doi.org/10.18653/v1/2",
            ])],
            None,
        );
        assert_eq!(
            findings.get(FindingKind::Bib),
            [
                "Bibliography should use ACL Anthology DOIs whenever possible. Only 2 references do.",
                "It appears most of the references are not using paper links. Only 2 links found.",
            ]
        );
    }

    #[test]
    fn arxiv_link_share() {
        let findings = run(
            vec![bibliography(&[
                "https://doi.org/1",
                "https://doi.org/2",
                "https://doi.org/3",
                "https://arxiv.org/abs/1",
                "https://arxiv.org/abs/2",
            ])],
            None,
        );
        assert_eq!(
            findings.get(FindingKind::Bib),
            ["It appears you are using arXiv links more than you should (2/5). Consider using \
              ACL Anthology DOIs instead."]
        );
    }

    #[test]
    fn arxiv_mentions_counted_from_heading_line() {
        let before = "arXiv ".repeat(20);
        let after = "arXiv preprint ArXiv:1234\n".repeat(6);
        let pages = vec![
            SnapshotPage::a4().with_text(before.clone()).into(),
            SnapshotPage::a4()
                .with_text(format!("{before}\nReferences\n{after}"))
                .with_hyperlink("https://doi.org/1")
                .with_hyperlink("https://doi.org/2")
                .with_hyperlink("https://doi.org/3")
                .with_hyperlink("https://doi.org/4")
                .with_hyperlink("https://doi.org/5")
                .into(),
        ];
        let findings = run(pages, None);
        assert_eq!(
            findings.get(FindingKind::Bib),
            ["It appears you are using arXiv references more than you should (12 found). \
              Consider using ACL Anthology references instead."]
        );
    }

    #[test]
    fn missing_references_still_audits_links() {
        let findings = run(vec![MockPage::a4()], None);
        assert_eq!(
            findings.get(FindingKind::Bib),
            [
                "Couldn't find any references.",
                "Bibliography should use ACL Anthology DOIs whenever possible. Only 0 references do.",
                "It appears most of the references are not using paper links. Only 0 links found.",
            ]
        );
    }

    #[test]
    fn one_doi_one_arxiv_one_other() {
        let findings = run(
            vec![bibliography(&[
                "https://doi.org/10.18653/v1/1",
                "https://arxiv.org/abs/1706.03762",
                "https://example.com/paper.pdf",
            ])],
            None,
        );
        assert_eq!(
            findings.get(FindingKind::Bib),
            [
                "Bibliography should use ACL Anthology DOIs whenever possible. Only 1 references do.",
                "It appears you are using arXiv links more than you should (1/3). Consider using \
                 ACL Anthology DOIs instead.",
                "It appears most of the references are not using paper links. Only 3 links found.",
            ]
        );
    }

    #[test]
    fn unreadable_text_contributes_nothing() {
        let mut broken = bibliography(&["https://doi.org/1"; 5]);
        broken.fail.text = true;
        let findings = run(vec![broken], None);
        let bib = findings.get(FindingKind::Bib);
        assert_eq!(bib[0], "Can't parse page #1");
        assert_eq!(bib[1], "Couldn't find any references.");
        assert_eq!(
            findings.get(FindingKind::Parsing),
            ["Error occurs when parsing page #1."]
        );
    }

    #[test]
    fn unreadable_links_keep_the_heading() {
        let mut page: MockPage = SnapshotPage::a4()
            .with_text("arXiv arXiv\nReferences\nSmith 2020")
            .into();
        page.fail.hyperlinks = true;
        let pages = vec![page, bibliography(&["https://doi.org/1"; 5])];
        let findings = run(pages, None);
        assert_eq!(findings.get(FindingKind::Bib), ["Can't parse page #1"]);
        assert_eq!(
            findings.get(FindingKind::Parsing),
            ["Error occurs when parsing page #1."]
        );
    }

    #[test]
    fn name_checker_warnings_are_appended() {
        let checker = |config: &NameCheckConfig| -> Result<Vec<String>, PubcheckError> {
            Ok(vec![format!("Namecheck output for {}", config.file.display())])
        };
        let findings = run(vec![bibliography(&["https://doi.org/1"; 5])], Some(&checker));
        assert_eq!(
            findings.get(FindingKind::Bib),
            ["Namecheck output for dummy.pdf"]
        );
    }

    #[test]
    fn failing_name_checker_is_ignored() {
        let checker = |_: &NameCheckConfig| -> Result<Vec<String>, PubcheckError> {
            Err(PubcheckError::NameCheck("exit status 3".to_string()))
        };
        let findings = run(vec![bibliography(&["https://doi.org/1"; 5])], Some(&checker));
        assert!(findings.is_empty());
    }
}
