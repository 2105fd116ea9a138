use std::path::{Path, PathBuf};

use pubcheck::{CheckOptions, FindingStore, FormatChecker, Severity};

use crate::cli::{CheckArgs, CheckFormat};
use crate::name_checker::CommandNameChecker;
use crate::shared::{load_policy, open_snapshot};

/// Exit status when at least one document has blocking errors.
const EXIT_BLOCKING: i32 = 2;

fn serialize_failed(e: serde_json::Error) -> i32 {
    eprintln!("Error: failed to serialize findings: {e}");
    1
}

/// Findings of every document as one JSON object keyed by file path.
fn render_json(files: &[PathBuf], results: &[FindingStore]) -> Result<String, i32> {
    let output = files
        .iter()
        .zip(results)
        .map(|(file, findings)| {
            let value = serde_json::to_value(findings.to_report()).map_err(serialize_failed)?;
            Ok((file.display().to_string(), value))
        })
        .collect::<Result<serde_json::Map<String, serde_json::Value>, i32>>()?;
    serde_json::to_string_pretty(&output).map_err(serialize_failed)
}

pub fn run(args: &CheckArgs) -> Result<(), i32> {
    let mut checker = FormatChecker::new(load_policy(args.policy.as_deref())?);
    if let Some(ref program) = args.name_checker {
        checker = checker.with_name_checker(CommandNameChecker::new(program));
    }

    let options = CheckOptions {
        output_dir: Some(args.output_dir.clone()),
        print_only_errors: args.print_only_errors,
        check_references: !args.no_references,
        disable_name_check: args.disable_name_check,
        disable_bottom_check: args.disable_bottom_check,
    };

    let documents = args
        .files
        .iter()
        .map(|file| open_snapshot(file))
        .collect::<Result<Vec<_>, i32>>()?;

    let results = checker.analyze_batch(&documents, args.paper_type.to_paper_type(), &options);

    match args.format {
        CheckFormat::Text => {
            for (file, findings) in args.files.iter().zip(&results) {
                print!("{}", render_text(file, findings));
            }
        }
        CheckFormat::Json => {
            println!("{}", render_json(&args.files, &results)?);
        }
    }

    if results.iter().any(FindingStore::has_blocking_errors) {
        Err(EXIT_BLOCKING)
    } else {
        Ok(())
    }
}

/// Console report for one document.
fn render_text(file: &Path, findings: &FindingStore) -> String {
    let mut out = format!("Checking {}\n", file.display());
    if findings.is_empty() {
        out.push_str("All Clear!\n");
        return out;
    }
    for (kind, messages) in findings.iter() {
        for message in messages {
            let line = match kind.severity() {
                Severity::Error => format!("Error ({}): {message}", kind.label()),
                Severity::Parsing => format!("Parsing Error: {message}"),
                Severity::Warning => format!("Warning ({}): {message}", kind.label()),
            };
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}
