use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pubcheck::PaperType;

/// Check camera-ready papers against a venue's formatting policy.
#[derive(Debug, Parser)]
#[command(name = "pubcheck", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check page snapshots for size, margin, page-limit, font and bibliography problems
    Check(CheckArgs),
}

/// Arguments of the `check` subcommand.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Page snapshot files (JSON) to check
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Submission category, which selects the page budget
    #[arg(long, value_enum, default_value_t = PaperTypeArg::Long)]
    pub paper_type: PaperTypeArg,

    /// Directory for annotated pages and findings JSON
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Do not write the findings JSON
    #[arg(long)]
    pub print_only_errors: bool,

    /// Skip the bibliography audit
    #[arg(long)]
    pub no_references: bool,

    /// Skip the author-name check
    #[arg(long)]
    pub disable_name_check: bool,

    /// Allow content (such as page numbers) in the bottom margin
    #[arg(long)]
    pub disable_bottom_check: bool,

    /// JSON file overriding policy constants
    #[arg(long, value_name = "FILE")]
    pub policy: Option<PathBuf>,

    /// Program run as the author-name checker (config JSON on stdin, JSON array of warnings on stdout)
    #[arg(long, value_name = "PROGRAM")]
    pub name_checker: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = CheckFormat::Text)]
    pub format: CheckFormat,
}

/// Paper type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaperTypeArg {
    /// Long paper
    Long,
    /// Short paper
    Short,
    /// System demonstration
    Demo,
    /// No page limit
    Other,
}

impl PaperTypeArg {
    /// Convert to the library's `PaperType`.
    pub fn to_paper_type(self) -> PaperType {
        match self {
            PaperTypeArg::Long => PaperType::Long,
            PaperTypeArg::Short => PaperType::Short,
            PaperTypeArg::Demo => PaperType::Demo,
            PaperTypeArg::Other => PaperType::Other,
        }
    }
}

/// Output format for the check subcommand.
#[derive(Debug, Clone, ValueEnum)]
pub enum CheckFormat {
    /// Human-readable findings
    Text,
    /// JSON object keyed by file
    Json,
}
