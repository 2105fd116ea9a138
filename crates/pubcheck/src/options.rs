//! Per-run inputs: the paper type being checked and the switches that shape a
//! run.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Submission category. Selects the page budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperType {
    #[default]
    Long,
    Short,
    Demo,
    Other,
}

impl PaperType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaperType::Long => "long",
            PaperType::Short => "short",
            PaperType::Demo => "demo",
            PaperType::Other => "other",
        }
    }
}

impl fmt::Display for PaperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown paper type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePaperTypeError(String);

impl fmt::Display for ParsePaperTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown paper type '{}' (expected long, short, demo or other)",
            self.0
        )
    }
}

impl std::error::Error for ParsePaperTypeError {}

impl FromStr for PaperType {
    type Err = ParsePaperTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "long" => Ok(PaperType::Long),
            "short" => Ok(PaperType::Short),
            "demo" => Ok(PaperType::Demo),
            "other" => Ok(PaperType::Other),
            _ => Err(ParsePaperTypeError(s.to_string())),
        }
    }
}

/// Switches for one check run.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOptions {
    /// Where annotated pages and the findings JSON go. `None` writes nothing.
    pub output_dir: Option<PathBuf>,
    /// Skip writing the findings JSON.
    pub print_only_errors: bool,
    /// Run the bibliography audit.
    pub check_references: bool,
    /// Skip the external name checker.
    pub disable_name_check: bool,
    /// Skip the bottom-margin sampling, and ignore images in the bottom band.
    pub disable_bottom_check: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            output_dir: None,
            print_only_errors: false,
            check_references: true,
            disable_name_check: false,
            disable_bottom_check: false,
        }
    }
}

impl CheckOptions {
    /// Write artifacts into `dir`.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// The output directory, if artifacts are enabled.
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }
}
