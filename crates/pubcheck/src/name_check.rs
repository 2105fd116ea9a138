//! Seam to the external author-name checker.
//!
//! The checker inspects how author names in the bibliography are written. It
//! is not part of this crate: callers plug one in through [`NameChecker`] and
//! its warnings are appended verbatim to the bibliography findings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PubcheckError;

/// Settings handed to a name checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCheckConfig {
    /// Document being checked.
    pub file: PathBuf,
    pub show_names: bool,
    pub whole_name: bool,
    pub first_name: bool,
    pub last_name: bool,
    /// Heading that starts the bibliography.
    pub ref_string: String,
    pub mode: String,
    pub initials: bool,
}

impl NameCheckConfig {
    /// The configuration used for every bibliography audit of `file`.
    pub fn for_file(file: &Path) -> Self {
        Self {
            file: file.to_path_buf(),
            show_names: false,
            whole_name: false,
            first_name: true,
            last_name: true,
            ref_string: "References".to_string(),
            mode: "ensemble".to_string(),
            initials: true,
        }
    }
}

/// An author-name checker. Returns free-text warnings.
pub trait NameChecker: Send + Sync {
    fn check(&self, config: &NameCheckConfig) -> Result<Vec<String>, PubcheckError>;
}

impl<F> NameChecker for F
where
    F: Fn(&NameCheckConfig) -> Result<Vec<String>, PubcheckError> + Send + Sync,
{
    fn check(&self, config: &NameCheckConfig) -> Result<Vec<String>, PubcheckError> {
        self(config)
    }
}
