//! Author-name checker backed by an external program.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use pubcheck::{NameCheckConfig, NameChecker, PubcheckError};
use tracing::debug;

/// Runs `program`, writing the [`NameCheckConfig`] as JSON to its stdin and
/// reading a JSON array of warning strings from its stdout.
#[derive(Debug, Clone)]
pub struct CommandNameChecker {
    program: PathBuf,
}

impl CommandNameChecker {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl NameChecker for CommandNameChecker {
    fn check(&self, config: &NameCheckConfig) -> Result<Vec<String>, PubcheckError> {
        debug!(program = %self.program.display(), file = %config.file.display(), "running name checker");
        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            serde_json::to_writer(&mut stdin, config)?;
            stdin.write_all(b"\n")?;
        }
        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(PubcheckError::NameCheck(format!(
                "{} exited with {}",
                self.program.display(),
                output.status
            )));
        }
        serde_json::from_slice(&output.stdout).map_err(|e| {
            PubcheckError::NameCheck(format!(
                "{} printed invalid output: {e}",
                self.program.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn config() -> NameCheckConfig {
        NameCheckConfig::for_file(Path::new("a.pdf"))
    }

    // Scripts are written and run from a single test so that no other test
    // forks while a script file is still open for writing.
    #[cfg(unix)]
    #[test]
    fn command_outcomes() {
        use std::os::unix::fs::PermissionsExt;

        let err = CommandNameChecker::new("/nonexistent/namecheck")
            .check(&config())
            .unwrap_err();
        assert!(matches!(err, PubcheckError::Io(_)));

        let dir = tempfile::tempdir().unwrap();
        let write_script = |name: &str, body: &str| {
            let path = dir.path().join(name);
            std::fs::write(&path, body).unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path
        };

        let ok = write_script(
            "namecheck.sh",
            "#!/bin/sh\ncat > /dev/null\necho '[\"Check author: J. Doe\"]'\n",
        );
        let failing = write_script("fail.sh", "#!/bin/sh\ncat > /dev/null\nexit 3\n");
        let garbage = write_script("garbage.sh", "#!/bin/sh\ncat > /dev/null\necho nope\n");

        let warnings = CommandNameChecker::new(&ok).check(&config()).unwrap();
        assert_eq!(warnings, ["Check author: J. Doe"]);

        let err = CommandNameChecker::new(&failing).check(&config()).unwrap_err();
        assert!(err.to_string().contains("exited with"), "{err}");

        let err = CommandNameChecker::new(&garbage).check(&config()).unwrap_err();
        assert!(err.to_string().contains("invalid output"), "{err}");
    }
}
