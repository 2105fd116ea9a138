use std::path::Path;

use pubcheck::{Document, Policy, SnapshotPage, load_snapshot};
use tracing_subscriber::EnvFilter;

/// Send `tracing` output to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

/// Load a page snapshot with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not found
/// or is not a valid snapshot.
pub fn open_snapshot(file: &Path) -> Result<Document<SnapshotPage>, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    load_snapshot(file).map_err(|e| {
        eprintln!("Error: failed to load snapshot {}: {e}", file.display());
        1
    })
}

/// Load the policy override, or the default policy when none is given.
pub fn load_policy(file: Option<&Path>) -> Result<Policy, i32> {
    let Some(file) = file else {
        return Ok(Policy::default());
    };
    Policy::from_json_file(file).map_err(|e| {
        eprintln!("Error: failed to load policy {}: {e}", file.display());
        1
    })
}
