//! Submodule marker file reconciliation against the manifest's target version.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::CheckConfig;
use crate::error::Failure;
use crate::report::FailureLog;

/// Outcome of comparing one submodule's marker with the target version.
#[derive(Debug)]
pub enum Reconciliation {
    Consistent { marker: String },
    MarkerMissing,
    MarkerUnreadable(std::io::Error),
    Mismatch { found: String },
}

impl Reconciliation {
    pub fn is_consistent(&self) -> bool {
        matches!(self, Reconciliation::Consistent { .. })
    }
}

/// Prefix rule: the marker must be a prefix of a non-empty target.
///
/// The manifest may carry a longer version (pseudo-version suffix, build
/// metadata) than the marker tracks. An empty marker therefore matches any
/// non-empty target; an absent or empty target never matches.
pub fn versions_consistent(marker: &str, target: Option<&str>) -> bool {
    match target {
        Some(target) if !target.is_empty() => target.starts_with(marker),
        _ => false,
    }
}

/// Read the marker at `marker_path` and compare it with `target`.
pub fn reconcile(marker_path: &Path, target: Option<&str>) -> Reconciliation {
    let content = match std::fs::read_to_string(marker_path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Reconciliation::MarkerMissing,
        Err(e) => return Reconciliation::MarkerUnreadable(e),
    };

    let marker = content.trim().to_string();
    if versions_consistent(&marker, target) {
        Reconciliation::Consistent { marker }
    } else {
        Reconciliation::Mismatch { found: marker }
    }
}

/// Reconcile one submodule, recording any failure.
///
/// Returns whether the submodule may go on to the cleanliness check.
pub fn check_marker(
    config: &CheckConfig,
    submodule: &Path,
    target: Option<&str>,
    log: &mut FailureLog,
) -> bool {
    let path = config.marker_path(submodule);
    let outcome = reconcile(&path, target);
    debug!(marker = %path.display(), ?outcome, "reconciled submodule");

    match failure_for(outcome, config, path, target) {
        Some(failure) => {
            log.record(failure);
            false
        }
        None => true,
    }
}

fn failure_for(
    outcome: Reconciliation,
    config: &CheckConfig,
    path: PathBuf,
    target: Option<&str>,
) -> Option<Failure> {
    match outcome {
        Reconciliation::Consistent { .. } => None,
        Reconciliation::MarkerMissing => Some(Failure::MarkerMissing {
            path,
            manifest: config.manifest.clone(),
            module: config.module.clone(),
        }),
        Reconciliation::MarkerUnreadable(source) => {
            Some(Failure::MarkerUnreadable { path, source })
        }
        Reconciliation::Mismatch { found } => Some(Failure::VersionMismatch {
            manifest: config.manifest.clone(),
            module: config.module.clone(),
            target: target.map(str::to_string),
            found,
            path,
        }),
    }
}
