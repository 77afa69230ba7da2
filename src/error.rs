//! Error types for vgn-check using thiserror.
//!
//! [`Failure`] is what the checker records and prints: every variant's
//! `Display` text is the operator-facing line, so it must say what is wrong
//! and what to do about it.

use std::path::PathBuf;

use thiserror::Error;

/// Placeholder shown in messages when go.mod yielded no target version.
const UNDETERMINED: &str = "<undetermined>";

/// A single consistency failure found during a check run.
#[derive(Error, Debug)]
pub enum Failure {
    #[error("Could not open {}: {source}", path.display())]
    ManifestUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed while reading {}: {source}", path.display())]
    ManifestReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Found \"replace\" in {} for {module}.\n\n  \
         Comment out this line:\n  \
         \"{line}\"\n  \
         And update the require entry for \"{module}\" to a new version,\n  \
         after committing and releasing, if necessary",
        manifest.display()
    )]
    OverrideDirective {
        manifest: PathBuf,
        module: String,
        line: String,
    },

    #[error("Could not find version of {module} to target in {}.", manifest.display())]
    TargetVersionNotFound { manifest: PathBuf, module: String },

    #[error("Could not open {}: {source}", path.display())]
    RegistryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed while reading {}: {source}", path.display())]
    RegistryReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Submodule file not found for {module} version validation:\n  \
         \"{}\"\n\n  \
         Create and commit the file at the submodule path and copy the version\n  \
         that is pointed at in {}",
        path.display(),
        manifest.display()
    )]
    MarkerMissing {
        path: PathBuf,
        manifest: PathBuf,
        module: String,
    },

    #[error("Could not read {}: {source}", path.display())]
    MarkerUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Version of {module} in {} ({}) does not start with \"{found}\":\n  \
         File with incorrect version: \"{}\"",
        manifest.display(),
        target.as_deref().unwrap_or(UNDETERMINED),
        path.display()
    )]
    VersionMismatch {
        manifest: PathBuf,
        module: String,
        target: Option<String>,
        found: String,
        path: PathBuf,
    },

    #[error("Failed to get absolute path for submodule \"{}\": {source}", path.display())]
    AbsolutePathFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run git status on \"{}\": {source}", path.display())]
    StatusQueryFailed {
        path: PathBuf,
        #[source]
        source: StatusError,
    },

    #[error("Found pending changes in \"{}\":\n\n{output}", path.display())]
    PendingChanges { path: PathBuf, output: String },
}

/// Errors from the per-submodule `git status` query.
#[derive(Error, Debug)]
pub enum StatusError {
    #[error("git was not found in PATH")]
    GitNotInstalled,

    #[error("failed to spawn git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git exited with {}:\n{output}",
            code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    NonZeroExit { code: Option<i32>, output: String },
}
