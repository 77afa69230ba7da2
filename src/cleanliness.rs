//! Submodule working tree cleanliness via `git status --porcelain`.
//!
//! The query shells out to the system `git` binary with a scrubbed
//! environment. Pre-commit hooks export `GIT_DIR`, `GIT_INDEX_FILE` and
//! friends for the parent repository; inherited as-is they make a status
//! query inside a submodule report on the parent instead.

use std::env;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::config::CheckConfig;
use crate::error::{Failure, StatusError};
use crate::report::FailureLog;

/// Variables passed through to `git`; everything else is cleared.
const PASSTHROUGH_ENV: &[&str] = &["PATH", "HOME", "SYSTEMROOT"];

/// Read-only working tree status for a directory.
#[cfg_attr(test, mockall::automock)]
pub trait StatusQuery {
    /// Combined porcelain output for `dir`; empty means clean.
    fn porcelain_status(&self, dir: &Path) -> Result<String, StatusError>;
}

/// [`StatusQuery`] backed by the system `git` binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitStatus;

impl StatusQuery for GitStatus {
    fn porcelain_status(&self, dir: &Path) -> Result<String, StatusError> {
        let git = which::which("git").map_err(|_| StatusError::GitNotInstalled)?;

        let mut cmd = Command::new(git);
        cmd.args(["status", "--porcelain"])
            .current_dir(dir)
            .env_clear();
        for key in PASSTHROUGH_ENV {
            if let Some(value) = env::var_os(key) {
                cmd.env(key, value);
            }
        }

        let output = cmd.output().map_err(StatusError::SpawnFailed)?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(StatusError::NonZeroExit {
                code: output.status.code(),
                output: combined,
            });
        }

        Ok(combined)
    }
}

/// Outcome of one submodule status query.
#[derive(Debug)]
pub enum Cleanliness {
    Clean,
    Dirty(String),
    QueryFailed(StatusError),
}

/// Run `query` in `dir` and classify the result.
pub fn query_cleanliness(query: &dyn StatusQuery, dir: &Path) -> Cleanliness {
    match query.porcelain_status(dir) {
        Ok(output) if output.is_empty() => Cleanliness::Clean,
        Ok(output) => Cleanliness::Dirty(output),
        Err(e) => Cleanliness::QueryFailed(e),
    }
}

/// Verify one submodule has no pending changes, recording any failure.
///
/// If the directory cannot be made absolute the failure is recorded and the
/// query still runs against the unresolved path.
pub fn check_clean(
    config: &CheckConfig,
    query: &dyn StatusQuery,
    submodule: &Path,
    log: &mut FailureLog,
) {
    let dir = config.submodule_dir(submodule);
    let dir = match std::path::absolute(&dir) {
        Ok(abs) => abs,
        Err(source) => {
            log.record(Failure::AbsolutePathFailed {
                path: submodule.to_path_buf(),
                source,
            });
            dir
        }
    };

    let outcome = query_cleanliness(query, &dir);
    debug!(dir = %dir.display(), ?outcome, "queried submodule status");

    match outcome {
        Cleanliness::Clean => {}
        Cleanliness::Dirty(output) => log.record(Failure::PendingChanges {
            path: submodule.to_path_buf(),
            output,
        }),
        Cleanliness::QueryFailed(source) => log.record(Failure::StatusQueryFailed {
            path: submodule.to_path_buf(),
            source,
        }),
    }
}
