//! Full consistency check: manifest, registry, then every submodule.
//!
//! Steps (in order):
//! 1. Target version from the manifest (replace directives are failures)
//! 2. Submodule paths from the registry
//! 3. Per submodule: marker reconciliation, then working tree cleanliness
//!
//! Nothing aborts the run. A failed reconciliation skips only that
//! submodule's cleanliness check; sibling submodules are always checked.

use tracing::{debug, info};

use crate::cleanliness::{StatusQuery, check_clean};
use crate::config::CheckConfig;
use crate::manifest::read_target_version;
use crate::reconcile::check_marker;
use crate::registry::read_submodule_paths;
use crate::report::FailureLog;

/// Run every check, recording failures into `log`.
pub fn run_check(config: &CheckConfig, query: &dyn StatusQuery, log: &mut FailureLog) {
    let target = read_target_version(config, log);
    debug!(target = ?target, "manifest scanned");

    let submodules = read_submodule_paths(config, log);
    debug!(count = submodules.len(), "registry scanned");

    for submodule in &submodules {
        if !check_marker(config, submodule, target.as_deref(), log) {
            continue;
        }
        check_clean(config, query, submodule, log);
    }

    info!(
        submodules = submodules.len(),
        failures = log.len(),
        "check complete"
    );
}

/// Run every check with a fresh log.
pub fn check(config: &CheckConfig, query: &dyn StatusQuery) -> FailureLog {
    let mut log = FailureLog::new();
    run_check(config, query, &mut log);
    log
}
