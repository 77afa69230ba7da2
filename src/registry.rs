//! Submodule path extraction from the registry (`.gitmodules`).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use regex_lite::Regex;
use tracing::debug;

use crate::config::CheckConfig;
use crate::error::Failure;
use crate::matcher::{LinePattern, match_lines};
use crate::report::FailureLog;

fn path_pattern() -> LinePattern<()> {
    LinePattern::new((), Regex::new(r"path\s*=\s*(.*)").expect("Invalid regex"))
}

/// Open the registry and list submodule paths in file order.
///
/// An unreadable registry is recorded and yields no paths.
pub fn read_submodule_paths(config: &CheckConfig, log: &mut FailureLog) -> Vec<PathBuf> {
    let path = config.registry_path();
    match File::open(&path) {
        Ok(file) => extract_submodule_paths(BufReader::new(file), config, log),
        Err(source) => {
            log.record(Failure::RegistryUnavailable { path, source });
            Vec::new()
        }
    }
}

/// Collect every `path = <value>` entry, trimmed. Duplicates are kept.
pub fn extract_submodule_paths<R: BufRead>(
    reader: R,
    config: &CheckConfig,
    log: &mut FailureLog,
) -> Vec<PathBuf> {
    let patterns = [path_pattern()];
    let mut paths = Vec::new();

    for found in match_lines(reader, &patterns) {
        match found {
            Ok(found) => {
                let path = PathBuf::from(found.capture.trim());
                debug!(path = %path.display(), "registered submodule");
                paths.push(path);
            }
            Err(source) => {
                log.record(Failure::RegistryReadFailed {
                    path: config.registry_path(),
                    source,
                });
                break;
            }
        }
    }

    paths
}
