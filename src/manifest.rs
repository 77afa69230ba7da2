//! Target version extraction from the module manifest (`go.mod`).
//!
//! Two line patterns are scanned in a single pass:
//! - the require entry `<module> <version>`, whose version becomes the target
//! - a `replace <module> ...` directive, which is always a failure

use std::fs::File;
use std::io::{BufRead, BufReader};

use regex_lite::Regex;
use tracing::debug;

use crate::config::CheckConfig;
use crate::error::Failure;
use crate::matcher::{LinePattern, match_lines};
use crate::report::FailureLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestLine {
    Require,
    Replace,
}

/// Build the require and replace patterns for `module`.
pub fn manifest_patterns(module: &str) -> Vec<LinePattern<ManifestLine>> {
    let module = regex_lite::escape(module);
    let require = Regex::new(&format!(r"{module}\s+(v.*)")).expect("Invalid regex");
    let replace = Regex::new(&format!(r"^\s*(replace)\s+{module}.*")).expect("Invalid regex");
    vec![
        LinePattern::new(ManifestLine::Require, require),
        LinePattern::new(ManifestLine::Replace, replace),
    ]
}

/// Open the manifest and extract the target version.
///
/// An unreadable manifest is recorded and treated as empty, which in turn
/// records that no target version was found.
pub fn read_target_version(config: &CheckConfig, log: &mut FailureLog) -> Option<String> {
    let path = config.manifest_path();
    match File::open(&path) {
        Ok(file) => extract_target_version(BufReader::new(file), config, log),
        Err(source) => {
            log.record(Failure::ManifestUnavailable { path, source });
            extract_target_version(std::io::empty(), config, log)
        }
    }
}

/// Scan manifest lines for the tracked module.
///
/// If several require entries match, the last one wins.
pub fn extract_target_version<R: BufRead>(
    reader: R,
    config: &CheckConfig,
    log: &mut FailureLog,
) -> Option<String> {
    let patterns = manifest_patterns(&config.module);
    let mut target = None;

    for found in match_lines(reader, &patterns) {
        let found = match found {
            Ok(found) => found,
            Err(source) => {
                log.record(Failure::ManifestReadFailed {
                    path: config.manifest_path(),
                    source,
                });
                break;
            }
        };

        match found.pattern {
            ManifestLine::Replace => log.record(Failure::OverrideDirective {
                manifest: config.manifest.clone(),
                module: config.module.clone(),
                line: found.text,
            }),
            ManifestLine::Require if found.text.starts_with(config.module.as_str()) => {
                let version = found.capture.trim().to_string();
                debug!(version = %version, "target version candidate");
                target = Some(version);
            }
            ManifestLine::Require => {}
        }
    }

    if target.is_none() {
        log.record(Failure::TargetVersionNotFound {
            manifest: config.manifest.clone(),
            module: config.module.clone(),
        });
    }
    target
}
