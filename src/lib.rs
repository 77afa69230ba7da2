//! vgn-check - pre-commit gate for the vgn dependency.
//!
//! # Overview
//!
//! Verifies that `go.kwusen.ca/vgn` is referenced consistently: the version
//! required in `go.mod`, the `vgn-version.txt` marker inside every submodule
//! listed in `.gitmodules`, and a clean working tree in each of those
//! submodules. Every problem is collected into a [`FailureLog`] so one run
//! reports all of them.

pub mod check;
pub mod cleanliness;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod matcher;
pub mod reconcile;
pub mod registry;
pub mod report;

// Re-export commonly used types
pub use check::{check, run_check};
pub use cleanliness::{Cleanliness, GitStatus, StatusQuery};
pub use config::CheckConfig;
pub use error::{Failure, StatusError};
pub use reconcile::{Reconciliation, versions_consistent};
pub use report::FailureLog;
