//! Failure accumulation for a single check run.

use std::io::{self, Write};

use tracing::debug;

use crate::error::Failure;

/// Exit code when every check passed.
pub const EXIT_OK: u8 = 0;
/// Exit code when at least one failure was recorded.
pub const EXIT_FAILED: u8 = 1;

/// Ordered, append-only collection of failures.
///
/// Passed by `&mut` through every check so that one run never halts on the
/// first problem and independent runs never share state.
#[derive(Debug, Default)]
pub struct FailureLog {
    failures: Vec<Failure>,
}

impl FailureLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, failure: Failure) {
        debug!(index = self.failures.len(), "recorded failure: {}", failure);
        self.failures.push(failure);
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Write every failure as a `- ` prefixed entry, in recording order.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for failure in &self.failures {
            writeln!(out, "- {}", failure)?;
        }
        Ok(())
    }

    pub fn exit_code(&self) -> u8 {
        if self.has_failures() {
            EXIT_FAILED
        } else {
            EXIT_OK
        }
    }
}
