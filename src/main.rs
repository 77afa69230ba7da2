//! vgn-check - CLI entry point.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use vgn_check::{CheckConfig, GitStatus, check, logging};

/// Check that the vgn version is consistent across go.mod and submodules.
#[derive(Parser, Debug)]
#[command(name = "vgn-check")]
#[command(about = "Check that the vgn version is consistent across go.mod and submodules")]
#[command(version)]
struct Cli {
    /// Repository root containing go.mod and .gitmodules.
    ///
    /// Only moves where the fixed file names are looked up; checks are unchanged.
    #[arg(short = 'C', long, default_value = ".")]
    root: PathBuf,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init();

    let config = CheckConfig::with_root(cli.root);
    let log = check(&config, &GitStatus);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    log.write_to(&mut out)
        .and_then(|()| out.flush())
        .context("Failed to write check results")?;

    Ok(ExitCode::from(log.exit_code()))
}
