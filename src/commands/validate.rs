//! Validate command implementation

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{FrontcheckError, Result};
use crate::registry::load_registry;
use crate::status::RunStatus;
use crate::ui::ConsoleReporter;
use crate::validator::{self, ValidateOptions};

/// Run a full validation and print the report to stdout/stderr
pub fn run(cli: &Cli) -> Result<RunStatus> {
    let cwd = std::env::current_dir().map_err(|e| FrontcheckError::WorkingDirUnavailable {
        reason: e.to_string(),
    })?;
    let base = resolve_base(&cwd, cli.base.as_deref());
    tracing::debug!(base = %base.display(), "project base");

    let registry = load_registry(cli.config.as_deref(), &base)?;
    let options = ValidateOptions { sorted: cli.sorted };

    let mut reporter = ConsoleReporter::stdio(&cwd);
    let outcome = validator::run(&registry, options, &mut reporter)?;
    Ok(outcome.status)
}

/// Absolute project base; relative `--base` values resolve against `cwd`
fn resolve_base(cwd: &Path, base: Option<&Path>) -> PathBuf {
    match base {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    }
}
