//! Update coordination: run-info derivation and migration execution.
//!
//! On every start the caller derives a [`RunInfo`] from the installed
//! version and the version recorded after the last successful run, then
//! hands it to [`on_update`] when an upgrade is detected. Steps execute
//! strictly in registry order and failures propagate immediately; a partial
//! migration is preferable to continuing in an unknown state, and every step
//! is idempotent so the whole pipeline can be retried on the next start.

use crate::core::error;
use crate::core::migration::{Migration, UpdateContext, builtin_migrations, remove_obsolete_filters};
use crate::core::version::is_greater_version;
use colored::Colorize;

/// Current filtergate version from Cargo.toml
pub const FILTERGATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extension run context, derived once per process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInfo {
    pub is_first_run: bool,
    pub is_update: bool,
    pub current_version: String,
    pub previous_version: String,
}

impl RunInfo {
    /// True when versions match and nothing needs to happen.
    pub fn is_noop(&self) -> bool {
        !self.is_first_run && !self.is_update
    }
}

/// Derives run info from the installed version and the recorded previous
/// version. Read-only: nothing is written here.
pub fn get_run_info(
    ctx: &UpdateContext,
    current_version: &str,
) -> Result<RunInfo, error::FiltergateError> {
    let previous_version = ctx.settings.recorded_app_version()?;
    let changed = current_version != previous_version;
    Ok(RunInfo {
        is_first_run: changed && previous_version.is_empty(),
        is_update: changed && !previous_version.is_empty(),
        current_version: current_version.to_string(),
        previous_version,
    })
}

/// Gated steps applicable when upgrading from `previous_version`, in
/// registry order. A step applies when its gate is strictly greater than the
/// version upgraded from.
pub fn select_migrations(previous_version: &str) -> Vec<Migration> {
    builtin_migrations()
        .into_iter()
        .filter(|migration| is_greater_version(migration.gate, previous_version))
        .collect()
}

/// Runs the update pipeline for `run_info`.
///
/// Selected steps execute strictly sequentially, then the unconditional
/// obsolete-filter removal runs last. Fail-fast: the first step error
/// returns immediately and no later step executes. First runs have no legacy
/// state to repair and perform no work at all.
pub fn on_update(ctx: &UpdateContext, run_info: &RunInfo) -> Result<(), error::FiltergateError> {
    if run_info.is_first_run {
        return Ok(());
    }

    if run_info.previous_version.is_empty() {
        println!("{} updating from an unrecorded version", "▸".cyan());
    } else {
        println!(
            "{} updating from {} to {}",
            "▸".cyan(),
            run_info.previous_version.yellow(),
            run_info.current_version.green()
        );
    }

    for migration in select_migrations(&run_info.previous_version) {
        println!("{} {}", "●".cyan(), migration.description);
        (migration.run)(ctx)?;
    }

    // Every update run reconciles storage against the current catalog.
    println!("{} Remove filters absent from the catalog", "●".cyan());
    remove_obsolete_filters(ctx)?;

    Ok(())
}

/// Full start-of-process sequence: derive run info, migrate when updating,
/// and on success record the installed version so the next start is a no-op.
pub fn check_and_update(
    ctx: &UpdateContext,
    current_version: &str,
) -> Result<RunInfo, error::FiltergateError> {
    let run_info = get_run_info(ctx, current_version)?;

    if run_info.is_noop() {
        return Ok(run_info);
    }

    if run_info.is_update {
        on_update(ctx, &run_info)?;
    }

    ctx.settings.record_app_version(current_version)?;
    Ok(run_info)
}
