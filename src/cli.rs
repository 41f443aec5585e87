//! CLI struct definitions for the filtergate command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `main.rs`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "filtergate",
    version = env!("CARGO_PKG_VERSION"),
    about = "Versioned update engine that migrates persisted content-filter state across upgrades."
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(clap::Args, Debug)]
pub struct UpdateCli {
    /// Storage root directory holding the filters database.
    #[clap(long)]
    pub root: PathBuf,
    /// Path to the filter catalog JSON. Storage entries absent from the
    /// catalog are removed on every update run, so the catalog is required:
    /// an empty stand-in would read as "every installed filter is obsolete".
    #[clap(long)]
    pub catalog: PathBuf,
    /// Installed application version (defaults to this binary's version).
    #[clap(long)]
    pub app_version: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct StatusCli {
    /// Storage root directory holding the filters database.
    #[clap(long)]
    pub root: PathBuf,
    /// Installed application version (defaults to this binary's version).
    #[clap(long)]
    pub app_version: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the update pipeline: apply gated migrations, remove obsolete
    /// filters, record the installed version.
    Update(UpdateCli),
    /// Show run context (first run / update / up to date) without mutating
    /// anything.
    Status(StatusCli),
}
