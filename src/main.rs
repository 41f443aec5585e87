use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use filtergate::cli::{Cli, Command, StatusCli, UpdateCli};
use filtergate::core::catalog::FilterCatalog;
use filtergate::core::convert::LegacyModifierConverter;
use filtergate::core::migration::UpdateContext;
use filtergate::core::update;
use filtergate::core::update::FILTERGATE_VERSION;

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Update(args) => run_update(args),
        Command::Status(args) => run_status(args),
    };

    if let Err(err) = result {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run_update(args: UpdateCli) -> Result<()> {
    let catalog = FilterCatalog::load(&args.catalog)
        .with_context(|| format!("loading catalog {}", args.catalog.display()))?;
    let current_version = args.app_version.as_deref().unwrap_or(FILTERGATE_VERSION);

    let ctx = UpdateContext::new(&args.root, catalog, Box::new(LegacyModifierConverter::new()));
    let run_info = update::check_and_update(&ctx, current_version)
        .context("update pipeline failed; it will be retried on the next start")?;

    if run_info.is_first_run {
        println!("{} first run, version {} recorded", "✓".green(), run_info.current_version);
    } else if run_info.is_update {
        println!("{} updated to {}", "✓".green(), run_info.current_version);
    } else {
        println!("{} already up to date ({})", "✓".green(), run_info.current_version);
    }
    Ok(())
}

fn run_status(args: StatusCli) -> Result<()> {
    let current_version = args.app_version.as_deref().unwrap_or(FILTERGATE_VERSION);
    let ctx = UpdateContext::new(
        &args.root,
        FilterCatalog::default(),
        Box::new(LegacyModifierConverter::new()),
    );
    let run_info = update::get_run_info(&ctx, current_version)?;

    if run_info.is_first_run {
        println!("first run (no recorded version), installed {}", run_info.current_version);
    } else if run_info.is_update {
        println!(
            "update pending: {} -> {}",
            run_info.previous_version, run_info.current_version
        );
    } else {
        println!("up to date ({})", run_info.current_version);
    }
    Ok(())
}
