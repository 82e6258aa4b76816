//! Lineage CLI - Page geometry, report inputs and footnotes for genealogy reports.

use clap::Parser;
use lineage_cli::commands;
use lineage_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> lineage_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Sizes => commands::execute_sizes(&formatter)?,
        Command::Geometry(args) => commands::execute_geometry(args, &config, &formatter)?,
        Command::Inputs(args) => commands::execute_inputs(args, &formatter)?,
        Command::Footnotes(args) => commands::execute_footnotes(args, &config, &formatter)?,
        Command::Report(args) => commands::execute_report(args, &config, &formatter)?,
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for tables and JSON.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
