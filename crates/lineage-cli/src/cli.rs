//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lineage CLI - Page geometry, report inputs and footnotes for genealogy reports.
#[derive(Debug, Parser)]
#[command(name = "lineage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LINEAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the known paper sizes
    Sizes,

    /// Compute page geometry for a paper size
    Geometry(GeometryArgs),

    /// Show the inputs a report declares
    Inputs(InputsArgs),

    /// Number the citations of one record
    Footnotes(FootnotesArgs),

    /// Build a report and print its data
    Report(ReportArgs),
}

/// Page size and orientation options shared by several commands.
#[derive(Debug, Clone, clap::Args)]
pub struct PageArgs {
    /// Custom page width in points (requires --height)
    #[arg(long, requires = "height")]
    pub width: Option<f64>,

    /// Custom page height in points (requires --width)
    #[arg(long, requires = "width")]
    pub height: Option<f64>,

    /// Turn the page sideways
    #[arg(long)]
    pub landscape: bool,
}

impl PageArgs {
    /// Explicit dimensions, if both were given
    pub fn custom_size(&self) -> Option<(f64, f64)> {
        self.width.zip(self.height)
    }
}

/// Arguments for the geometry command.
#[derive(Debug, Parser)]
pub struct GeometryArgs {
    /// Paper size name (e.g. A4, letter); defaults to the configured size
    pub size: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

/// Arguments for the inputs command.
#[derive(Debug, Parser)]
pub struct InputsArgs {
    /// Report name (individual_report, family_group_report)
    pub report: String,
}

/// Page/text placement choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlacementArg {
    /// After the whole bibliographic string
    Trailing,
    /// After the first author, title or publisher
    AfterFirstFact,
}

/// Arguments for the footnotes command.
#[derive(Debug, Parser)]
pub struct FootnotesArgs {
    /// GEDCOM file to read
    pub file: PathBuf,

    /// Record identifier, with or without @ delimiters
    pub xref: String,

    /// Where page and text go in each citation
    #[arg(long, value_enum)]
    pub placement: Option<PlacementArg>,

    /// Import into this SQLite database and read records from it
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Arguments for the report command.
#[derive(Debug, Parser)]
pub struct ReportArgs {
    /// Report name (individual_report, family_group_report)
    pub report: String,

    /// GEDCOM file to read
    pub file: PathBuf,

    /// Subject record identifier
    pub xref: String,

    /// Submit an input value (name=value); repeatable
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    #[command(flatten)]
    pub page: PageArgs,

    /// Report title
    #[arg(long)]
    pub title: Option<String>,

    /// Target printable output instead of HTML
    #[arg(long)]
    pub pdf: bool,

    /// Write the report data here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Import into this SQLite database and read records from it
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Split a `name=value` argument
pub fn parse_assignment(arg: &str) -> Option<(&str, &str)> {
    let (name, value) = arg.split_once('=')?;
    let name = name.trim();
    (!name.is_empty()).then_some((name, value))
}
