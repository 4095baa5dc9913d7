//! CLI argument definitions for the population table normalizer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "popnorm",
    version,
    about = "Normalize population-by-age tables into (region, age, population) records",
    long_about = "Normalize population-by-age spreadsheets exported as CSV.\n\n\
                  Detects whether a table is already long (separate age and population\n\
                  columns) or wide (one column per age) and reshapes it into canonical\n\
                  region/age/population records."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a CSV table into canonical records.
    Normalize(NormalizeArgs),

    /// Show the detected column roles and table shape.
    Detect(DetectArgs),

    /// Print the effective keyword sets.
    Keywords(KeywordArgs),
}

#[derive(Args)]
pub struct KeywordArgs {
    /// TOML file overriding the region/age/population keyword sets.
    #[arg(long = "keywords", value_name = "FILE")]
    pub keywords: Option<PathBuf>,
}

#[derive(Args)]
pub struct DetectArgs {
    /// CSV file to inspect (UTF-8).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub keywords: KeywordArgs,
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// CSV file to normalize (UTF-8).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub keywords: KeywordArgs,

    /// Read grouped population values such as "1,500".
    #[arg(long = "thousands")]
    pub thousands: bool,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Write output to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only show these regions (repeatable).
    #[arg(long = "region", value_name = "NAME")]
    pub regions: Vec<String>,

    /// Print dropped rows, zeroed cells and ignored columns.
    #[arg(long = "report")]
    pub report: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Csv,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
