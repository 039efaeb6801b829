//! CLI argument definitions for the occupancy calendar.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use ghcal_cli::edit::DayEdit;
use ghcal_output::DEFAULT_ORG;

#[derive(Parser)]
#[command(
    name = "ghcal",
    version,
    about = "Guest-house occupancy calendar - turn room sheets into a monthly calendar and back",
    long_about = "Read an irregular guest-house occupancy CSV, map its month, date and six room \
                  columns, view the result as a monthly calendar, correct days, and export a \
                  clean CSV."
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

    /// Allow guest names in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the built-in sample sheet.
    Sample,

    /// Show the first rows of a CSV with column numbers.
    Preview(PreviewArgs),

    /// List months with their day counts.
    Months(BuildArgs),

    /// Show the calendar for one or all months.
    Calendar(CalendarArgs),

    /// Show per-room occupancy for one or all months.
    Availability(AvailabilityArgs),

    /// Apply day edits and write the export CSV.
    Export(ExportArgs),
}

/// Where the CSV text comes from.
#[derive(Args)]
pub struct InputArgs {
    /// CSV file to read, or `-` for standard input.
    #[arg(value_name = "INPUT", required_unless_present = "sample")]
    pub input: Option<PathBuf>,

    /// Use the built-in sample sheet instead of INPUT.
    #[arg(long = "sample", conflicts_with = "input")]
    pub sample: bool,
}

#[derive(Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of rows to show.
    #[arg(long = "rows", default_value_t = ghcal_ingest::DEFAULT_PREVIEW_ROWS)]
    pub rows: usize,
}

/// Input plus column mapping: everything needed to build the table.
#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// JSON mapping file (`{"month": 0, "date": 1, "rooms": [2, 3, 4, 5, 6, 7]}`).
    #[arg(
        long = "mapping",
        value_name = "FILE",
        conflicts_with_all = ["month_col", "date_col", "room_cols"]
    )]
    pub mapping: Option<PathBuf>,

    /// Column holding the month label (default 0).
    #[arg(long = "month-col", value_name = "INDEX")]
    pub month_col: Option<usize>,

    /// Column holding the date (default 1).
    #[arg(long = "date-col", value_name = "INDEX")]
    pub date_col: Option<usize>,

    /// Six comma-separated room columns (default 2,3,4,5,6,7).
    #[arg(long = "room-cols", value_name = "INDICES", value_delimiter = ',')]
    pub room_cols: Option<Vec<usize>>,

    /// Leading rows to leave out of the table, such as a header line.
    #[arg(long = "skip-rows", value_name = "N", default_value_t = 0)]
    pub skip_rows: usize,
}

#[derive(Args)]
pub struct CalendarArgs {
    #[command(flatten)]
    pub build: BuildArgs,

    /// Only show this month.
    #[arg(long = "month", value_name = "MONTH")]
    pub month: Option<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ViewFormatArg,
}

#[derive(Args)]
pub struct AvailabilityArgs {
    #[command(flatten)]
    pub build: BuildArgs,

    /// Only show this month.
    #[arg(long = "month", value_name = "MONTH")]
    pub month: Option<String>,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub build: BuildArgs,

    /// Replace a day's occupants: `MONTH/DAY=r1|r2|r3|r4|r5|r6` (empty frees a room).
    #[arg(long = "set", value_name = "EDIT")]
    pub set: Vec<DayEdit>,

    /// Comma-separated month order for the export (default: order of appearance).
    #[arg(long = "month-order", value_name = "MONTHS", value_delimiter = ',')]
    pub month_order: Vec<String>,

    /// Organisation prefix of the export file name.
    #[arg(long = "org", default_value = DEFAULT_ORG)]
    pub org: String,

    /// Output file or directory (default: current directory).
    #[arg(long = "output", short = 'o', value_name = "PATH", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the CSV instead of writing a file.
    #[arg(long = "stdout")]
    pub stdout: bool,

    /// Also save the mapping used to a JSON file.
    #[arg(long = "save-mapping", value_name = "FILE")]
    pub save_mapping: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ViewFormatArg {
    Table,
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
