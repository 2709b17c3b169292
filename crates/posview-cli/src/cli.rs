//! CLI argument definitions for the posview back office.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use posview_model::DatePeriod;

#[derive(Parser)]
#[command(
    name = "posview",
    version,
    about = "Point-of-sale back office - browse business list views",
    long_about = "Browse the back-office list views (accounts, brands, customers, \
                  sales, ...) from the terminal.\n\n\
                  Every view supports search, status/range/period filters, \
                  sorting, and pagination, and can be exported to CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Allow row-level values (customer names, emails, phones) in logs.
    ///
    /// Without this flag row-level log fields are replaced with [REDACTED].
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List all registered views.
    Views,

    /// Run a view's list pipeline and render one page.
    List(ListArgs),

    /// Export a view's filtered, sorted rows (all pages) to CSV.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct ListArgs {
    /// View name (see `posview views`).
    #[arg(value_name = "VIEW")]
    pub view: String,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Page number to render (1-based; out-of-range requests are ignored).
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Override the view's fixed page size.
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// View name (see `posview views`).
    #[arg(value_name = "VIEW")]
    pub view: String,

    /// Output CSV path.
    #[arg(value_name = "OUT")]
    pub out: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Filter, sort, and data-source flags shared by `list` and `export`.
#[derive(Args)]
pub struct FilterArgs {
    /// Case-insensitive search over the view's searchable fields.
    #[arg(long, value_name = "TERM")]
    pub search: Option<String>,

    /// Status filter value; `All` means no restriction.
    #[arg(long, value_name = "VALUE")]
    pub status: Option<String>,

    /// Inclusive lower bound for the view's range field.
    ///
    /// Accepts `1500`, `$1,500`, `-12500`. An unparsable bound degrades
    /// to "no bound" with a warning.
    #[arg(long, value_name = "BOUND")]
    pub min: Option<String>,

    /// Inclusive upper bound for the view's range field.
    #[arg(long, value_name = "BOUND")]
    pub max: Option<String>,

    /// Calendar period filter on the view's date field.
    #[arg(long, value_enum, value_name = "PERIOD")]
    pub period: Option<PeriodArg>,

    /// Sort by this field.
    #[arg(long, value_name = "FIELD")]
    pub sort: Option<String>,

    /// Sort descending instead of ascending.
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Load rows from a CSV file instead of the built-in seed data.
    #[arg(long = "data", value_name = "CSV")]
    pub data: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PeriodArg {
    Today,
    Week,
    Month,
    Quarter,
    Year,
}

impl PeriodArg {
    pub fn to_period(self) -> DatePeriod {
        match self {
            PeriodArg::Today => DatePeriod::Today,
            PeriodArg::Week => DatePeriod::ThisWeek,
            PeriodArg::Month => DatePeriod::ThisMonth,
            PeriodArg::Quarter => DatePeriod::ThisQuarter,
            PeriodArg::Year => DatePeriod::ThisYear,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
