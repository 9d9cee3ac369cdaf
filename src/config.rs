use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

pub const DEFAULT_INPUT: &str = "air_quality_data.csv";
pub const DEFAULT_CITY: &str = "Raipur";

/// Start of the default analysis window (2 Feb 2024).
pub fn default_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 2).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Monthly air-quality trend for one city
#[derive(Parser, Debug)]
#[command(name = "aqi-trend")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:\n  \
    # Default city and window, chart window at the end\n  \
    aqi-trend\n\n  \
    # Another city, another window, console only\n  \
    aqi-trend -i readings.csv --city Delhi --cutoff 2024-06-01 --no-chart")]
pub struct Cli {
    /// Input CSV with DATE, AQI and City columns
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// City to analyse (exact, case-sensitive match)
    #[arg(short, long, default_value = DEFAULT_CITY)]
    pub city: String,

    /// Keep readings dated on or after this day (YYYY-MM-DD)
    #[arg(long, default_value = "2024-02-02")]
    pub cutoff: NaiveDate,

    /// Number of cleaned rows shown in the data preview
    #[arg(long, default_value_t = 5)]
    pub preview_rows: usize,

    /// Print the report only, without opening the chart window
    #[arg(long, default_value_t = false)]
    pub no_chart: bool,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Everything the pipeline needs, independent of how it was supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub input: PathBuf,
    pub city: String,
    pub cutoff: NaiveDate,
    pub preview_rows: usize,
    pub show_chart: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            city: DEFAULT_CITY.to_string(),
            cutoff: default_cutoff(),
            preview_rows: 5,
            show_chart: true,
        }
    }
}

impl From<Cli> for AnalysisConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            city: cli.city,
            cutoff: cli.cutoff,
            preview_rows: cli.preview_rows,
            show_chart: !cli.no_chart,
        }
    }
}
