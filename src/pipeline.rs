use std::io::Write;

use polars::prelude::*;

use crate::config::AnalysisConfig;
use crate::data::aggregate::{highest, lowest, monthly_means};
use crate::data::clean::{clean, Cleaned};
use crate::data::filter::select;
use crate::data::loader::load_csv;
use crate::data::model::{MonthlyAverage, AQI_COLUMN};
use crate::error::{AnalysisError, Result};
use crate::report::{info, preview, Summary};

/// Everything one run produces. The chart is drawn from `monthly`.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub cleaned: Cleaned,
    /// Readings for the target city inside the window.
    pub selection: DataFrame,
    pub monthly: Vec<MonthlyAverage>,
    pub summary: Summary,
}

/// Filter, aggregate and summarise an already-cleaned frame.
pub fn analyse(
    frame: &DataFrame,
    config: &AnalysisConfig,
) -> Result<(DataFrame, Vec<MonthlyAverage>, Summary)> {
    let selection = select(frame, &config.city, config.cutoff)?;
    let monthly = monthly_means(&selection)?;

    let empty_window = || AnalysisError::EmptyWindow {
        city: config.city.clone(),
        cutoff: config.cutoff,
    };
    let overall_mean = selection
        .column(AQI_COLUMN)?
        .f64()?
        .mean()
        .ok_or_else(empty_window)?;
    let (Some(highest), Some(lowest)) = (highest(&monthly), lowest(&monthly)) else {
        return Err(empty_window());
    };

    let summary = Summary {
        city: config.city.clone(),
        cutoff: config.cutoff,
        overall_mean,
        highest,
        lowest,
    };
    Ok((selection, monthly, summary))
}

/// Run every stage in order, writing the console report to `out` as each
/// stage completes. A fatal condition stops the run before any later output.
pub fn run<W: Write>(config: &AnalysisConfig, out: &mut W) -> Result<Analysis> {
    let table = load_csv(&config.input)?;
    writeln!(out, "File loaded successfully!")?;

    let cleaned = clean(&table)?;
    writeln!(out, "\nData cleaned and prepared. Here are the first few rows:")?;
    writeln!(out, "{}", preview(&cleaned.frame, config.preview_rows))?;
    writeln!(out, "\nData Information:")?;
    writeln!(out, "{}", info(&cleaned.frame))?;

    let (selection, monthly, summary) = analyse(&cleaned.frame, config)?;
    writeln!(out, "\n{summary}")?;

    Ok(Analysis {
        cleaned,
        selection,
        monthly,
        summary,
    })
}
