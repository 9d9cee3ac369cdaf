use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Every condition that stops the pipeline. The `Display` text is what the
/// user sees before the process exits.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Error: Could not find '{}'. Make sure the path is correct.", .0.display())]
    FileNotFound(PathBuf),

    #[error("Error: Could not read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error: Malformed CSV in '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Error: Required column '{0}' is missing from the dataset.")]
    MissingColumn(String),

    #[error("Error: No data found for the city '{0}' in the dataset.")]
    NoCityData(String),

    #[error("Error: No readings for '{city}' on or after {cutoff}.")]
    EmptyWindow { city: String, cutoff: NaiveDate },

    #[error("Error: Data processing failed: {0}")]
    Frame(#[from] polars::prelude::PolarsError),

    #[error("Error: Could not write the report: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T, E = AnalysisError> = std::result::Result<T, E>;
