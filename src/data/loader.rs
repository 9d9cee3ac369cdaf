use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::StringRecord;

use super::model::{AQI_COLUMN, CITY_COLUMN, DATE_COLUMN};
use crate::error::{AnalysisError, Result};

// ---------------------------------------------------------------------------
// RawTable – the file as read, before any coercion
// ---------------------------------------------------------------------------

/// Header plus every data record in file order. Fields are untouched text.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub records: Vec<StringRecord>,
    pub date_idx: usize,
    pub aqi_idx: usize,
    pub city_idx: usize,
}

impl RawTable {
    /// Field `idx` of `record`, or `""` for a short row.
    pub fn field<'a>(&self, record: &'a StringRecord, idx: usize) -> &'a str {
        record.get(idx).unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the readings CSV at `path`.
///
/// A missing file is reported as [`AnalysisError::FileNotFound`]; a header
/// without `DATE`, `AQI` and `City` is rejected before any row is read.
pub fn load_csv(path: &Path) -> Result<RawTable> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AnalysisError::FileNotFound(path.to_path_buf()),
        _ => AnalysisError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let table = read_csv(file).map_err(|e| match e {
        LoadFailure::Csv(source) => AnalysisError::Csv {
            path: path.to_path_buf(),
            source,
        },
        LoadFailure::Schema(err) => err,
    })?;

    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        table.records.len(),
        table.headers,
        path.display()
    );
    Ok(table)
}

enum LoadFailure {
    Csv(csv::Error),
    Schema(AnalysisError),
}

impl From<csv::Error> for LoadFailure {
    fn from(e: csv::Error) -> Self {
        LoadFailure::Csv(e)
    }
}

/// Parse CSV text from any reader. Rows may be shorter or longer than the
/// header; missing trailing fields read as empty.
fn read_csv<R: Read>(input: R) -> std::result::Result<RawTable, LoadFailure> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let position = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| LoadFailure::Schema(AnalysisError::MissingColumn(name.to_string())))
    };
    let date_idx = position(DATE_COLUMN)?;
    let aqi_idx = position(AQI_COLUMN)?;
    let city_idx = position(CITY_COLUMN)?;

    let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(RawTable {
        headers,
        records,
        date_idx,
        aqi_idx,
        city_idx,
    })
}
