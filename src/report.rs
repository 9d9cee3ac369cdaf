use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use polars::prelude::*;

use crate::data::model::MonthlyAverage;

// ---------------------------------------------------------------------------
// Data preview
// ---------------------------------------------------------------------------

/// The first `rows` cleaned readings as a text table.
pub fn preview(frame: &DataFrame, rows: usize) -> String {
    frame.head(Some(rows)).to_string()
}

// ---------------------------------------------------------------------------
// Data information
// ---------------------------------------------------------------------------

/// Entry count plus per-column non-null count and type.
pub fn info(frame: &DataFrame) -> String {
    let columns = frame.get_columns();
    let name_width = columns
        .iter()
        .map(|c| c.name().len())
        .chain(std::iter::once("Column".len()))
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        format!("{} entries", frame.height()),
        format!("Data columns (total {} columns):", frame.width()),
        format!(" #   {:<name_width$}  Non-Null Count  Dtype", "Column"),
    ];
    let mut dtype_counts: BTreeMap<String, usize> = BTreeMap::new();
    for (idx, column) in columns.iter().enumerate() {
        let non_null = column.len() - column.null_count();
        let dtype = column.dtype().to_string();
        lines.push(format!(
            " {idx:<3} {:<name_width$}  {:<14}  {dtype}",
            column.name().as_str(),
            format!("{non_null} non-null"),
        ));
        *dtype_counts.entry(dtype).or_default() += 1;
    }

    let dtypes = dtype_counts
        .iter()
        .map(|(dtype, n)| format!("{dtype}({n})"))
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!("dtypes: {dtypes}"));
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Analysis summary
// ---------------------------------------------------------------------------

/// The three headline figures for one city and window.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub city: String,
    pub cutoff: NaiveDate,
    /// Mean over every reading in the window, not over the monthly means.
    pub overall_mean: f64,
    pub highest: MonthlyAverage,
    pub lowest: MonthlyAverage,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "--- Analysis for {} (since {}) ---",
            self.city,
            self.cutoff.format("%d %b %Y")
        )?;
        writeln!(f, "1. Average AQI: {:.2}", self.overall_mean)?;
        writeln!(
            f,
            "2. Highest Pollution Month: {} (Avg AQI: {:.2})",
            self.highest.month,
            self.highest.mean.unwrap_or(f64::NAN)
        )?;
        write!(
            f,
            "3. Lowest Pollution Month: {} (Avg AQI: {:.2})",
            self.lowest.month,
            self.lowest.mean.unwrap_or(f64::NAN)
        )
    }
}
