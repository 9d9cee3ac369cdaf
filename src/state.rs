use chrono::NaiveDate;

use crate::data::model::{MonthlyAverage, YearMonth};

// ---------------------------------------------------------------------------
// Chart state
// ---------------------------------------------------------------------------

/// Everything the chart needs, prepared ahead of rendering.
///
/// X coordinates are [`YearMonth::ordinal`] values so one unit is one month.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    pub title: String,
    /// One marker per month that has a mean.
    pub points: Vec<[f64; 2]>,
    /// Runs of consecutive non-empty months. An empty month breaks the line.
    pub segments: Vec<Vec<[f64; 2]>>,
}

impl TrendChart {
    pub fn new(city: &str, cutoff: NaiveDate, monthly: &[MonthlyAverage]) -> Self {
        let mut points = Vec::with_capacity(monthly.len());
        let mut segments: Vec<Vec<[f64; 2]>> = Vec::new();
        let mut current: Vec<[f64; 2]> = Vec::new();

        for entry in monthly {
            match entry.mean {
                Some(mean) => {
                    let point = [entry.month.ordinal() as f64, mean];
                    points.push(point);
                    current.push(point);
                }
                None => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        Self {
            title: format!(
                "Monthly Average AQI Trend in {city} (since {})",
                cutoff.format("%b %Y")
            ),
            points,
            segments,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Axis label for an x coordinate: `Mon YYYY` on whole months, nothing in
/// between.
pub fn month_label(x: f64) -> String {
    if (x - x.round()).abs() > 1e-6 {
        return String::new();
    }
    YearMonth::from_ordinal(x.round() as i64).format("%b %Y")
}
