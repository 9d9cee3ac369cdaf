use std::fmt;

use chrono::{Datelike, Months, NaiveDate};

/// Column names the pipeline depends on. Matched exactly.
pub const DATE_COLUMN: &str = "DATE";
pub const AQI_COLUMN: &str = "AQI";
pub const CITY_COLUMN: &str = "City";

// ---------------------------------------------------------------------------
// YearMonth / MonthlyAverage – the aggregated series
// ---------------------------------------------------------------------------

/// A calendar month. Ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// The following calendar month.
    pub fn succ(self) -> Self {
        self.first_day()
            .and_then(|d| d.checked_add_months(Months::new(1)))
            .map_or(self, Self::of)
    }

    /// Months elapsed since January of year 0. Used as the chart's x coordinate.
    pub fn ordinal(self) -> i64 {
        self.year as i64 * 12 + self.month as i64 - 1
    }

    /// Inverse of [`YearMonth::ordinal`].
    pub fn from_ordinal(ordinal: i64) -> Self {
        Self::new(ordinal.div_euclid(12) as i32, ordinal.rem_euclid(12) as u32 + 1)
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Formats with a chrono pattern such as `%B %Y` or `%b %Y`.
    pub fn format(self, pattern: &str) -> String {
        match self.first_day() {
            Some(d) => d.format(pattern).to_string(),
            None => format!("{:04}-{:02}", self.year, self.month),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("%B %Y"))
    }
}

/// Mean AQI of one calendar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyAverage {
    pub month: YearMonth,
    /// `None` for a month with no readings inside the covered range, or
    /// whose readings do not average to a number.
    pub mean: Option<f64>,
    pub count: usize,
}
