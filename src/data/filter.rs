use chrono::NaiveDate;
use polars::prelude::*;

use super::model::{CITY_COLUMN, DATE_COLUMN};
use crate::error::{AnalysisError, Result};

// ---------------------------------------------------------------------------
// Row predicates
// ---------------------------------------------------------------------------

/// Exact, case-sensitive city match.
pub fn in_city(city: &str) -> Expr {
    col(CITY_COLUMN).eq(lit(city))
}

/// A reading is inside the window when its date is on or after `cutoff`.
/// A null date compares as null, which the filter treats as outside.
pub fn in_window(cutoff: NaiveDate) -> Expr {
    col(DATE_COLUMN).gt_eq(lit(cutoff))
}

// ---------------------------------------------------------------------------
// Filtering stages
// ---------------------------------------------------------------------------

/// Readings for `city`, in file order. Zero matches is fatal.
pub fn filter_city(frame: &DataFrame, city: &str) -> Result<DataFrame> {
    let matched = frame.clone().lazy().filter(in_city(city)).collect()?;
    if matched.height() == 0 {
        return Err(AnalysisError::NoCityData(city.to_string()));
    }
    log::info!("{} of {} readings belong to '{city}'", matched.height(), frame.height());
    Ok(matched)
}

/// Readings dated on or after `cutoff`.
///
/// Rows whose date failed to parse are excluded here and counted in the log,
/// since they cannot be placed in any month.
pub fn filter_since(frame: &DataFrame, cutoff: NaiveDate) -> Result<DataFrame> {
    let undated = frame.column(DATE_COLUMN)?.null_count();
    if undated > 0 {
        log::warn!("Excluding {undated} readings with an unparseable date from the window");
    }
    let kept = frame.clone().lazy().filter(in_window(cutoff)).collect()?;
    log::info!("{} readings on or after {cutoff}", kept.height());
    Ok(kept)
}

/// City filter followed by the date window. An empty window is fatal.
pub fn select(frame: &DataFrame, city: &str, cutoff: NaiveDate) -> Result<DataFrame> {
    let for_city = filter_city(frame, city)?;
    let windowed = filter_since(&for_city, cutoff)?;
    if windowed.height() == 0 {
        return Err(AnalysisError::EmptyWindow {
            city: city.to_string(),
            cutoff,
        });
    }
    Ok(windowed)
}
