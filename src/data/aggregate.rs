use std::collections::BTreeMap;

use polars::prelude::*;

use super::model::{MonthlyAverage, YearMonth, AQI_COLUMN, DATE_COLUMN};

/// Group dated readings by calendar month and average their AQI.
///
/// The result is chronological and contiguous from the first to the last
/// month that has data; months in between with no readings are present with
/// `mean: None` and `count: 0`. Undated readings are ignored. A month whose
/// mean is not a number (e.g. `inf` and `-inf` together) also has no mean.
pub fn monthly_means(frame: &DataFrame) -> PolarsResult<Vec<MonthlyAverage>> {
    let grouped = frame
        .clone()
        .lazy()
        .filter(col(DATE_COLUMN).is_not_null())
        .group_by([col(DATE_COLUMN).dt().truncate(lit("1mo")).alias("month_start")])
        .agg([
            col(AQI_COLUMN).mean().alias("mean"),
            col(AQI_COLUMN).count().cast(DataType::UInt64).alias("count"),
        ])
        .sort(["month_start"], SortMultipleOptions::default())
        .select([
            col("month_start").dt().year().cast(DataType::Int32).alias("year"),
            col("month_start").dt().month().cast(DataType::Int32).alias("month"),
            col("mean"),
            col("count"),
        ])
        .collect()?;

    let years = grouped.column("year")?.i32()?;
    let months = grouped.column("month")?.i32()?;
    let means = grouped.column("mean")?.f64()?;
    let counts = grouped.column("count")?.u64()?;

    let mut buckets: BTreeMap<YearMonth, (Option<f64>, usize)> = BTreeMap::new();
    for (((year, month), mean), count) in years
        .into_iter()
        .zip(months.into_iter())
        .zip(means.into_iter())
        .zip(counts.into_iter())
    {
        let (Some(year), Some(month)) = (year, month) else { continue };
        let key = YearMonth::new(year, month as u32);
        buckets.insert(key, (mean.filter(|m| !m.is_nan()), count.unwrap_or(0) as usize));
    }

    let (Some(&first), Some(&last)) = (buckets.keys().next(), buckets.keys().next_back()) else {
        return Ok(Vec::new());
    };

    let mut series = Vec::new();
    let mut month = first;
    while month <= last {
        let (mean, count) = buckets.get(&month).copied().unwrap_or((None, 0));
        series.push(MonthlyAverage { month, mean, count });
        let next = month.succ();
        if next == month {
            break;
        }
        month = next;
    }
    Ok(series)
}

/// Month with the highest mean. Months without a numeric mean are skipped;
/// the earliest month wins a tie.
pub fn highest(series: &[MonthlyAverage]) -> Option<MonthlyAverage> {
    extreme(series, |candidate, best| candidate > best)
}

/// Month with the lowest mean. Months without a numeric mean are skipped;
/// the earliest month wins a tie.
pub fn lowest(series: &[MonthlyAverage]) -> Option<MonthlyAverage> {
    extreme(series, |candidate, best| candidate < best)
}

fn extreme(series: &[MonthlyAverage], beats: impl Fn(f64, f64) -> bool) -> Option<MonthlyAverage> {
    let mut best: Option<(MonthlyAverage, f64)> = None;
    for entry in series {
        let Some(mean) = entry.mean.filter(|m| !m.is_nan()) else { continue };
        match best {
            Some((_, current)) if !beats(mean, current) => {}
            _ => best = Some((*entry, mean)),
        }
    }
    best.map(|(entry, _)| entry)
}
