use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;

use super::loader::RawTable;
use super::model::{AQI_COLUMN, DATE_COLUMN};

// ---------------------------------------------------------------------------
// Field coercion
// ---------------------------------------------------------------------------

/// Year-first layouts are unambiguous and tried before anything else.
const YEAR_FIRST: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];
/// Ambiguous numeric layouts, read day-first. `%Y` also accepts two digits,
/// so the two-digit-year forms go first.
const DAY_FIRST: [&str; 6] = ["%d/%m/%y", "%d-%m-%y", "%d.%m.%y", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];
/// Fallback when the day-first reading is impossible (e.g. `03/25/2024`).
const MONTH_FIRST: [&str; 3] = ["%m/%d/%Y", "%m-%d-%Y", "%m.%d.%Y"];
/// Month spelled out, e.g. `5 March 2024` or `05-Mar-2024`.
const NAMED_MONTH: [&str; 4] = ["%d %B %Y", "%d %b %Y", "%d-%b-%Y", "%B %d, %Y"];
/// Separators accepted between the date and a trailing time of day.
const TIME_SUFFIXES: [&str; 4] = [" %H:%M:%S", " %H:%M", "T%H:%M:%S", "T%H:%M"];

/// Parse a date field, day-first for ambiguous numeric forms.
///
/// Any time-of-day part is accepted and dropped. Returns `None` for anything
/// that does not read as a calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    let year_first: &[&str] = if starts_with_year(s) { &YEAR_FIRST } else { &[] };
    let layouts = year_first
        .iter()
        .chain(DAY_FIRST.iter())
        .chain(MONTH_FIRST.iter())
        .chain(NAMED_MONTH.iter());

    for layout in layouts {
        if let Ok(d) = NaiveDate::parse_from_str(s, layout) {
            return Some(d);
        }
        for suffix in TIME_SUFFIXES {
            let with_time = format!("{layout}{suffix}");
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, &with_time) {
                return Some(dt.date());
            }
        }
    }
    None
}

fn starts_with_year(s: &str) -> bool {
    s.len() > 4 && s.as_bytes()[..4].iter().all(u8::is_ascii_digit) && !s.as_bytes()[4].is_ascii_digit()
}

/// Coerce an AQI field to a number. Unparseable text and NaN become `None`.
pub fn parse_aqi(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

// ---------------------------------------------------------------------------
// Cleaning pass
// ---------------------------------------------------------------------------

/// Outcome of [`clean`]: the retained rows and how many were dropped.
#[derive(Debug, Clone)]
pub struct Cleaned {
    /// Every source column, typed, in header order.
    pub frame: DataFrame,
    pub dropped: usize,
    /// Retained rows whose date could not be parsed.
    pub null_dates: usize,
}

/// Coerce `DATE` and `AQI`, type the remaining columns, and drop every row
/// whose AQI is missing. Rows with an unparseable date are kept.
pub fn clean(table: &RawTable) -> PolarsResult<Cleaned> {
    let mut columns: Vec<Column> = Vec::with_capacity(table.headers.len());
    for (idx, name) in table.headers.iter().enumerate() {
        let raw = table.records.iter().map(|r| table.field(r, idx));
        let series = if idx == table.date_idx {
            Series::new(name.as_str().into(), raw.map(parse_date).collect::<Vec<_>>())
        } else if idx == table.aqi_idx {
            Series::new(name.as_str().into(), raw.map(parse_aqi).collect::<Vec<_>>())
        } else if idx == table.city_idx {
            Series::new(name.as_str().into(), raw.collect::<Vec<&str>>())
        } else {
            infer_column(name, raw)
        };
        columns.push(series.into());
    }

    let frame = DataFrame::new(columns)?;
    let before = frame.height();
    let frame = frame
        .lazy()
        .filter(col(AQI_COLUMN).is_not_null())
        .collect()?;
    let dropped = before - frame.height();
    let null_dates = frame.column(DATE_COLUMN)?.null_count();

    log::info!(
        "Cleaning kept {} rows, dropped {dropped} with missing AQI ({null_dates} kept rows have no date)",
        frame.height()
    );

    Ok(Cleaned {
        frame,
        dropped,
        null_dates,
    })
}

/// Type a column with no dedicated parser: integer if every non-empty field
/// is one, else float, else text.
fn infer_column<'a>(name: &str, raw: impl Iterator<Item = &'a str>) -> Series {
    let text = Series::new(
        name.into(),
        raw.map(|s| Some(s.trim()).filter(|s| !s.is_empty()))
            .collect::<Vec<Option<&str>>>(),
    );
    text.strict_cast(&DataType::Int64)
        .or_else(|_| text.strict_cast(&DataType::Float64))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn table(rows: &[[&str; 4]]) -> RawTable {
        RawTable {
            headers: vec!["City".into(), "DATE".into(), "AQI".into(), "PM10".into()],
            records: rows.iter().map(|r| csv::StringRecord::from(r.to_vec())).collect(),
            date_idx: 1,
            aqi_idx: 2,
            city_idx: 0,
        }
    }

    #[test]
    fn ambiguous_dates_read_day_first() {
        assert_eq!(parse_date("05/03/2024"), ymd(2024, 3, 5));
        assert_eq!(parse_date("05-03-2024"), ymd(2024, 3, 5));
        assert_eq!(parse_date("05.03.24"), ymd(2024, 3, 5));
    }

    #[test]
    fn iso_dates_stay_year_first() {
        assert_eq!(parse_date("2024-03-05"), ymd(2024, 3, 5));
        assert_eq!(parse_date("2024-03-05 14:30:00"), ymd(2024, 3, 5));
    }

    #[test]
    fn impossible_day_first_falls_back_to_month_first() {
        assert_eq!(parse_date("03/25/2024"), ymd(2024, 3, 25));
    }

    #[test]
    fn named_months_and_times_parse() {
        assert_eq!(parse_date("5 March 2024"), ymd(2024, 3, 5));
        assert_eq!(parse_date("05-Mar-2024"), ymd(2024, 3, 5));
        assert_eq!(parse_date("05/03/2024 08:15"), ymd(2024, 3, 5));
    }

    #[test]
    fn garbage_dates_become_none() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("31/02/2024"), None);
    }

    #[test]
    fn aqi_coercion() {
        assert_eq!(parse_aqi(" 87 "), Some(87.0));
        assert_eq!(parse_aqi("101.5"), Some(101.5));
        assert_eq!(parse_aqi("abc"), None);
        assert_eq!(parse_aqi(""), None);
        assert_eq!(parse_aqi("NaN"), None);
    }

    #[test]
    fn rows_with_non_numeric_aqi_are_dropped() {
        let cleaned = clean(&table(&[
            ["Raipur", "01/03/2024", "50", "7"],
            ["Raipur", "02/03/2024", "abc", "8"],
            ["Delhi", "03/03/2024", "", "9"],
        ]))
        .unwrap();
        assert_eq!(cleaned.dropped, 2);
        assert_eq!(cleaned.frame.height(), 1);
        let aqi = cleaned.frame.column("AQI").unwrap().f64().unwrap();
        assert_eq!(aqi.get(0), Some(50.0));
        assert_eq!(aqi.null_count(), 0);
    }

    #[test]
    fn rows_with_bad_dates_are_kept() {
        let cleaned = clean(&table(&[["Raipur", "someday", "70", "1"]])).unwrap();
        assert_eq!(cleaned.frame.height(), 1);
        assert_eq!(cleaned.null_dates, 1);
        assert_eq!(cleaned.frame.column("DATE").unwrap().null_count(), 1);
    }

    #[test]
    fn column_types_follow_the_data() {
        let cleaned = clean(&table(&[
            ["Raipur", "01/03/2024", "50", "7"],
            ["Raipur", "02/03/2024", "60", ""],
        ]))
        .unwrap();
        let frame = &cleaned.frame;
        assert_eq!(frame.column("DATE").unwrap().dtype(), &DataType::Date);
        assert_eq!(frame.column("AQI").unwrap().dtype(), &DataType::Float64);
        assert_eq!(frame.column("City").unwrap().dtype(), &DataType::String);
        assert_eq!(frame.column("PM10").unwrap().dtype(), &DataType::Int64);
        assert_eq!(frame.column("PM10").unwrap().null_count(), 1);
    }

    #[test]
    fn mixed_columns_fall_back_to_float_then_text() {
        let floats = infer_column("x", ["1", "2.5"].into_iter());
        assert_eq!(floats.dtype(), &DataType::Float64);
        let text = infer_column("x", ["1", "high"].into_iter());
        assert_eq!(text.dtype(), &DataType::String);
    }
}
