use std::io::Write;
use std::path::PathBuf;

use aqi_trend::config::AnalysisConfig;
use aqi_trend::data::model::YearMonth;
use aqi_trend::error::AnalysisError;
use aqi_trend::pipeline;
use aqi_trend::state::TrendChart;
use chrono::NaiveDate;
use polars::prelude::*;
use tempfile::NamedTempFile;

const READINGS: &str = "\
City,DATE,AQI,PM2.5
Raipur,01/01/2024,300,120.5
Raipur,05/03/2024,50,20.1
Raipur,20/03/2024,150,60.0
Delhi,10/03/2024,400,180.2
Raipur,not-a-date,90,35.0
Raipur,02/04/2024,abc,40.0
Raipur,15/04/2024,120,48.3
Raipur,2024-06-10,80,31.7
Raipur,12/06/2024,100,39.9
";

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn config_for(path: PathBuf) -> AnalysisConfig {
    AnalysisConfig {
        input: path,
        city: "Raipur".to_string(),
        cutoff: NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
        preview_rows: 5,
        show_chart: false,
    }
}

fn run(config: &AnalysisConfig) -> (Result<pipeline::Analysis, AnalysisError>, String) {
    let mut out = Vec::new();
    let result = pipeline::run(config, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn full_run_produces_expected_statistics() {
    let file = write_csv(READINGS);
    let (result, output) = run(&config_for(file.path().to_path_buf()));
    let analysis = result.unwrap();

    // The "abc" row is gone, everything else survives cleaning.
    assert_eq!(analysis.cleaned.dropped, 1);
    assert_eq!(analysis.cleaned.frame.height(), 8);
    assert_eq!(analysis.cleaned.frame.column("AQI").unwrap().null_count(), 0);

    // Raipur, on/after the cutoff, dated: 50, 150, 120, 80, 100.
    let sel = &analysis.selection;
    assert_eq!(sel.height(), 5);
    let cities = sel.column("City").unwrap().str().unwrap();
    assert!(cities.into_iter().all(|c| c == Some("Raipur")));
    let cutoff = NaiveDate::from_ymd_opt(2024, 2, 2).unwrap();
    let outside = sel
        .clone()
        .lazy()
        .filter(col("DATE").lt(lit(cutoff)).or(col("DATE").is_null()))
        .collect()
        .unwrap();
    assert_eq!(outside.height(), 0);

    let march = analysis
        .monthly
        .iter()
        .find(|m| m.month == YearMonth::new(2024, 3))
        .unwrap();
    assert_eq!(march.mean, Some(100.0));

    let total: usize = analysis.monthly.iter().map(|m| m.count).sum();
    assert_eq!(total, sel.height());

    assert!((analysis.summary.overall_mean - 100.0).abs() < 1e-9);
    assert_eq!(analysis.summary.highest.month, YearMonth::new(2024, 4));
    assert_eq!(analysis.summary.lowest.month, YearMonth::new(2024, 6));

    assert!(output.starts_with("File loaded successfully!"));
    assert!(output.contains("1. Average AQI: 100.00"));
    assert!(output.contains("2. Highest Pollution Month: April 2024 (Avg AQI: 120.00)"));
    assert!(output.contains("3. Lowest Pollution Month: June 2024 (Avg AQI: 90.00)"));
}

#[test]
fn empty_may_is_a_gap_not_an_extreme() {
    let file = write_csv(READINGS);
    let analysis = run(&config_for(file.path().to_path_buf())).0.unwrap();

    let months: Vec<YearMonth> = analysis.monthly.iter().map(|m| m.month).collect();
    assert_eq!(
        months,
        vec![
            YearMonth::new(2024, 3),
            YearMonth::new(2024, 4),
            YearMonth::new(2024, 5),
            YearMonth::new(2024, 6),
        ]
    );
    assert_eq!(analysis.monthly[2].mean, None);

    let chart = TrendChart::new("Raipur", analysis.summary.cutoff, &analysis.monthly);
    assert_eq!(chart.points.len(), 3);
    assert_eq!(chart.segments.len(), 2);
}

#[test]
fn missing_file_stops_before_any_output() {
    let dir = tempfile::tempdir().unwrap();
    let (result, output) = run(&config_for(dir.path().join("air_quality_data.csv")));

    let err = result.unwrap_err();
    assert!(matches!(err, AnalysisError::FileNotFound(_)));
    assert!(err.to_string().contains("Could not find"));
    assert!(output.is_empty());
}

#[test]
fn absent_city_stops_before_the_analysis() {
    let file = write_csv(READINGS);
    let mut config = config_for(file.path().to_path_buf());
    config.city = "Chennai".to_string();

    let (result, output) = run(&config);
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error: No data found for the city 'Chennai' in the dataset."
    );
    assert!(output.contains("Data Information:"));
    assert!(!output.contains("Analysis for"));
}

#[test]
fn window_past_the_data_is_reported() {
    let file = write_csv(READINGS);
    let mut config = config_for(file.path().to_path_buf());
    config.cutoff = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    let err = run(&config).0.unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyWindow { .. }));
}

#[test]
fn missing_required_column_is_fatal() {
    let file = write_csv("City,Date,AQI\nRaipur,05/03/2024,50\n");
    let err = run(&config_for(file.path().to_path_buf())).0.unwrap_err();
    assert!(matches!(err, AnalysisError::MissingColumn(ref c) if c == "DATE"));
}

#[test]
fn repeated_runs_print_identical_reports() {
    let file = write_csv(READINGS);
    let config = config_for(file.path().to_path_buf());
    let (first, out_a) = run(&config);
    let (second, out_b) = run(&config);
    assert_eq!(first.unwrap().summary, second.unwrap().summary);
    assert_eq!(out_a, out_b);
}
