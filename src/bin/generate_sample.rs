//! Writes a synthetic `air_quality_data.csv` for trying out `aqi-trend`.
//!
//! Daily readings for a handful of cities over two years, with a seasonal
//! AQI curve, noise, mixed date layouts and a few unusable values.

use std::f64::consts::PI;

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// Column order matches the files the analysis is usually pointed at.
#[derive(Debug, Serialize)]
struct SampleRow {
    #[serde(rename = "City")]
    city: &'static str,
    #[serde(rename = "DATE")]
    date: String,
    #[serde(rename = "AQI")]
    aqi: String,
    #[serde(rename = "PM2.5")]
    pm25: String,
    #[serde(rename = "AQI_Bucket")]
    bucket: &'static str,
}

/// (city, baseline AQI, seasonal swing)
const CITIES: [(&str, f64, f64); 4] = [
    ("Raipur", 110.0, 60.0),
    ("Delhi", 210.0, 120.0),
    ("Mumbai", 95.0, 45.0),
    ("Bengaluru", 70.0, 20.0),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}

/// Winter peak, monsoon trough.
fn seasonal_aqi(date: NaiveDate, baseline: f64, swing: f64) -> f64 {
    let phase = 2.0 * PI * (date.ordinal0() as f64 / 365.25);
    baseline + swing * phase.cos()
}

fn bucket(aqi: f64) -> &'static str {
    match aqi {
        a if a <= 50.0 => "Good",
        a if a <= 100.0 => "Satisfactory",
        a if a <= 200.0 => "Moderate",
        a if a <= 300.0 => "Poor",
        a if a <= 400.0 => "Very Poor",
        _ => "Severe",
    }
}

fn format_date(date: NaiveDate, rng: &mut SimpleRng) -> String {
    let roll = rng.next_f64();
    if roll < 0.005 {
        "unknown".to_string()
    } else if roll < 0.7 {
        date.format("%d/%m/%Y").to_string()
    } else if roll < 0.9 {
        date.format("%d-%m-%Y").to_string()
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "air_quality_data.csv".to_string());

    let start = NaiveDate::from_ymd_opt(2023, 1, 1).context("invalid start date")?;
    let end = NaiveDate::from_ymd_opt(2025, 1, 31).context("invalid end date")?;

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut rows = 0usize;
    let mut date = start;
    while date <= end {
        for &(city, baseline, swing) in &CITIES {
            let aqi = (seasonal_aqi(date, baseline, swing) + rng.gauss(0.0, baseline * 0.12)).max(5.0);
            let aqi_field = if rng.next_f64() < 0.01 {
                ["", "NA", "abc", "--"][(rng.next_u64() % 4) as usize].to_string()
            } else {
                format!("{aqi:.0}")
            };

            writer
                .serialize(SampleRow {
                    city,
                    date: format_date(date, &mut rng),
                    aqi: aqi_field,
                    pm25: format!("{:.1}", aqi * 0.45 + rng.gauss(0.0, 4.0)),
                    bucket: bucket(aqi),
                })
                .with_context(|| format!("writing row {rows}"))?;
            rows += 1;
        }
        date += Duration::days(1);
    }
    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {rows} readings for {} cities ({} to {}) to {output_path}",
        CITIES.len(),
        start.year(),
        end.year()
    );
    Ok(())
}
