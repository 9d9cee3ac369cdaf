/// Data layer: core types, loading, cleaning, filtering and aggregation.
///
/// Architecture:
/// ```text
///   air_quality_data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read file → RawTable (text fields)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  clean    │  coerce DATE / AQI, drop missing AQI → DataFrame
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  city + date window → DataFrame
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  calendar-month means → Vec<MonthlyAverage>
///   └───────────┘
/// ```

pub mod aggregate;
pub mod clean;
pub mod filter;
pub mod loader;
pub mod model;
