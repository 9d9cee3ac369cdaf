//! Monthly air-quality trend for one city: load a CSV of daily readings,
//! clean it, restrict it to a city and date window, average by calendar
//! month, print a report and chart the result.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod state;
pub mod ui;
