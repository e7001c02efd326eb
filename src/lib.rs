//! WeatherPro Library
//!
//! Forecast aggregation, unit conversion and the OpenWeatherMap data source,
//! exposed for the binary and for integration tests.

pub mod app;
pub mod cli;
pub mod data;
pub mod forecast;
pub mod report;
pub mod units;
