//! Core data models for WeatherPro
//!
//! This module contains the types shared between the weather data source,
//! the forecast aggregation and the text report.

pub mod openweather;

pub use openweather::{WeatherClient, WeatherError};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Broad weather band derived from a provider condition code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionCategory {
    Thunderstorm,
    /// Drizzle and rain
    Rain,
    Snow,
    /// Mist, smoke, haze, fog, dust and similar
    Atmosphere,
    Clear,
    Clouds,
}

impl ConditionCategory {
    /// Maps a condition code to its band.
    ///
    /// Codes 2xx are thunderstorms, 3xx-5xx drizzle and rain, 6xx snow,
    /// 7xx atmospheric phenomena, 800 clear sky. Anything else (801-804
    /// and unknown codes) is treated as cloud cover.
    pub fn from_code(code: u16) -> Self {
        match code {
            200..=299 => ConditionCategory::Thunderstorm,
            300..=599 => ConditionCategory::Rain,
            600..=699 => ConditionCategory::Snow,
            700..=799 => ConditionCategory::Atmosphere,
            800 => ConditionCategory::Clear,
            _ => ConditionCategory::Clouds,
        }
    }

    /// Short human-readable name
    pub fn label(self) -> &'static str {
        match self {
            ConditionCategory::Thunderstorm => "Thunderstorm",
            ConditionCategory::Rain => "Rain",
            ConditionCategory::Snow => "Snow",
            ConditionCategory::Atmosphere => "Mist",
            ConditionCategory::Clear => "Clear",
            ConditionCategory::Clouds => "Clouds",
        }
    }
}

/// Weather condition attached to a sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Provider classification code (e.g. 800 for clear sky)
    pub code: u16,
    /// Condition group name as reported by the provider (e.g. "Clouds")
    pub main: String,
    /// Lowercase condition phrase (e.g. "scattered clouds")
    pub description: String,
    /// Icon token such as "01d" or "10n"
    pub icon: String,
}

impl Condition {
    /// Whether the icon token marks a daytime observation
    pub fn is_daytime(&self) -> bool {
        self.icon.ends_with('d')
    }

    pub fn category(&self) -> ConditionCategory {
        ConditionCategory::from_code(self.code)
    }
}

/// One weather observation or forecast point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Seconds since the Unix epoch, UTC
    pub timestamp: i64,
    /// Temperature in Celsius
    pub temperature: f64,
    pub condition: Condition,
    /// Probability of precipitation in [0, 1]
    pub precipitation_probability: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Wind bearing in degrees clockwise from north
    pub wind_bearing: f64,
}

/// Summary of all samples falling on one local calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// "Today" for the first day, otherwise the weekday name
    pub day_label: String,
    /// Local calendar date used as the bucket key
    pub date: NaiveDate,
    /// Highest temperature of the day in Celsius
    pub high: f64,
    /// Lowest temperature of the day in Celsius
    pub low: f64,
    /// Condition of the earliest sample of the day
    pub condition: Condition,
    /// Precipitation chance of the earliest sample, in percent
    pub precipitation_percent: u32,
    /// Wind speed of the earliest sample in km/h
    pub wind_speed_kmh: i64,
    /// Wind bearing of the earliest sample in degrees
    pub wind_bearing: f64,
}

/// Current conditions at a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Location name as reported by the provider
    pub location: String,
    /// ISO country code, if reported
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// The observation itself
    pub sample: WeatherSample,
    /// Feels-like temperature in Celsius
    pub feels_like: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Sea-level pressure in hPa
    pub pressure: u32,
    /// Visibility in metres
    pub visibility: f64,
    /// Sunrise, seconds since the Unix epoch
    pub sunrise: i64,
    /// Sunset, seconds since the Unix epoch
    pub sunset: i64,
    /// Offset of the location from UTC in seconds
    pub utc_offset_seconds: i32,
}

/// Multi-day forecast feed for a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Location name as reported by the provider
    pub location: String,
    /// Offset of the location from UTC in seconds
    pub utc_offset_seconds: i32,
    /// Chronologically ordered samples
    pub samples: Vec<WeatherSample>,
}
