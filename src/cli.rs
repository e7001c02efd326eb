//! Command-line interface parsing for WeatherPro
//!
//! This module handles parsing of CLI arguments using clap and turns them
//! into a validated `StartupConfig`: where to get weather from and how to
//! display it.

use std::path::PathBuf;

use chrono::FixedOffset;
use clap::Parser;
use thiserror::Error;

/// Location shown when none is given on the command line
pub const DEFAULT_CITY: &str = "New York";

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The UTC offset is not a valid timezone offset
    #[error("Invalid UTC offset: {0} hours. Expected a value strictly between -24 and +24")]
    InvalidUtcOffset(f64),

    /// The coordinates are outside the valid latitude/longitude range
    #[error("Invalid coordinates: lat {lat}, lon {lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },

    /// Fetching from the API needs a key
    #[error("Missing API key. Pass --api-key or set OPENWEATHER_API_KEY")]
    MissingApiKey,
}

/// WeatherPro - current conditions, hourly and daily forecasts
#[derive(Parser, Debug)]
#[command(name = "weatherpro")]
#[command(about = "Current weather and forecasts in your terminal")]
#[command(version)]
pub struct Cli {
    /// City to show weather for
    ///
    /// Defaults to New York when no city, coordinates or file are given.
    #[arg(long, value_name = "NAME", conflicts_with_all = ["lat", "file"])]
    pub city: Option<String>,

    /// Latitude of the location
    #[arg(long, requires = "lon", allow_hyphen_values = true, conflicts_with = "file")]
    pub lat: Option<f64>,

    /// Longitude of the location
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Read a saved forecast JSON file instead of fetching
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Show temperatures in Fahrenheit
    #[arg(long)]
    pub fahrenheit: bool,

    /// Hours east of UTC used to split the forecast into days
    ///
    /// Defaults to the location's own offset as reported by the provider.
    #[arg(long, value_name = "HOURS", allow_hyphen_values = true)]
    pub utc_offset: Option<f64>,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Where weather data comes from
#[derive(Debug, Clone, PartialEq)]
pub enum LocationRequest {
    /// Look up a city by name
    City(String),
    /// Use explicit coordinates
    Coordinates { lat: f64, lon: f64 },
    /// Load a saved forecast response from disk
    File(PathBuf),
}

impl LocationRequest {
    /// Whether this request goes to the network
    pub fn needs_api(&self) -> bool {
        !matches!(self, LocationRequest::File(_))
    }
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub location: LocationRequest,
    /// Display temperatures in Celsius (false means Fahrenheit)
    pub use_celsius: bool,
    /// Explicit timezone for daily bucketing, if given
    pub utc_offset: Option<FixedOffset>,
    pub api_key: Option<String>,
}

/// Parses an offset in hours into a FixedOffset.
///
/// Fractional offsets such as 5.5 or -9.5 are supported.
///
/// # Returns
/// * `Ok(FixedOffset)` for offsets strictly between -24 and +24 hours
/// * `Err(CliError::InvalidUtcOffset)` otherwise
pub fn parse_utc_offset(hours: f64) -> Result<FixedOffset, CliError> {
    if !hours.is_finite() {
        return Err(CliError::InvalidUtcOffset(hours));
    }
    let seconds = (hours * 3600.0).round() as i32;
    FixedOffset::east_opt(seconds).ok_or(CliError::InvalidUtcOffset(hours))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if an argument is out of range or a needed API key is absent
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let location = match (&cli.file, cli.lat, cli.lon, &cli.city) {
            (Some(path), _, _, _) => LocationRequest::File(path.clone()),
            (None, Some(lat), Some(lon), _) => {
                if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                    return Err(CliError::InvalidCoordinates { lat, lon });
                }
                LocationRequest::Coordinates { lat, lon }
            }
            (None, _, _, Some(city)) => LocationRequest::City(city.trim().to_string()),
            _ => LocationRequest::City(DEFAULT_CITY.to_string()),
        };

        let api_key = cli
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);
        if location.needs_api() && api_key.is_none() {
            return Err(CliError::MissingApiKey);
        }

        let utc_offset = cli.utc_offset.map(parse_utc_offset).transpose()?;

        Ok(StartupConfig {
            location,
            use_celsius: !cli.fahrenheit,
            utc_offset,
            api_key,
        })
    }
}
