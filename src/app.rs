//! Application flow
//!
//! Loads weather for the requested location once, then derives the hourly
//! and daily views and renders them. Every run recomputes the views from
//! the freshly loaded feed.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{FixedOffset, Offset, Utc};
use thiserror::Error;

use crate::cli::{CliError, LocationRequest, StartupConfig};
use crate::data::openweather::parse_forecast;
use crate::data::{CurrentConditions, Forecast, WeatherClient, WeatherError};
use crate::forecast::{group_into_daily, group_into_hourly};
use crate::report::{render_current, render_daily, render_hourly};

/// Errors that stop the application from producing a report
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Cli(#[from] CliError),

    #[error(transparent)]
    Weather(#[from] WeatherError),

    /// Saved forecast file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Weather loaded for one location request
#[derive(Debug, Clone)]
pub struct WeatherReport {
    /// Current conditions, absent when loading a saved forecast
    pub current: Option<CurrentConditions>,
    pub forecast: Forecast,
}

/// Reads a saved forecast response from disk
pub fn load_forecast_file(path: &Path) -> Result<Forecast, AppError> {
    let body = fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_forecast(&body)?)
}

/// Loads weather for the configured location
pub async fn load_report(config: &StartupConfig) -> Result<WeatherReport, AppError> {
    let client = || {
        config
            .api_key
            .as_deref()
            .map(WeatherClient::new)
            .ok_or(CliError::MissingApiKey)
    };

    let (current, forecast) = match &config.location {
        LocationRequest::File(path) => {
            log::info!("Loading saved forecast from {}", path.display());
            (None, load_forecast_file(path)?)
        }
        LocationRequest::City(city) => {
            log::info!("Fetching weather for {}", city);
            let (current, forecast) = client()?.fetch_by_city(city).await?;
            (Some(current), forecast)
        }
        LocationRequest::Coordinates { lat, lon } => {
            log::info!("Fetching weather for {}, {}", lat, lon);
            let (current, forecast) = client()?.fetch_by_coordinates(*lat, *lon).await?;
            (Some(current), forecast)
        }
    };

    log::debug!(
        "Loaded {} forecast samples for {}",
        forecast.samples.len(),
        forecast.location
    );

    Ok(WeatherReport { current, forecast })
}

impl WeatherReport {
    /// Timezone used to split the forecast into days
    ///
    /// An explicit offset wins; otherwise the location's own offset is used.
    pub fn timezone(&self, explicit: Option<FixedOffset>) -> FixedOffset {
        explicit
            .or_else(|| FixedOffset::east_opt(self.forecast.utc_offset_seconds))
            .unwrap_or_else(|| Utc.fix())
    }

    /// Renders the full report as text
    pub fn render(&self, config: &StartupConfig) -> String {
        let tz = self.timezone(config.utc_offset);
        let mut lines = Vec::new();

        if let Some(current) = &self.current {
            lines.extend(render_current(current, &tz, config.use_celsius));
            lines.push(String::new());
        } else if !self.forecast.location.is_empty() {
            lines.push(self.forecast.location.clone());
            lines.push(String::new());
        }

        lines.push("Hourly".to_string());
        lines.extend(render_hourly(
            group_into_hourly(&self.forecast.samples),
            &tz,
            config.use_celsius,
        ));
        lines.push(String::new());

        lines.push("Daily".to_string());
        lines.extend(render_daily(
            &group_into_daily(&self.forecast.samples, &tz),
            config.use_celsius,
        ));

        lines.join("\n")
    }
}
