//! OpenWeatherMap API client
//!
//! This module fetches current conditions and the 5-day / 3-hour forecast
//! from the OpenWeatherMap 2.5 API and parses them into our data model.
//! Requests always ask for metric units, so temperatures arrive in Celsius
//! and wind speeds in m/s.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use super::{Condition, CurrentConditions, Forecast, WeatherSample};

/// Base URL for the OpenWeatherMap API
const OPEN_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Errors that can occur when fetching weather data
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The provider does not know the requested city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// The provider answered with a non-success status
    #[error("Weather data not available (HTTP {0})")]
    Unavailable(StatusCode),

    /// Missing expected field in response
    #[error("Missing expected field in response: {0}")]
    MissingField(String),
}

/// Client for fetching weather data from OpenWeatherMap
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    /// Create a new WeatherClient using the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_key)
    }

    /// Create a new WeatherClient with a custom HTTP client
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: OPEN_WEATHER_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API root (e.g. a local mock)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch current conditions and forecast for the given coordinates
    ///
    /// # Arguments
    /// * `lat` - Latitude coordinate
    /// * `lon` - Longitude coordinate
    ///
    /// # Returns
    /// * `Ok((CurrentConditions, Forecast))` - Data for the location
    /// * `Err(WeatherError)` - If either request or parsing fails
    pub async fn fetch_by_coordinates(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<(CurrentConditions, Forecast), WeatherError> {
        let coords = [("lat", lat.to_string()), ("lon", lon.to_string())];

        let current = self.get("weather", &coords).await?;
        let current = parse_current(&current)?;

        let forecast = self.get("forecast", &coords).await?;
        let forecast = parse_forecast(&forecast)?;

        Ok((current, forecast))
    }

    /// Fetch current conditions and forecast for a city by name
    ///
    /// The forecast is requested for the coordinates reported by the
    /// current-conditions response.
    pub async fn fetch_by_city(
        &self,
        city: &str,
    ) -> Result<(CurrentConditions, Forecast), WeatherError> {
        let current = match self.get("weather", &[("q", city.to_string())]).await {
            Err(WeatherError::Unavailable(StatusCode::NOT_FOUND)) => {
                return Err(WeatherError::CityNotFound(city.to_string()));
            }
            other => other?,
        };
        let current = parse_current(&current)?;

        let coords = [
            ("lat", current.latitude.to_string()),
            ("lon", current.longitude.to_string()),
        ];
        let forecast = self.get("forecast", &coords).await?;
        let forecast = parse_forecast(&forecast)?;

        Ok((current, forecast))
    }

    /// Issue a GET against an API endpoint and return the body text
    async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<String, WeatherError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{} -> {}", endpoint, status);
            return Err(WeatherError::Unavailable(status));
        }

        Ok(response.text().await?)
    }
}

/// Parse a current-weather response body into CurrentConditions
pub fn parse_current(body: &str) -> Result<CurrentConditions, WeatherError> {
    let response: CurrentResponse = serde_json::from_str(body)?;
    let condition = first_condition(response.weather)?;

    Ok(CurrentConditions {
        location: response.name,
        country: response.sys.country,
        latitude: response.coord.lat,
        longitude: response.coord.lon,
        sample: WeatherSample {
            timestamp: response.dt,
            temperature: response.main.temp,
            condition,
            precipitation_probability: 0.0,
            wind_speed: response.wind.speed,
            wind_bearing: response.wind.deg,
        },
        feels_like: response.main.feels_like,
        humidity: response.main.humidity,
        pressure: response.main.pressure,
        visibility: response.visibility,
        sunrise: response.sys.sunrise,
        sunset: response.sys.sunset,
        utc_offset_seconds: response.timezone,
    })
}

/// Parse a 5-day forecast response body into a Forecast
pub fn parse_forecast(body: &str) -> Result<Forecast, WeatherError> {
    let response: ForecastResponse = serde_json::from_str(body)?;

    let samples = response
        .list
        .into_iter()
        .map(|item| -> Result<WeatherSample, WeatherError> {
            Ok(WeatherSample {
                timestamp: item.dt,
                temperature: item.main.temp,
                condition: first_condition(item.weather)?,
                precipitation_probability: item.pop,
                wind_speed: item.wind.speed,
                wind_bearing: item.wind.deg,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Forecast {
        location: response.city.name,
        utc_offset_seconds: response.city.timezone,
        samples,
    })
}

/// Take the primary condition of an entry
fn first_condition(weather: Vec<WireCondition>) -> Result<Condition, WeatherError> {
    weather
        .into_iter()
        .next()
        .map(|w| Condition {
            code: w.id,
            main: w.main,
            description: w.description,
            icon: w.icon,
        })
        .ok_or_else(|| WeatherError::MissingField("weather".to_string()))
}

/// Current weather response from OpenWeatherMap
#[derive(Debug, Deserialize)]
struct CurrentResponse {
    coord: Coord,
    weather: Vec<WireCondition>,
    main: MainReadings,
    #[serde(default)]
    visibility: f64,
    #[serde(default)]
    wind: Wind,
    dt: i64,
    sys: Sys,
    #[serde(default)]
    timezone: i32,
    #[serde(default)]
    name: String,
}

/// Forecast response from OpenWeatherMap
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastItem>,
    city: City,
}

/// One 3-hour forecast entry
#[derive(Debug, Deserialize)]
struct ForecastItem {
    dt: i64,
    main: MainReadings,
    weather: Vec<WireCondition>,
    #[serde(default)]
    wind: Wind,
    #[serde(default)]
    pop: f64,
}

#[derive(Debug, Deserialize)]
struct Coord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct WireCondition {
    id: u16,
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    #[serde(default)]
    feels_like: f64,
    #[serde(default)]
    pressure: u32,
    #[serde(default)]
    humidity: u8,
}

#[derive(Debug, Default, Deserialize)]
struct Wind {
    #[serde(default)]
    speed: f64,
    #[serde(default)]
    deg: f64,
}

#[derive(Debug, Deserialize)]
struct Sys {
    country: Option<String>,
    #[serde(default)]
    sunrise: i64,
    #[serde(default)]
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct City {
    #[serde(default)]
    name: String,
    #[serde(default)]
    timezone: i32,
}
