//! Plain-text weather report
//!
//! Renders current conditions and the hourly/daily views as lines of text.
//! Units are applied here, at display time, so the underlying data stays
//! in metric.

use chrono::{DateTime, FixedOffset};

use crate::data::{CurrentConditions, DailySummary, WeatherSample};
use crate::units::{
    bearing_to_compass_label, precipitation_percent, temperature_unit, to_display_temperature,
    to_display_wind_speed, visibility_km,
};

/// Shown in place of a view that has nothing to display
pub const NO_DATA: &str = "No forecast data available";

/// Formats a timestamp in the given timezone, falling back to "--:--"
fn local_time(timestamp: i64, tz: &FixedOffset, format: &str) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|utc| utc.with_timezone(tz).format(format).to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// Capitalizes the first letter of a condition phrase
fn capitalize(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Renders the current-conditions block
///
/// Sunrise and sunset are shown in `tz`, the same zone as the hourly view.
pub fn render_current(
    current: &CurrentConditions,
    tz: &FixedOffset,
    use_celsius: bool,
) -> Vec<String> {
    let unit = temperature_unit(use_celsius);
    let sample = &current.sample;
    let condition = &sample.condition;
    let period = if condition.is_daytime() { "day" } else { "night" };

    let place = match &current.country {
        Some(country) => format!("{}, {}", current.location, country),
        None => current.location.clone(),
    };

    vec![
        place,
        format!(
            "{}{}  {}  (feels like {}{})",
            to_display_temperature(sample.temperature, use_celsius),
            unit,
            capitalize(&sample.condition.description),
            to_display_temperature(current.feels_like, use_celsius),
            unit,
        ),
        format!("{} ({})", condition.category().label(), period),
        format!(
            "Humidity {}%  Wind {} km/h {}  Pressure {} hPa  Visibility {} km",
            current.humidity,
            to_display_wind_speed(sample.wind_speed),
            bearing_to_compass_label(sample.wind_bearing),
            current.pressure,
            visibility_km(current.visibility),
        ),
        format!(
            "Sunrise {}  Sunset {}",
            local_time(current.sunrise, tz, "%I:%M %p"),
            local_time(current.sunset, tz, "%I:%M %p"),
        ),
    ]
}

/// Renders the hourly view, one line per sample
pub fn render_hourly(hourly: &[WeatherSample], tz: &FixedOffset, use_celsius: bool) -> Vec<String> {
    if hourly.is_empty() {
        return vec![NO_DATA.to_string()];
    }

    let unit = temperature_unit(use_celsius);
    hourly
        .iter()
        .map(|sample| {
            format!(
                "{:>8}  {:>4}{}  {:>3}% rain  {:>3} km/h {:<3}  {}",
                local_time(sample.timestamp, tz, "%I:%M %p"),
                to_display_temperature(sample.temperature, use_celsius),
                unit,
                precipitation_percent(sample.precipitation_probability),
                to_display_wind_speed(sample.wind_speed),
                bearing_to_compass_label(sample.wind_bearing),
                sample.condition.description,
            )
        })
        .collect()
}

/// Renders the daily view, one line per day
pub fn render_daily(daily: &[DailySummary], use_celsius: bool) -> Vec<String> {
    if daily.is_empty() {
        return vec![NO_DATA.to_string()];
    }

    let unit = temperature_unit(use_celsius);
    daily
        .iter()
        .map(|day| {
            format!(
                "{:<10} {:<6}  {:>4}{} / {:>4}{}  {:<12}  {:>3}% rain",
                day.day_label,
                day.date.format("%b %-d").to_string(),
                to_display_temperature(day.high, use_celsius),
                unit,
                to_display_temperature(day.low, use_celsius),
                unit,
                day.condition.main,
                day.precipitation_percent,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Condition;
    use chrono::NaiveDate;

    fn condition() -> Condition {
        Condition {
            code: 500,
            main: "Rain".to_string(),
            description: "light rain".to_string(),
            icon: "10d".to_string(),
        }
    }

    fn sample(timestamp: i64) -> WeatherSample {
        WeatherSample {
            timestamp,
            temperature: 21.6,
            condition: condition(),
            precipitation_probability: 0.42,
            wind_speed: 10.0,
            wind_bearing: 90.0,
        }
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("light rain"), "Light rain");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_render_hourly_empty() {
        assert_eq!(render_hourly(&[], &utc(), true), vec![NO_DATA.to_string()]);
    }

    #[test]
    fn test_render_hourly_line() {
        // 2024-07-15 14:00 UTC
        let lines = render_hourly(&[sample(1_721_052_000)], &utc(), true);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("02:00 PM"));
        assert!(lines[0].contains("22°C"));
        assert!(lines[0].contains("42% rain"));
        assert!(lines[0].contains("36 km/h E"));
        assert!(lines[0].contains("light rain"));
    }

    #[test]
    fn test_render_hourly_uses_timezone() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let lines = render_hourly(&[sample(1_721_052_000)], &tz, false);
        assert!(lines[0].contains("04:00 PM"));
        assert!(lines[0].contains("71°F"));
    }

    #[test]
    fn test_render_daily_empty() {
        assert_eq!(render_daily(&[], true), vec![NO_DATA.to_string()]);
    }

    #[test]
    fn test_render_daily_line() {
        let day = DailySummary {
            day_label: "Today".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(),
            high: 25.4,
            low: 14.6,
            condition: condition(),
            precipitation_percent: 40,
            wind_speed_kmh: 12,
            wind_bearing: 180.0,
        };

        let lines = render_daily(&[day], true);
        assert!(lines[0].starts_with("Today"));
        assert!(lines[0].contains("Jul 5"));
        assert!(lines[0].contains("25°C"));
        assert!(lines[0].contains("15°C"));
        assert!(lines[0].contains("Rain"));
        assert!(lines[0].contains("40% rain"));
    }

    #[test]
    fn test_render_current() {
        let current = CurrentConditions {
            location: "London".to_string(),
            country: Some("GB".to_string()),
            latitude: 51.5,
            longitude: -0.12,
            sample: sample(1_721_052_000),
            feels_like: 20.2,
            humidity: 64,
            pressure: 1016,
            visibility: 10_000.0,
            // 05:00 and 21:00 UTC, shown at UTC+1
            sunrise: 1_721_019_600,
            sunset: 1_721_077_200,
            utc_offset_seconds: 3600,
        };

        let tz = FixedOffset::east_opt(current.utc_offset_seconds).unwrap();
        let lines = render_current(&current, &tz, true);
        assert_eq!(lines[0], "London, GB");
        assert!(lines[1].starts_with("22°C  Light rain"));
        assert!(lines[1].contains("feels like 20°C"));
        assert_eq!(lines[2], "Rain (day)");
        assert!(lines[3].contains("Humidity 64%"));
        assert!(lines[3].contains("Visibility 10 km"));
        assert!(lines[4].contains("Sunrise 06:00 AM"));
        assert!(lines[4].contains("Sunset 10:00 PM"));
    }

    #[test]
    fn test_render_current_clear_night() {
        let mut current = london_at_night();
        current.sample.condition = Condition {
            code: 800,
            main: "Clear".to_string(),
            description: "clear sky".to_string(),
            icon: "01n".to_string(),
        };

        let lines = render_current(&current, &utc(), true);
        assert_eq!(lines[2], "Clear (night)");
    }

    #[test]
    fn test_render_current_uses_given_timezone() {
        let current = london_at_night();

        // Location offset is UTC+1, but an explicit UTC-5 wins.
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let lines = render_current(&current, &tz, true);
        assert!(lines[4].contains("Sunrise 12:00 AM"));
        assert!(lines[4].contains("Sunset 04:00 PM"));
    }

    fn london_at_night() -> CurrentConditions {
        CurrentConditions {
            location: "London".to_string(),
            country: None,
            latitude: 51.5,
            longitude: -0.12,
            sample: sample(1_721_080_800),
            feels_like: 15.0,
            humidity: 80,
            pressure: 1012,
            visibility: 8_000.0,
            sunrise: 1_721_019_600,
            sunset: 1_721_077_200,
            utc_offset_seconds: 3600,
        }
    }
}
