//! Integration tests for CLI argument handling
//!
//! Runs the built binary against saved forecast files and bad arguments.

use std::io::Write;
use std::process::Command;

/// Saved forecast spanning two days at UTC+1
const SAVED_FORECAST: &str = r#"{
    "list": [
        {
            "dt": 1721066400,
            "main": { "temp": 17.2 },
            "weather": [ { "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" } ],
            "wind": { "speed": 3.6, "deg": 240 },
            "pop": 0.42
        },
        {
            "dt": 1721088000,
            "main": { "temp": 13.9 },
            "weather": [ { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01n" } ],
            "wind": { "speed": 1.0, "deg": 10 },
            "pop": 0
        }
    ],
    "city": { "name": "London", "timezone": 3600 }
}"#;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_weatherpro"))
        .args(args)
        .env_remove("OPENWEATHER_API_KEY")
        .output()
        .expect("Failed to execute weatherpro")
}

fn write_forecast() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(SAVED_FORECAST.as_bytes())
        .expect("Failed to write forecast");
    file
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success(), "Expected --help to exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("weatherpro"), "Help should mention weatherpro");
    assert!(stdout.contains("--city"), "Help should mention --city flag");
    assert!(stdout.contains("--fahrenheit"), "Help should mention --fahrenheit flag");
}

#[test]
fn test_missing_api_key_prints_error_and_exits() {
    let output = run_cli(&["--city", "Paris"]);
    assert!(!output.status.success(), "Expected missing API key to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("API key"),
        "Should print error message about the API key: {}",
        stderr
    );
}

#[test]
fn test_lat_without_lon_is_rejected() {
    let output = run_cli(&["--lat", "51.5"]);
    assert!(!output.status.success());
}

#[test]
fn test_invalid_utc_offset_is_rejected() {
    let file = write_forecast();
    let path = file.path().to_str().expect("temp path is UTF-8");
    let output = run_cli(&["--file", path, "--utc-offset", "30"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("UTC offset"), "Unexpected stderr: {}", stderr);
}

#[test]
fn test_saved_forecast_report() {
    let file = write_forecast();
    let path = file.path().to_str().expect("temp path is UTF-8");
    let output = run_cli(&["--file", path]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("London"));
    assert!(stdout.contains("17°C"));
    assert!(stdout.contains("42% rain"));
    assert!(stdout.contains("Today"));
    assert!(stdout.contains("Tuesday"));
}

#[test]
fn test_saved_forecast_report_in_fahrenheit_and_utc() {
    let file = write_forecast();
    let path = file.path().to_str().expect("temp path is UTF-8");
    let output = run_cli(&["--file", path, "--fahrenheit", "--utc-offset", "0"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    // 17.2°C -> 62.96°F
    assert!(stdout.contains("63°F"));
    // 18:00 UTC stays on Monday; 00:00 UTC starts Tuesday.
    assert!(stdout.contains("06:00 PM"));
    assert!(stdout.contains("Tuesday"));
}

#[test]
fn test_missing_file_fails() {
    let output = run_cli(&["--file", "/nonexistent/forecast.json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read"), "Unexpected stderr: {}", stderr);
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use weatherpro::cli::{Cli, LocationRequest, StartupConfig, DEFAULT_CITY};

    #[test]
    fn test_cli_defaults_to_new_york() {
        let cli = Cli::parse_from(["weatherpro", "--api-key", "abc"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.location, LocationRequest::City(DEFAULT_CITY.to_string()));
    }

    #[test]
    fn test_cli_negative_coordinates() {
        let cli = Cli::parse_from([
            "weatherpro",
            "--lat",
            "-33.87",
            "--lon",
            "151.21",
            "--api-key",
            "abc",
        ]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(
            config.location,
            LocationRequest::Coordinates {
                lat: -33.87,
                lon: 151.21
            }
        );
    }

    #[test]
    fn test_cli_file_does_not_need_api() {
        let cli = Cli::parse_from(["weatherpro", "--file", "saved.json"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert!(!config.location.needs_api());
    }
}
