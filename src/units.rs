//! Display unit conversions
//!
//! All values are stored in the provider's metric units (Celsius, m/s,
//! metres) and converted only when they are shown. Rounding is always
//! half away from zero.

/// Compass labels in clockwise order, one per 22.5° sector starting at north
const COMPASS_LABELS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Width of one compass sector in degrees
const SECTOR_DEGREES: f64 = 22.5;

/// Converts a Celsius temperature to a rounded display value
///
/// # Arguments
/// * `celsius` - Temperature in Celsius
/// * `use_celsius` - Show Celsius when true, Fahrenheit otherwise
pub fn to_display_temperature(celsius: f64, use_celsius: bool) -> i64 {
    let value = if use_celsius {
        celsius
    } else {
        celsius * 9.0 / 5.0 + 32.0
    };
    value.round() as i64
}

/// Unit suffix matching `to_display_temperature`
pub fn temperature_unit(use_celsius: bool) -> &'static str {
    if use_celsius {
        "°C"
    } else {
        "°F"
    }
}

/// Converts a wind speed in m/s to rounded km/h
pub fn to_display_wind_speed(meters_per_second: f64) -> i64 {
    (meters_per_second * 3.6).round() as i64
}

/// Maps a wind bearing to one of the 16 compass labels
///
/// Bearings outside [0, 360) are wrapped onto the circle first, so -90°
/// reads as "W" and 450° as "E".
pub fn bearing_to_compass_label(degrees: f64) -> &'static str {
    let normalized = degrees.rem_euclid(360.0);
    let sector = (normalized / SECTOR_DEGREES).round() as usize % COMPASS_LABELS.len();
    COMPASS_LABELS[sector]
}

/// Converts a probability in [0, 1] to a whole percentage
pub fn precipitation_percent(probability: f64) -> u32 {
    (probability * 100.0).round().clamp(0.0, 100.0) as u32
}

/// Converts a visibility in metres to rounded kilometres
pub fn visibility_km(meters: f64) -> i64 {
    (meters / 1000.0).round() as i64
}
