//! Forecast aggregation
//!
//! Reshapes the flat, time-ordered sample feed into the two views shown to
//! the user: a short hourly strip and a per-day summary. Both functions are
//! pure; unit conversion is left to display time.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, TimeZone};

use crate::data::{DailySummary, WeatherSample};
use crate::units::{precipitation_percent, to_display_wind_speed};

/// Number of samples in the hourly view
pub const HOURLY_LIMIT: usize = 8;

/// Number of days in the daily view
pub const DAILY_LIMIT: usize = 7;

/// Returns the first `HOURLY_LIMIT` samples unchanged
pub fn group_into_hourly(samples: &[WeatherSample]) -> &[WeatherSample] {
    &samples[..samples.len().min(HOURLY_LIMIT)]
}

/// Samples collected for one calendar day, seeded by the earliest of them
struct DayBucket<'a> {
    date: NaiveDate,
    first: &'a WeatherSample,
    temperatures: Vec<f64>,
}

impl DayBucket<'_> {
    fn into_summary(self, day_label: String) -> DailySummary {
        // A bucket always holds its seeding sample.
        let high = self
            .temperatures
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let low = self
            .temperatures
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);

        DailySummary {
            day_label,
            date: self.date,
            high,
            low,
            condition: self.first.condition.clone(),
            precipitation_percent: precipitation_percent(self.first.precipitation_probability),
            wind_speed_kmh: to_display_wind_speed(self.first.wind_speed),
            wind_bearing: self.first.wind_bearing,
        }
    }
}

/// Collapses samples into at most `DAILY_LIMIT` per-day summaries
///
/// Samples are bucketed by their calendar date in `tz`. Buckets keep the
/// order in which their dates first appear. High and low cover every sample
/// of the day; condition, precipitation and wind come from the earliest
/// sample. The first bucket is labelled "Today", later ones by weekday.
///
/// # Arguments
/// * `samples` - Chronologically ordered samples
/// * `tz` - Timezone whose calendar defines day boundaries
pub fn group_into_daily<Tz: TimeZone>(samples: &[WeatherSample], tz: &Tz) -> Vec<DailySummary> {
    let mut buckets: Vec<DayBucket<'_>> = Vec::new();
    let mut index_by_date: HashMap<NaiveDate, usize> = HashMap::new();

    for sample in samples {
        let Some(utc) = DateTime::from_timestamp(sample.timestamp, 0) else {
            log::warn!("Skipping sample with out-of-range timestamp {}", sample.timestamp);
            continue;
        };
        let date = utc.with_timezone(tz).date_naive();

        let idx = *index_by_date.entry(date).or_insert_with(|| {
            buckets.push(DayBucket {
                date,
                first: sample,
                temperatures: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[idx].temperatures.push(sample.temperature);
    }

    log::debug!(
        "Grouped {} samples into {} days",
        samples.len(),
        buckets.len()
    );

    buckets
        .into_iter()
        .take(DAILY_LIMIT)
        .enumerate()
        .map(|(i, bucket)| {
            let label = if i == 0 {
                "Today".to_string()
            } else {
                bucket.date.format("%A").to_string()
            };
            bucket.into_summary(label)
        })
        .collect()
}
