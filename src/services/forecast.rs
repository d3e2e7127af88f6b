//! Forecast aggregation: buckets three-hourly points by local calendar day
//! and summarises each day.
//!
//! Buckets keep the provider's chronological order: a day appears at the
//! position of its first point, and every point lands in exactly one bucket.

use crate::errors::WeatherError;
use crate::models::{DaySummary, ForecastEntry, HourlyForecast};
use chrono::{DateTime, NaiveDate, TimeZone};
use std::fmt::Display;

/// Round to one decimal place, halves away from zero
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Convert a provider entry into a point stamped with its date and time in `tz`
pub fn hourly_from_entry<Tz>(entry: &ForecastEntry, tz: &Tz) -> Result<HourlyForecast, WeatherError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = DateTime::from_timestamp(entry.dt, 0)
        .ok_or_else(|| WeatherError::Internal(format!("invalid forecast timestamp {}", entry.dt)))?
        .with_timezone(tz);

    let condition = entry.weather.first().ok_or_else(|| {
        WeatherError::Internal(format!("forecast entry at {} has no weather condition", entry.dt))
    })?;

    Ok(HourlyForecast {
        date: local.format("%Y-%m-%d").to_string(),
        time: local.format("%H:%M").to_string(),
        timestamp: entry.dt,
        temperature: entry.main.temp,
        feels_like: entry.main.feels_like,
        humidity: entry.main.humidity,
        pressure: entry.main.pressure,
        wind_speed: entry.wind.speed,
        clouds: entry.clouds.all,
        weather: condition.main.clone(),
        description: condition.description.clone(),
        icon: condition.icon.clone(),
    })
}

/// Partition points into per-date buckets in first-occurrence order.
///
/// Dates are compared by value, so a date that reappears after another day
/// joins its original bucket instead of opening a new one.
pub fn group_by_day(points: Vec<HourlyForecast>) -> Vec<(String, Vec<HourlyForecast>)> {
    let mut buckets: Vec<(String, Vec<HourlyForecast>)> = Vec::new();

    for point in points {
        match buckets.iter_mut().find(|(date, _)| *date == point.date) {
            Some((_, bucket)) => bucket.push(point),
            None => buckets.push((point.date.clone(), vec![point])),
        }
    }

    buckets
}

/// Most frequent condition label; ties go to the label seen first
pub fn mode_condition(points: &[HourlyForecast]) -> Option<&str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for point in points {
        match counts.iter_mut().find(|(label, _)| *label == point.weather) {
            Some((_, count)) => *count += 1,
            None => counts.push((point.weather.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (label, count) in counts {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label)
}

/// Summarise one day bucket; `None` for an empty bucket
pub fn summarize_day(date: String, points: Vec<HourlyForecast>) -> Option<DaySummary> {
    let first = points.first()?;

    let temps = points.iter().map(|p| p.temperature);
    let min = temps.clone().fold(f64::INFINITY, f64::min);
    let max = temps.clone().fold(f64::NEG_INFINITY, f64::max);
    let avg = temps.sum::<f64>() / points.len() as f64;

    let weather = mode_condition(&points)
        .unwrap_or(first.weather.as_str())
        .to_string();
    let icon = points
        .iter()
        .find(|p| p.weather == weather)
        .unwrap_or(first)
        .icon
        .clone();

    let day_name = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map(|d| d.format("%A").to_string())
        .unwrap_or_default();

    Some(DaySummary {
        date,
        day_name,
        avg_temp: round_one_decimal(avg),
        min_temp: round_one_decimal(min),
        max_temp: round_one_decimal(max),
        weather,
        icon,
        hourly: points,
    })
}

/// Turn the provider's flat forecast list into per-day summaries in `tz`
pub fn aggregate_forecast<Tz>(entries: &[ForecastEntry], tz: &Tz) -> Result<Vec<DaySummary>, WeatherError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let points = entries
        .iter()
        .map(|entry| hourly_from_entry(entry, tz))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(group_by_day(points)
        .into_iter()
        .filter_map(|(date, bucket)| summarize_day(date, bucket))
        .collect())
}
