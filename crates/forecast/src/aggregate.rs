//! Time-bucket aggregation: one `ForecastWindow` → one `DailySummary`.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike};
use common::config::WindowMode;
use common::{DailySummary, Error, ForecastSample, ForecastWindow, Result};

use crate::narrative;
use crate::window::select_window;

/// Representative temperature per canonical hour band, when a sample
/// exists in that band. Bands are inclusive local-hour ranges:
/// morning 6-8, noon 12-14, evening 15-17, night 18-20.
///
/// Evening is extracted for completeness but does not feed the summary;
/// the night fallback draws on the wider 17-24h pool instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct BandReadings {
    pub morning: Option<f64>,
    pub noon: Option<f64>,
    pub evening: Option<f64>,
    pub night: Option<f64>,
}

/// Extract the first in-window reading for each hour band.
pub fn band_readings<Tz: TimeZone>(window: &ForecastWindow, tz: &Tz) -> BandReadings {
    let mut bands = BandReadings::default();
    for sample in &window.samples {
        let hour = sample.timestamp.with_timezone(tz).hour();
        let temp = sample.temperature;
        match hour {
            6..=8 => bands.morning.get_or_insert(temp),
            12..=14 => bands.noon.get_or_insert(temp),
            15..=17 => bands.evening.get_or_insert(temp),
            18..=20 => bands.night.get_or_insert(temp),
            _ => continue,
        };
    }
    bands
}

/// Temperatures of samples whose local hour falls in `[lo, hi)`.
fn hour_pool<Tz: TimeZone>(window: &ForecastWindow, tz: &Tz, lo: u32, hi: u32) -> Vec<f64> {
    window
        .samples
        .iter()
        .filter(|s| {
            let h = s.timestamp.with_timezone(tz).hour();
            h >= lo && h < hi
        })
        .map(|s| s.temperature)
        .collect()
}

fn pool_min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

fn pool_max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

const WEEKDAYS_JA: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];

fn date_label(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_JA[date.weekday().num_days_from_monday() as usize];
    format!(
        "{}年{:02}月{:02}日({})",
        date.year(),
        date.month(),
        date.day(),
        weekday
    )
}

/// Aggregate the raw sample series into a `DailySummary`.
///
/// Selects the 24-hour window for `mode` around `now`, then derives:
/// min/max range, morning/noon/night band temperatures (with the band
/// fallback policy below), the transition headline, the window-maximum
/// precipitation probability, and the first sample's condition/icon.
///
/// Fallbacks for unresolved bands:
/// * morning — minimum over hours [0,12); empty pool → `temp_min`
/// * noon — maximum over hours [11,16); empty pool → `temp_max`
/// * night — mean over hours [17,24); empty pool → mean of the finalized
///   morning and noon values (so night always resolves last)
pub fn summarize<Tz: TimeZone>(
    samples: &[ForecastSample],
    now: &DateTime<Tz>,
    mode: WindowMode,
) -> Result<DailySummary> {
    let window = select_window(samples, now, mode)?;
    let tz = now.timezone();

    let first = window
        .samples
        .first()
        .ok_or_else(|| Error::NoData("window unexpectedly empty".into()))?;

    let temp_min = window
        .samples
        .iter()
        .map(|s| s.temperature)
        .fold(f64::INFINITY, f64::min);
    let temp_max = window
        .samples
        .iter()
        .map(|s| s.temperature)
        .fold(f64::NEG_INFINITY, f64::max);

    let bands = band_readings(&window, &tz);

    let morning_temp = bands
        .morning
        .or_else(|| pool_min(&hour_pool(&window, &tz, 0, 12)))
        .unwrap_or(temp_min);
    let noon_temp = bands
        .noon
        .or_else(|| pool_max(&hour_pool(&window, &tz, 11, 16)))
        .unwrap_or(temp_max);
    // Night resolves last: its final fallback depends on the other two.
    let night_temp = bands
        .night
        .or_else(|| mean(&hour_pool(&window, &tz, 17, 24)))
        .unwrap_or_else(|| (morning_temp + noon_temp) / 2.0);

    let headline = narrative::headline(&window.samples);

    let precip_pct = window
        .samples
        .iter()
        .map(|s| s.precip_prob)
        .fold(0.0, f64::max)
        * 100.0;
    let precip_pct = precip_pct.round().clamp(0.0, 100.0);

    Ok(DailySummary {
        temp_min: round1(temp_min),
        temp_max: round1(temp_max),
        morning_temp: round1(morning_temp),
        noon_temp: round1(noon_temp),
        night_temp: round1(night_temp),
        headline,
        condition: first.condition.clone(),
        // The headline thumbnail always uses the daytime icon variant.
        icon: first.icon.replace('n', "d"),
        precip_pct,
        date_label: date_label(window.label_date),
    })
}
