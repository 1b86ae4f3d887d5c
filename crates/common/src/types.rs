//! Domain types shared across the bot.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ── Forecast Types ────────────────────────────────────────────────────

/// One timestamped forecast reading, at the API's fixed 3-hour cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Valid time of the reading.
    pub timestamp: DateTime<Utc>,
    /// Air temperature in °C.
    pub temperature: f64,
    /// Coarse condition tag from the provider (e.g. "Clear", "Rain").
    pub condition: String,
    /// Localized detail text (e.g. "厚い雲").
    pub description: String,
    /// Provider icon code (e.g. "01d").
    pub icon: String,
    /// Precipitation probability (0.0 - 1.0).
    pub precip_prob: f64,
}

/// The contiguous 24-hour slice of samples selected for summarization.
///
/// Invariant: every sample satisfies `start <= timestamp < end` and
/// `end - start` is exactly 24 hours. Never empty.
#[derive(Debug, Clone)]
pub struct ForecastWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// The local calendar date this window reports as.
    pub label_date: NaiveDate,
    pub samples: Vec<ForecastSample>,
}

/// The aggregated "today" summary derived from one window.
///
/// All temperatures are rounded to one decimal. Constructed once per
/// invocation and immutable thereafter; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    /// Lowest temperature across the window, °C.
    pub temp_min: f64,
    /// Highest temperature across the window, °C.
    pub temp_max: f64,
    /// Representative morning (6-8h) temperature, °C.
    pub morning_temp: f64,
    /// Representative noon (12-14h) temperature, °C.
    pub noon_temp: f64,
    /// Representative night (18-20h) temperature, °C.
    pub night_temp: f64,
    /// Condensed transition narrative (e.g. "晴れのち雨").
    pub headline: String,
    /// Condition tag of the window's first sample, for emoji/color lookup.
    pub condition: String,
    /// Icon code of the window's first sample, daytime-normalized.
    pub icon: String,
    /// Maximum precipitation probability across the window, percent [0,100].
    pub precip_pct: f64,
    /// Localized date label (e.g. "2025年12月04日(木)").
    pub date_label: String,
}

/// Derived clothing/items recommendation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub clothing: String,
    pub items: String,
}
