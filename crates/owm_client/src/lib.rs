//! OpenWeatherMap forecast client.
//!
//! Fetches the 5-day/3-hour forecast from `api.openweathermap.org` and
//! converts it into the domain `ForecastSample` series. One attempt per
//! call — retrying is out of scope.

use chrono::DateTime;
use common::config::BotConfig;
use common::{Error, ForecastSample, Result};
use serde::Deserialize;
use tracing::debug;

const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// OpenWeatherMap API client with connection pooling and a request timeout.
#[derive(Debug, Clone)]
pub struct OwmClient {
    client: reqwest::Client,
}

// ── Wire types ────────────────────────────────────────────────────────

/// Response from GET /data/2.5/forecast.
///
/// Nested blocks are optional at the serde layer so that a missing
/// `main` or empty `weather` surfaces as `Error::MalformedSample` during
/// conversion rather than failing the whole-body parse.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastItem>,
}

/// One 3-hour forecast tick.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastItem {
    /// Valid time, unix seconds UTC.
    pub dt: i64,
    #[serde(default)]
    pub main: Option<MainBlock>,
    #[serde(default)]
    pub weather: Vec<WeatherDescriptor>,
    /// Precipitation probability (0.0 - 1.0); absent means 0.
    #[serde(default)]
    pub pop: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainBlock {
    pub temp: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherDescriptor {
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

impl ForecastItem {
    /// Convert one wire item into a domain sample.
    ///
    /// Missing nested fields abort the whole conversion — no partial
    /// sample series.
    fn to_sample(&self) -> Result<ForecastSample> {
        let main = self
            .main
            .as_ref()
            .ok_or_else(|| Error::MalformedSample(format!("main block missing at dt={}", self.dt)))?;
        let weather = self.weather.first().ok_or_else(|| {
            Error::MalformedSample(format!("weather descriptor missing at dt={}", self.dt))
        })?;
        let timestamp = DateTime::from_timestamp(self.dt, 0)
            .ok_or_else(|| Error::MalformedSample(format!("invalid timestamp dt={}", self.dt)))?;

        Ok(ForecastSample {
            timestamp,
            temperature: main.temp,
            condition: weather.main.clone(),
            description: weather.description.clone(),
            icon: weather.icon.clone(),
            precip_prob: self.pop,
        })
    }
}

impl ForecastResponse {
    /// Convert the full wire response into the time-ordered sample series.
    pub fn samples(&self) -> Result<Vec<ForecastSample>> {
        self.list.iter().map(ForecastItem::to_sample).collect()
    }
}

/// Parse a raw response body.
///
/// An unparseable payload means the source gave us nothing usable, so
/// this maps to `Error::NoData`.
pub fn parse_forecast(body: &str) -> Result<ForecastResponse> {
    serde_json::from_str(body).map_err(|e| Error::NoData(format!("unparseable forecast: {e}")))
}

// ── Implementation ────────────────────────────────────────────────────

impl OwmClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("tenki-bot/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(4)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build OWM HTTP client");

        Self { client }
    }

    /// Fetch the raw 3-hourly forecast for the configured coordinates.
    ///
    /// Responses are requested in metric units with Japanese condition
    /// text (`lang=ja`), matching the narrative lookup table.
    pub async fn fetch_forecast(&self, config: &BotConfig) -> Result<ForecastResponse> {
        debug!(
            "Fetching forecast for ({:.4}, {:.4})",
            config.latitude, config.longitude
        );

        let resp = self
            .client
            .get(FORECAST_URL)
            .query(&[
                ("lat", config.latitude.to_string()),
                ("lon", config.longitude.to_string()),
                ("appid", config.api_key.clone()),
                ("units", "metric".to_string()),
                ("lang", "ja".to_string()),
            ])
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("HTTP error: {e}")))?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Fetch(format!(
                "OpenWeatherMap returned {}: {}",
                status,
                &body[..body.len().min(500)]
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| Error::Fetch(format!("failed to read body: {e}")))?;
        let forecast = parse_forecast(&body)?;

        debug!("Got {} forecast ticks", forecast.list.len());

        Ok(forecast)
    }
}

impl Default for OwmClient {
    fn default() -> Self {
        Self::new()
    }
}
