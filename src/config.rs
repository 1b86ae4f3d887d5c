//! Configuration loader — merges env vars and the .env file.

use common::config::{BotConfig, WindowMode};
use common::Error;

fn parse_f64(raw: &str, env_name: &str) -> Result<f64, Error> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| Error::Config(format!("{env_name} must be a number")))
}

fn parse_u32(raw: &str, env_name: &str) -> Result<u32, Error> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| Error::Config(format!("{env_name} must be an integer >= 0")))
}

fn validate_config(config: &BotConfig) -> Result<(), Error> {
    let mut issues: Vec<String> = Vec::new();

    if !(-90.0..=90.0).contains(&config.latitude) {
        issues.push("LATITUDE must be in [-90, 90]".into());
    }
    if !(-180.0..=180.0).contains(&config.longitude) {
        issues.push("LONGITUDE must be in [-180, 180]".into());
    }
    if config.schedule_hour >= 24 {
        issues.push("SCHEDULE_HOUR must be in 0-23".into());
    }
    if config.schedule_minute >= 60 {
        issues.push("SCHEDULE_MINUTE must be in 0-59".into());
    }
    if config.timezone.parse::<chrono_tz::Tz>().is_err() {
        issues.push(format!("TIMEZONE '{}' is not a known IANA zone", config.timezone));
    }
    if config.location_name.trim().is_empty() {
        issues.push("LOCATION_NAME must not be empty".into());
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "Invalid config:\n - {}",
            issues.join("\n - ")
        )))
    }
}

/// Load bot configuration from the environment and an optional .env file.
pub fn load_config() -> Result<BotConfig, Error> {
    // 1. Load .env from the working directory or parents.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env file loaded: {}", e);
    }

    // 2. Start with defaults, override from the environment.
    let mut config = BotConfig::default();

    if let Ok(key) = std::env::var("OPENWEATHER_API_KEY") {
        config.api_key = key;
    }
    if let Ok(url) = std::env::var("DISCORD_WEBHOOK_URL") {
        config.webhook_url = url;
    }
    if let Ok(raw) = std::env::var("LATITUDE") {
        config.latitude = parse_f64(&raw, "LATITUDE")?;
    }
    if let Ok(raw) = std::env::var("LONGITUDE") {
        config.longitude = parse_f64(&raw, "LONGITUDE")?;
    }
    if let Ok(name) = std::env::var("LOCATION_NAME") {
        config.location_name = name;
    }
    if let Ok(tz) = std::env::var("TIMEZONE") {
        config.timezone = tz;
    }
    if let Ok(raw) = std::env::var("SCHEDULE_HOUR") {
        config.schedule_hour = parse_u32(&raw, "SCHEDULE_HOUR")?;
    }
    if let Ok(raw) = std::env::var("SCHEDULE_MINUTE") {
        config.schedule_minute = parse_u32(&raw, "SCHEDULE_MINUTE")?;
    }
    if let Ok(raw) = std::env::var("WINDOW_MODE") {
        config.window_mode = WindowMode::parse(&raw).ok_or_else(|| {
            Error::Config("WINDOW_MODE must be one of: calendar_day, rolling".into())
        })?;
    }

    // 3. Required fields.
    if config.api_key.is_empty() {
        return Err(Error::Config(
            "OPENWEATHER_API_KEY is required (set in .env or environment)".into(),
        ));
    }
    if config.webhook_url.is_empty() {
        return Err(Error::Config(
            "DISCORD_WEBHOOK_URL is required (set in .env or environment)".into(),
        ));
    }

    validate_config(&config)?;

    Ok(config)
}
