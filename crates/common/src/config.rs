//! Bot configuration types.

use serde::{Deserialize, Serialize};

/// Top-level bot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// OpenWeatherMap API key.
    #[serde(default)]
    pub api_key: String,

    /// Discord webhook URL to post the daily embed to.
    #[serde(default)]
    pub webhook_url: String,

    /// Target latitude.
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    /// Target longitude.
    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// Display name for the location, shown in the embed title.
    #[serde(default = "default_location_name")]
    pub location_name: String,

    /// IANA timezone the schedule and hour bands are evaluated in.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Hour of day (local) the scheduled post fires at.
    #[serde(default)]
    pub schedule_hour: u32,

    /// Minute of hour the scheduled post fires at.
    #[serde(default)]
    pub schedule_minute: u32,

    /// How the 24-hour summary window is anchored.
    #[serde(default)]
    pub window_mode: WindowMode,
}

/// Anchoring strategy for the 24-hour summary window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// Midnight-to-midnight of the current local date.
    #[default]
    CalendarDay,
    /// From the next 3-hour boundary after "now", for 24 hours.
    Rolling,
}

impl WindowMode {
    /// Parse a config/CLI string ("calendar_day", "calendar", "rolling").
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calendar_day" | "calendar" => Some(Self::CalendarDay),
            "rolling" => Some(Self::Rolling),
            _ => None,
        }
    }
}

// ── Defaults ──────────────────────────────────────────────────────────

fn default_latitude() -> f64 {
    35.6762
}

fn default_longitude() -> f64 {
    139.6503
}

fn default_location_name() -> String {
    "東京".into()
}

fn default_timezone() -> String {
    "Asia/Tokyo".into()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            webhook_url: String::new(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            location_name: default_location_name(),
            timezone: default_timezone(),
            schedule_hour: 0,
            schedule_minute: 0,
            window_mode: WindowMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_tokyo() {
        let cfg = BotConfig::default();
        assert!((cfg.latitude - 35.6762).abs() < 1e-9);
        assert!((cfg.longitude - 139.6503).abs() < 1e-9);
        assert_eq!(cfg.timezone, "Asia/Tokyo");
        assert_eq!(cfg.window_mode, WindowMode::CalendarDay);
    }

    #[test]
    fn window_mode_parse() {
        assert_eq!(WindowMode::parse("calendar_day"), Some(WindowMode::CalendarDay));
        assert_eq!(WindowMode::parse("calendar"), Some(WindowMode::CalendarDay));
        assert_eq!(WindowMode::parse("ROLLING"), Some(WindowMode::Rolling));
        assert_eq!(WindowMode::parse("hourly"), None);
    }
}
