//! Discord webhook client.
//!
//! Composes the daily forecast embed (field order and inline layout are
//! part of the presentation contract) and posts it to the configured
//! webhook. One attempt per call — a failed delivery discards the
//! summary.

use chrono::{DateTime, TimeZone};
use common::{Advice, DailySummary, Error, Result};
use serde::Serialize;
use tracing::debug;

// ── Embed wire types ──────────────────────────────────────────────────

/// Webhook request body: `{"embeds": [...]}`.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub embeds: Vec<Embed>,
}

/// A Discord rich embed.
#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    pub title: String,
    /// Accent color as a 24-bit RGB integer.
    pub color: u32,
    pub thumbnail: EmbedThumbnail,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedThumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

// ── Condition lookups ─────────────────────────────────────────────────

/// Emoji for an OpenWeatherMap condition tag.
pub fn condition_emoji(condition: &str) -> &'static str {
    match condition {
        "Clear" => "☀️",
        "Clouds" => "☁️",
        "Rain" => "🌧️",
        "Drizzle" => "🌦️",
        "Thunderstorm" => "⛈️",
        "Snow" => "⛄",
        "Mist" | "Fog" => "🌫️",
        _ => "🌤️",
    }
}

/// Embed accent color for an OpenWeatherMap condition tag.
pub fn condition_color(condition: &str) -> u32 {
    match condition {
        "Clear" => 0xFFD700,
        "Clouds" => 0x808080,
        "Rain" => 0x4682B4,
        "Drizzle" => 0x87CEEB,
        "Thunderstorm" => 0x483D8B,
        "Snow" => 0xFFFFFF,
        "Mist" | "Fog" => 0xD3D3D3,
        _ => 0x3498DB,
    }
}

// ── Composition ───────────────────────────────────────────────────────

/// Build the daily forecast embed.
///
/// Field order: date, temperature block, condition (inline),
/// precipitation (inline), clothing, items. `posted_at` stamps the
/// footer in the caller's timezone.
pub fn compose_embed<Tz: TimeZone>(
    summary: &DailySummary,
    advice: &Advice,
    location_name: &str,
    posted_at: &DateTime<Tz>,
) -> Embed
where
    Tz::Offset: std::fmt::Display,
{
    let emoji = condition_emoji(&summary.condition);
    let icon_url = format!(
        "https://openweathermap.org/img/wn/{}@2x.png",
        summary.icon
    );

    Embed {
        title: format!("{emoji} 今日の天気予報 ({location_name})"),
        color: condition_color(&summary.condition),
        thumbnail: EmbedThumbnail { url: icon_url },
        fields: vec![
            EmbedField {
                name: "📅 日付".into(),
                value: summary.date_label.clone(),
                inline: false,
            },
            EmbedField {
                name: "🌡️ 気温".into(),
                value: format!(
                    "朝{:.1}℃ 昼{:.1}℃ 夜{:.1}℃\n最低: {:.1}℃ / 最高: {:.1}℃",
                    summary.morning_temp,
                    summary.noon_temp,
                    summary.night_temp,
                    summary.temp_min,
                    summary.temp_max
                ),
                inline: false,
            },
            EmbedField {
                name: "☁️ 天気".into(),
                value: summary.headline.clone(),
                inline: true,
            },
            EmbedField {
                name: "💧 降水確率".into(),
                value: format!("{:.0}%", summary.precip_pct),
                inline: true,
            },
            EmbedField {
                name: "👕 服装".into(),
                value: advice.clothing.clone(),
                inline: false,
            },
            EmbedField {
                name: "🎒 持ち物".into(),
                value: advice.items.clone(),
                inline: false,
            },
        ],
        footer: EmbedFooter {
            text: format!("更新時刻: {}", posted_at.format("%H:%M")),
        },
    }
}

// ── Delivery ──────────────────────────────────────────────────────────

/// Async webhook client.
#[derive(Debug, Clone)]
pub struct DiscordClient {
    client: reqwest::Client,
}

impl DiscordClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(2)
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .expect("failed to build Discord HTTP client");

        Self { client }
    }

    /// POST the embed to the webhook. Discord answers 204 on success;
    /// any 2xx is accepted.
    pub async fn post_embed(&self, webhook_url: &str, embed: &Embed) -> Result<()> {
        let payload = WebhookPayload {
            embeds: vec![embed.clone()],
        };

        debug!("Posting embed: {}", embed.title);

        let resp = self
            .client
            .post(webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::Delivery(format!("HTTP error: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Delivery(format!(
                "Discord returned {}: {}",
                status.as_u16(),
                &body[..body.len().min(500)]
            )));
        }

        Ok(())
    }
}

impl Default for DiscordClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_summary() -> DailySummary {
        DailySummary {
            temp_min: 8.0,
            temp_max: 17.5,
            morning_temp: 9.0,
            noon_temp: 17.5,
            night_temp: 11.2,
            headline: "晴れのち曇り".into(),
            condition: "Clear".into(),
            icon: "01d".into(),
            precip_pct: 30.0,
            date_label: "2025年12月04日(木)".into(),
        }
    }

    fn make_advice() -> Advice {
        Advice {
            clothing: "長袖シャツ＋薄手のカーディガン／ナイロンパーカーで大丈夫です。\n朝晩は冷えます。"
                .into(),
            items: "折りたたみ傘があると安心です。".into(),
        }
    }

    fn posted_at() -> chrono::DateTime<Utc> {
        chrono::NaiveDate::from_ymd_opt(2025, 12, 4)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn embed_field_order_and_layout() {
        let embed = compose_embed(&make_summary(), &make_advice(), "東京", &posted_at());

        let names: Vec<&str> = embed.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "📅 日付",
                "🌡️ 気温",
                "☁️ 天気",
                "💧 降水確率",
                "👕 服装",
                "🎒 持ち物"
            ]
        );
        let inline: Vec<bool> = embed.fields.iter().map(|f| f.inline).collect();
        assert_eq!(inline, vec![false, false, true, true, false, false]);
    }

    #[test]
    fn embed_values() {
        let embed = compose_embed(&make_summary(), &make_advice(), "東京", &posted_at());

        assert_eq!(embed.title, "☀️ 今日の天気予報 (東京)");
        assert_eq!(embed.color, 0xFFD700);
        assert_eq!(
            embed.thumbnail.url,
            "https://openweathermap.org/img/wn/01d@2x.png"
        );
        assert_eq!(
            embed.fields[1].value,
            "朝9.0℃ 昼17.5℃ 夜11.2℃\n最低: 8.0℃ / 最高: 17.5℃"
        );
        assert_eq!(embed.fields[3].value, "30%");
        assert_eq!(embed.footer.text, "更新時刻: 06:00");
    }

    #[test]
    fn payload_serialization_shape() {
        let embed = compose_embed(&make_summary(), &make_advice(), "東京", &posted_at());
        let payload = WebhookPayload {
            embeds: vec![embed],
        };
        let json = serde_json::to_value(&payload).unwrap();

        assert!(json["embeds"].is_array());
        assert_eq!(json["embeds"][0]["color"], 0xFFD700);
        assert_eq!(json["embeds"][0]["fields"][2]["inline"], true);
        assert_eq!(
            json["embeds"][0]["fields"][0]["value"],
            "2025年12月04日(木)"
        );
    }

    #[test]
    fn emoji_and_color_lookups_have_defaults() {
        assert_eq!(condition_emoji("Clear"), "☀️");
        assert_eq!(condition_emoji("Tornado"), "🌤️");
        assert_eq!(condition_color("Rain"), 0x4682B4);
        assert_eq!(condition_color("Tornado"), 0x3498DB);
    }
}
