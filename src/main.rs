//! tenki-bot: daily weather forecast poster for Discord.
//!
//! Single-binary Tokio application that:
//! 1. Fetches the OpenWeatherMap 3-hourly forecast for a fixed location
//! 2. Aggregates a 24-hour window into a daily summary + advisories
//! 3. Composes a rich embed and posts it to a Discord webhook
//!
//! Runs either on a daily schedule (default) or as a one-shot (`--once`)
//! with exit status 0 on delivery and 1 on any failure.

mod config;
mod schedule;

use chrono::Utc;
use chrono_tz::Tz;
use clap::Parser;
use tracing::{error, info};

use common::config::WindowMode;
use common::{Advice, BotConfig};
use discord_client::DiscordClient;
use owm_client::OwmClient;

/// Daily weather forecast poster for Discord
#[derive(Parser)]
#[command(name = "tenki-bot", about = "Daily weather forecast poster for Discord")]
struct Cli {
    /// Run a single fetch→summarize→post cycle and exit.
    #[arg(long)]
    once: bool,

    /// Compose the embed and log it instead of posting.
    #[arg(long)]
    dry_run: bool,

    /// Override the configured window mode (calendar_day | rolling).
    #[arg(long)]
    window: Option<String>,
}

#[tokio::main]
async fn main() {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tenki_bot=info,owm_client=info,discord_client=info".into()),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    info!("🌤️  tenki-bot starting up...");

    // Load configuration.
    let mut cfg = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(raw) = &cli.window {
        match WindowMode::parse(raw) {
            Some(mode) => cfg.window_mode = mode,
            None => {
                error!("Invalid --window value '{}' (calendar_day | rolling)", raw);
                std::process::exit(1);
            }
        }
    }

    // validate_config already vetted the zone name.
    let tz: Tz = match cfg.timezone.parse() {
        Ok(tz) => tz,
        Err(_) => {
            error!("Invalid timezone: {}", cfg.timezone);
            std::process::exit(1);
        }
    };

    info!(
        "Location: {} ({:.4}, {:.4})",
        cfg.location_name, cfg.latitude, cfg.longitude
    );
    info!("Window mode: {:?}, timezone: {}", cfg.window_mode, tz);

    let owm = OwmClient::new();
    let discord = DiscordClient::new();

    // ── One-shot mode ────────────────────────────────────────────────
    if cli.once {
        match run_cycle(&cfg, &tz, &owm, &discord, cli.dry_run).await {
            Ok(()) => info!("Forecast cycle complete."),
            Err(e) => {
                error!("Run failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // ── Scheduled mode ───────────────────────────────────────────────
    info!(
        "Posting daily at {:02}:{:02} ({})",
        cfg.schedule_hour, cfg.schedule_minute, cfg.timezone
    );

    // One immediate cycle on startup, then the daily schedule.
    if let Err(e) = run_cycle(&cfg, &tz, &owm, &discord, cli.dry_run).await {
        error!("Startup run failed: {}", e);
    }

    loop {
        let now = Utc::now().with_timezone(&tz);
        let next = schedule::next_scheduled_run(&now, cfg.schedule_hour, cfg.schedule_minute);
        info!("Next post at {}", next.format("%Y-%m-%d %H:%M:%S %Z"));

        let wait = (next.clone() - now)
            .to_std()
            .unwrap_or(std::time::Duration::from_secs(1));

        tokio::select! {
            _ = tokio::time::sleep(wait) => {
                if let Err(e) = run_cycle(&cfg, &tz, &owm, &discord, cli.dry_run).await {
                    error!("Scheduled run failed: {}", e);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("tenki-bot shut down.");
}

/// One full fetch → summarize → advise → compose → post cycle.
///
/// Every failure is terminal for the cycle: no partial output, nothing
/// is posted unless a complete summary was produced.
async fn run_cycle(
    cfg: &BotConfig,
    tz: &Tz,
    owm: &OwmClient,
    discord: &DiscordClient,
    dry_run: bool,
) -> common::Result<()> {
    let raw = owm.fetch_forecast(cfg).await?;
    let samples = raw.samples()?;
    info!("Fetched {} forecast samples", samples.len());

    let now = Utc::now().with_timezone(tz);
    let summary = forecast::summarize(&samples, &now, cfg.window_mode)?;
    info!(
        "{}: {} / {:.1}℃〜{:.1}℃ / 降水 {:.0}%",
        summary.date_label, summary.headline, summary.temp_min, summary.temp_max, summary.precip_pct
    );

    let advice = Advice {
        clothing: forecast::clothing_advice(summary.temp_max, summary.temp_min),
        items: forecast::items_advice(summary.precip_pct, summary.temp_max),
    };

    let embed = discord_client::compose_embed(&summary, &advice, &cfg.location_name, &now);

    if dry_run {
        info!(
            "Dry run — embed not posted:\n{}",
            serde_json::to_string_pretty(&embed).unwrap_or_default()
        );
        return Ok(());
    }

    discord.post_embed(&cfg.webhook_url, &embed).await?;
    info!("Posted to Discord webhook");

    Ok(())
}
