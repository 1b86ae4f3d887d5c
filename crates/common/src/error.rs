//! Unified error type for the weather bot.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("weather fetch failed: {0}")]
    Fetch(String),

    #[error("no forecast samples: {0}")]
    NoData(String),

    #[error("malformed forecast sample: {0}")]
    MalformedSample(String),

    #[error("webhook delivery failed: {0}")]
    Delivery(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
