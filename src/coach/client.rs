//! Coach HTTP client
//!
//! One POST per advice request against a configurable endpoint. The public
//! entry point never returns an error: any transport failure, bad status,
//! undecodable body or timeout degrades to a fixed fallback string so the
//! caller has nothing to handle.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::coach::protocol::{AdviceRequest, AdviceResponse, EMPTY_RESPONSE_ADVICE, FALLBACK_ADVICE};

/// Guard against a hung endpoint; expiry degrades to the fallback string
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Probability of fetching advice after a line clear that is not a level-up
pub const DEFAULT_LINE_CLEAR_CHANCE: f64 = 0.2;

/// Coach endpoint configuration
#[derive(Debug, Clone)]
pub struct CoachConfig {
    pub url: String,
    pub api_key: Option<String>,
    pub line_clear_chance: f64,
}

impl CoachConfig {
    /// Read configuration from environment variables.
    ///
    /// Returns None (coach disabled, canned strings only) when no URL is
    /// configured or `NEONTRIS_COACH_DISABLED` is set.
    pub fn from_env() -> Option<Self> {
        use std::env;

        if Self::is_disabled() {
            return None;
        }

        let url = env::var("NEONTRIS_COACH_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())?;

        let api_key = env::var("NEONTRIS_COACH_API_KEY")
            .ok()
            .filter(|s| !s.is_empty());

        let line_clear_chance = env::var("NEONTRIS_COACH_CHANCE")
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .map(|c| c.clamp(0.0, 1.0))
            .unwrap_or(DEFAULT_LINE_CLEAR_CHANCE);

        Some(Self {
            url,
            api_key,
            line_clear_chance,
        })
    }

    /// Check if the coach is force-disabled via environment
    pub fn is_disabled() -> bool {
        std::env::var("NEONTRIS_COACH_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    }

    /// Configuration pointing at an explicit URL with defaults elsewhere
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            line_clear_chance: DEFAULT_LINE_CLEAR_CHANCE,
        }
    }
}

/// Fetch one piece of advice. Total: every failure mode yields a canned
/// string and a diagnostic on stderr, never an error.
pub async fn fetch_advice(config: &CoachConfig, request: &AdviceRequest) -> String {
    match tokio::time::timeout(REQUEST_TIMEOUT, request_advice(config, request)).await {
        Ok(Ok(advice)) => {
            if advice.trim().is_empty() {
                EMPTY_RESPONSE_ADVICE.to_string()
            } else {
                advice
            }
        }
        Ok(Err(err)) => {
            eprintln!("[Coach] advice request failed: {err:#}");
            FALLBACK_ADVICE.to_string()
        }
        Err(_) => {
            eprintln!("[Coach] advice request timed out");
            FALLBACK_ADVICE.to_string()
        }
    }
}

async fn request_advice(config: &CoachConfig, request: &AdviceRequest) -> Result<String> {
    let payload = serde_json::to_vec(request).context("encode advice request")?;

    let mut builder = hyper::Request::builder()
        .method(hyper::Method::POST)
        .uri(config.url.as_str())
        .header(hyper::header::CONTENT_TYPE, "application/json");
    if let Some(key) = &config.api_key {
        builder = builder.header(hyper::header::AUTHORIZATION, format!("Bearer {key}"));
    }
    let http_request = builder
        .body(Full::new(Bytes::from(payload)))
        .context("build advice request")?;

    let client: Client<_, Full<Bytes>> = Client::builder(TokioExecutor::new()).build_http();
    let response = client
        .request(http_request)
        .await
        .context("send advice request")?;

    let status = response.status();
    if !status.is_success() {
        bail!("coach endpoint returned {status}");
    }

    let body = response
        .into_body()
        .collect()
        .await
        .context("read advice response")?
        .to_bytes();
    let decoded: AdviceResponse =
        serde_json::from_slice(&body).context("decode advice response")?;
    Ok(decoded.advice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_url_defaults() {
        let config = CoachConfig::for_url("http://127.0.0.1:9/advice");
        assert_eq!(config.url, "http://127.0.0.1:9/advice");
        assert!(config.api_key.is_none());
        assert_eq!(config.line_clear_chance, DEFAULT_LINE_CLEAR_CHANCE);
    }
}
