use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::WeatherError;

use super::WeatherSource;

/// HTTP client for the OpenWeather endpoints.
#[derive(Debug, Clone, Default)]
pub struct OpenWeatherClient {
    http: Client,
}

impl OpenWeatherClient {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn fetch(&self, url: &Url) -> Result<Value, WeatherError> {
        let started = Instant::now();
        // The query string carries the API key; only the path is logged.
        debug!(host = url.host_str().unwrap_or_default(), path = url.path(), "sending request");

        let res = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| WeatherError::Transport(e.without_url()))?;

        let status = res.status();
        debug!(%status, elapsed_ms = started.elapsed().as_millis() as u64, "response received");
        check_status(status)?;

        let body = res.text().await.map_err(|e| WeatherError::Transport(e.without_url()))?;
        decode_body(&body)
    }
}

/// Maps a non-success status to its error.
pub fn check_status(status: StatusCode) -> Result<(), WeatherError> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::UNAUTHORIZED => Err(WeatherError::Unauthorized),
        StatusCode::NOT_FOUND => Err(WeatherError::NotFound),
        s => Err(WeatherError::Status(s.as_u16())),
    }
}

pub fn decode_body(body: &str) -> Result<Value, WeatherError> {
    serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, body = truncate_body(body), "response body is not JSON");
        WeatherError::Decode
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
