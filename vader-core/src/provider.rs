//! HTTP access to the forecast aggregation service.

use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::Config;
use crate::model::{Forecast, LocationQuery};

/// Public instance of the forecast service.
pub const DEFAULT_BASE_URL: &str = "https://weather.lexlink.se";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach the forecast service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("forecast service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode forecast response: {source}; body: {body}")]
    Decode {
        source: serde_json::Error,
        body: String,
    },
}

/// Something that can produce a [`Forecast`] for a location query.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch(&self, query: &LocationQuery) -> Result<Forecast, FetchError>;
}

/// [`ForecastProvider`] backed by the HTTP service.
#[derive(Debug, Clone)]
pub struct HttpForecastProvider {
    base_url: String,
    http: Client,
}

impl HttpForecastProvider {
    pub fn new(base_url: String) -> Self {
        HttpForecastProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl ForecastProvider for HttpForecastProvider {
    async fn fetch(&self, query: &LocationQuery) -> Result<Forecast, FetchError> {
        let url = format!("{}/forecast/location/{}", self.base_url, query);
        tracing::debug!(%url, "requesting forecast");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, bytes = body.len(), "forecast service responded");

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        // The service sometimes labels JSON bodies as text/plain, so the
        // content type is ignored and the body parsed as JSON directly.
        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            source,
            body: truncate_body(&body),
        })
    }
}

/// Construct the provider the CLI talks to from stored configuration.
pub fn provider_from_config(config: &Config) -> Box<dyn ForecastProvider> {
    Box::new(HttpForecastProvider::new(config.base_url().to_string()))
}

fn truncate_body(body: &str) -> String {
    const MAX_BODY_CHARS: usize = 200;
    if body.len() <= MAX_BODY_CHARS {
        return body.to_string();
    }
    let mut end = MAX_BODY_CHARS;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
