//! Client for a running greeting service.
//!
//! Names travel as single path segments, percent-encoded, so `?`, `#` and `/`
//! in a name never change the route.

use axum::http::StatusCode;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid service url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("service url cannot carry a path: {0}")]
    NotABase(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// `<base>/greeting/<first_name>/<last_name>` with each name as one segment.
pub fn greeting_url(base: &str, first_name: &str, last_name: &str) -> Result<Url, ClientError> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| ClientError::NotABase(base.to_string()))?
        .pop_if_empty()
        .extend(["greeting", first_name, last_name]);
    Ok(url)
}

pub struct GreetingClient {
    http: reqwest::Client,
    base: String,
}

impl GreetingClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base)
    }

    pub fn with_client(http: reqwest::Client, base: impl Into<String>) -> Self {
        Self {
            http,
            base: base.into(),
        }
    }

    /// Request a greeting; returns the status and body as sent by the service.
    pub async fn greet(&self, first_name: &str, last_name: &str) -> Result<(StatusCode, String), ClientError> {
        let url = greeting_url(&self.base, first_name, last_name)?;
        tracing::debug!(url = %url, "Requesting greeting");

        let res = self.http.get(url).send().await?;
        let status = res.status();
        let body = res.text().await?;
        Ok((status, body))
    }
}
