//! Upstream fetch
//!
//! Outbound HTTPS client for the allowed origin. Redirects are followed by
//! the client's default policy and the landing URL is not re-checked
//! against the allow-list; that matches the historical behavior this proxy
//! is compatible with.

use std::time::Duration;

use anyhow::{Context, Result};
use bytes::Bytes;
use url::Url;

use crate::config::{UpstreamConfig, USER_AGENT};

/// What the upstream origin answered, reduced to the parts the relay
/// decision needs.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    /// Content-Type header value; empty string when the header is absent.
    pub content_type: String,
    pub body: Bytes,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// HTTP client wrapper for fetching images from the allowed origin.
pub struct ImageFetcher {
    client: reqwest::Client,
}

impl ImageFetcher {
    pub fn new(cfg: &UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .context("Failed to build upstream HTTP client")?;

        Ok(Self { client })
    }

    /// Wraps an already-configured client.
    ///
    /// Note: public so integration tests can pin the upstream address
    /// (e.g. via `reqwest`'s DNS overrides) without real network access.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Issues the outbound GET for an already-validated URL.
    ///
    /// Errors here are transport failures (DNS, TLS, timeout, reset);
    /// any HTTP answer from upstream, success or not, is an `Ok`.
    pub async fn fetch(&self, url: &Url) -> Result<UpstreamResponse> {
        let resp = self
            .client
            .get(url.as_str())
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let mut upstream = UpstreamResponse {
            status,
            content_type,
            body: Bytes::new(),
        };

        // Only relayed responses need their body; anything else is
        // classified on status and content-type alone.
        if upstream.is_success() && upstream.is_image() {
            upstream.body = resp
                .bytes()
                .await
                .with_context(|| format!("Failed to read body from {}", url))?;
        }

        Ok(upstream)
    }
}
