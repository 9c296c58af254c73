//! Request handler
//!
//! Wires validation, the upstream fetch and the relay together. Every
//! request produces exactly one response; nothing is retried.

use crate::config::UpstreamConfig;
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::proxy::relay::{relay, text_response};
use crate::proxy::upstream::ImageFetcher;
use crate::proxy::validate::validate;

pub struct ProxyHandler {
    fetcher: ImageFetcher,
}

impl ProxyHandler {
    pub fn new(cfg: &UpstreamConfig) -> anyhow::Result<Self> {
        Ok(Self {
            fetcher: ImageFetcher::new(cfg)?,
        })
    }

    /// Note: public so integration tests can substitute the fetcher.
    pub fn with_fetcher(fetcher: ImageFetcher) -> Self {
        Self { fetcher }
    }

    /// Handles one request end to end.
    ///
    /// Rejected requests never reach the network and are not logged;
    /// transport failures on the fetch are logged and answered with 502.
    pub async fn handle(&self, req: &Request) -> Response {
        let url = match validate(req) {
            Ok(url) => url,
            Err(rejection) => return rejection.into_response(),
        };

        match self.fetcher.fetch(&url).await {
            Ok(upstream) => relay(&upstream),
            Err(e) => {
                tracing::error!(url = %url, error = %e, "Image fetch failed");
                text_response(StatusCode::BadGateway, "Failed to fetch image")
            }
        }
    }
}
