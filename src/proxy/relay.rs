//! Response construction
//!
//! Maps an upstream answer (or a terminal error) onto the HTTP response
//! the caller receives. Bodies and status codes are part of the
//! compatibility contract.

use crate::config::CACHE_CONTROL;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::proxy::upstream::UpstreamResponse;
use crate::proxy::validate::Rejection;

/// Classifies the upstream answer and builds the response to relay.
///
/// Non-success statuses are mirrored verbatim; success with a non-image
/// content-type is a 502; a successful image is relayed byte-for-byte
/// with the upstream content-type and the fixed cache policy.
pub fn relay(upstream: &UpstreamResponse) -> Response {
    if !upstream.is_success() {
        return text_response(
            StatusCode::from_u16(upstream.status),
            "Upstream image not available",
        );
    }

    if !upstream.is_image() {
        return text_response(StatusCode::BadGateway, "Upstream did not return an image");
    }

    ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", upstream.content_type.clone())
        .header("Cache-Control", CACHE_CONTROL)
        .header("Access-Control-Allow-Origin", "*")
        .body(upstream.body.to_vec())
        .build()
}

/// A plain-text terminal response. CORS is open for all origins, so every
/// response the proxy produces carries the allow-origin header.
pub fn text_response(status: StatusCode, message: &str) -> Response {
    ResponseBuilder::new(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Access-Control-Allow-Origin", "*")
        .body(message.as_bytes().to_vec())
        .build()
}

impl Rejection {
    pub fn into_response(self) -> Response {
        text_response(self.status, self.message)
    }
}
