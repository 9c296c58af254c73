//! Request validation
//!
//! Ordered, short-circuiting predicates over the inbound request. The
//! first failing check decides the response; later checks are never
//! evaluated. The status codes and body strings are a compatibility
//! contract and must not change.

use url::Url;

use crate::config::{ALLOWED_HOST, ALLOWED_PATH_PREFIX};
use crate::http::request::{Method, Request};
use crate::http::response::StatusCode;

/// A request that failed validation, carrying the exact status and body
/// the caller must receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub status: StatusCode,
    pub message: &'static str,
}

impl Rejection {
    fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }
}

/// Validates the inbound request and extracts the target URL.
///
/// Checks, in order: method is GET, the `url` query parameter is present
/// exactly once, it parses as a URL, the scheme is https, the host is the
/// allowed origin, and the path sits under the allowed prefix
/// (case-sensitive exact prefix match).
pub fn validate(req: &Request) -> Result<Url, Rejection> {
    if req.method != Method::GET {
        return Err(Rejection::new(
            StatusCode::MethodNotAllowed,
            "Method Not Allowed",
        ));
    }

    // An empty value is treated the same as an absent parameter.
    let source_url = match req.query_param("url") {
        Some(v) if !v.is_empty() => v,
        _ => {
            return Err(Rejection::new(
                StatusCode::BadRequest,
                "Missing query param: url",
            ));
        }
    };

    let parsed = match Url::parse(&source_url) {
        Ok(u) => u,
        Err(_) => return Err(Rejection::new(StatusCode::BadRequest, "Invalid url")),
    };

    if parsed.scheme() != "https" {
        return Err(Rejection::new(
            StatusCode::BadRequest,
            "Only https URLs are allowed",
        ));
    }

    if parsed.host_str() != Some(ALLOWED_HOST) {
        return Err(Rejection::new(StatusCode::Forbidden, "Host not allowed"));
    }

    if !parsed.path().starts_with(ALLOWED_PATH_PREFIX) {
        return Err(Rejection::new(StatusCode::Forbidden, "Path not allowed"));
    }

    Ok(parsed)
}
