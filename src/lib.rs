//! fusion-image-proxy - Allow-listed image fetch proxy
//!
//! Accepts a `url` query parameter, validates it against a fixed
//! scheme/host/path allow-list, fetches the image from the upstream
//! origin and relays it with caching headers.

pub mod config;
pub mod http;
pub mod proxy;
pub mod server;
