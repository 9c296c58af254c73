//! Image proxy core
//!
//! The validation chain, the upstream fetch and the response relay. Control
//! flow is linear: validate the requested URL, fetch it, classify the
//! upstream answer, respond exactly once.

pub mod handler;
pub mod relay;
pub mod upstream;
pub mod validate;

pub use handler::ProxyHandler;
pub use upstream::{ImageFetcher, UpstreamResponse};
pub use validate::Rejection;
