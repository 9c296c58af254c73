//! HTTP protocol implementation.
//!
//! A small HTTP/1.1 server layer with keep-alive support. The proxy only
//! ever serves one logical endpoint, so there is no routing: every parsed
//! request is handed to the proxy handler.
//!
//! Submodules:
//!
//! - **`connection`**: per-connection request-response state machine
//! - **`parser`**: parses incoming HTTP requests from byte buffers
//! - **`request`**: request representation and query-string access
//! - **`response`**: response representation with builder pattern
//! - **`writer`**: serializes and writes responses to the client

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
