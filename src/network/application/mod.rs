//! # Application Layer Network Protocols
//!
//! Application layer (OSI Layer 7) protocols built on the transport traits in
//! [`crate::network`]. Clients here never touch a socket API directly: they
//! drive a [`Stack`](crate::network::Stack) and the
//! [`Connection`](crate::network::Connection) it hands out.
//!
//! ## Available Protocols
//!
//! - **[`http`]**: HTTP/1.0 and HTTP/1.1 client with chunked body decoding

/// HTTP client implementation.
///
/// Provides a simple HTTP/1.1 client suitable for console homebrew,
/// supporting GET and POST methods with custom headers.
pub mod http;
