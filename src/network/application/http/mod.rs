//! HTTP/1.1 protocol implementation for console homebrew.
//!
//! A lightweight HTTP client written directly against stream sockets. It
//! makes no assumption of buffered I/O from the platform: the request is
//! rendered into one buffer and sent in one call, and the response is read
//! into memory until the server closes the connection.
//!
//! # Features
//!
//! - HTTP/1.0 and HTTP/1.1 requests, GET and POST
//! - Custom headers, in caller order, with a reserved-name policy
//! - `Connection: close` on every request; one socket per exchange
//! - Graceful degradation on malformed responses
//! - `Transfer-Encoding: chunked` decoding
//!
//! # Pipeline
//!
//! ```text
//! Request ──encode──▶ bytes ──Stack/socket──▶ raw response
//!                                                 │
//!                     Response ◀──decode_body──◀──parse
//! ```
//!
//! # Usage
//!
//! The main entry point is the [`client::Client`] which drives any
//! [`Stack`](crate::network::Stack) implementation.
//!
//! ```rust
//! use libff::network::application::http::{Request, Response};
//!
//! let wire = Request::get("example.com", "/").encode().unwrap();
//! assert!(wire.starts_with(b"GET / HTTP/1.1\r\nHost: example.com\r\n"));
//!
//! let response = Response::parse(b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nHello");
//! assert_eq!(response.status_code, 200);
//! assert_eq!(response.body, b"Hello");
//! ```

/// Chunked transfer-encoding decoder.
pub mod chunked;

/// The HTTP client orchestrator.
pub mod client;

/// HTTP client error kinds.
pub mod error;

/// Request description and wire encoder.
pub mod request;

/// Response model and parser.
pub mod response;

pub use client::{Client, RECV_BUFFER_SIZE};
pub use error::Error;
pub use request::{Header, Method, RESERVED_HEADERS, Request, Version};
pub use response::Response;
