//! # libff - homebrew application support
//!
//! Support library for homebrew software on fixed game consoles. The console's
//! graphics, audio and input subsystems are reached through the vendor SDK
//! directly; what this crate provides is the networking piece: a small
//! HTTP/1.1 client written against raw stream sockets, for networking stacks
//! that offer nothing beyond `socket`, `connect`, `send`, `recv` and `close`.
//!
//! ## Features
//!
//! - Hand-built HTTP/1.0 and HTTP/1.1 requests (`GET` and `POST`)
//! - Reserved-header policy so callers cannot corrupt request framing
//! - One non-persistent TCP connection per request (`Connection: close`)
//! - Response parsing without an external HTTP library
//! - `Transfer-Encoding: chunked` body decoding
//! - JSON request/response bodies through `serde-json-core`
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libff = "0.1.0"
//! ```
//!
//! ### Basic HTTP Client Example
//!
//! ```rust,no_run
//! use libff::network::application::http::{Client, Request};
//! # use core::net::{IpAddr, Ipv4Addr, SocketAddrV4};
//! # use libff::network::{Close, Connection, Read, Stack, Write};
//! # struct ConsoleSocket;
//! # impl Read for ConsoleSocket {
//! #     type Error = ();
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, ()> { Ok(0) }
//! # }
//! # impl Write for ConsoleSocket {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, ()> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), ()> { Ok(()) }
//! # }
//! # impl Close for ConsoleSocket {
//! #     type Error = ();
//! #     fn close(self) -> Result<(), ()> { Ok(()) }
//! # }
//! # impl Connection for ConsoleSocket {}
//! # #[derive(Debug)]
//! # struct ConsoleStack;
//! # impl Stack for ConsoleStack {
//! #     type Socket = ConsoleSocket;
//! #     type Error = ();
//! #     fn init(&mut self) -> Result<(), ()> { Ok(()) }
//! #     fn deinit(&mut self) {}
//! #     fn local_address(&mut self) -> Ipv4Addr { Ipv4Addr::UNSPECIFIED }
//! #     fn socket(&mut self) -> Result<ConsoleSocket, ()> { Ok(ConsoleSocket) }
//! #     fn resolve(&mut self, _host: &str) -> Result<IpAddr, ()> { Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)) }
//! #     fn connect(&mut self, _s: &mut ConsoleSocket, _r: SocketAddrV4) -> Result<(), ()> { Ok(()) }
//! # }
//!
//! let mut client = Client::new(ConsoleStack).expect("network init");
//! let request = Request::get("example.com", "/api/status").header("Accept", "text/plain");
//!
//! let response = client.get(&request).expect("request failed");
//! if response.is_success() {
//!     // use response.body
//! }
//! ```
//!
//! ## Platform Support
//!
//! The crate is `no_std` and needs only `alloc`. Implement
//! [`network::Stack`] over the console's socket API, or enable the `std`
//! feature to use the bundled hosted backend.
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support and `network::host::HostStack`
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate alloc;

#[macro_use]
mod fmt;

/// Network abstraction layer: transport traits, the networking-subsystem
/// seam and the HTTP client built on top of them.
pub mod network;
