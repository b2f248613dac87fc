//! The HTTP client: owns the networking subsystem and runs one
//! request/response exchange per call.
//!
//! Every exchange is strictly sequential and blocking:
//!
//! ```text
//! encode ─▶ socket ─▶ resolve ─▶ connect ─▶ send ─▶ receive ─▶ parse ─▶ decode
//! ```
//!
//! A failure in any stage ends the call; nothing is retried. The socket is
//! closed on every path out of [`Client::get`].

use super::error::Error;
use super::request::Request;
use super::response::Response;
use crate::network::{Close, Read, Stack, Write};
use alloc::vec::Vec;
use core::fmt::Write as _;
use core::net::{IpAddr, SocketAddrV4};
use heapless::String;

/// Size of the stack buffer each `read` call fills.
pub const RECV_BUFFER_SIZE: usize = 1024;

/// An HTTP/1.x client over a [`Stack`].
///
/// Creating the client initializes the networking subsystem; dropping it
/// tears the subsystem down. Each [`get`](Client::get) opens its own socket,
/// so the client holds no per-request state between calls.
#[derive(Debug)]
pub struct Client<S: Stack> {
    stack: S,
}

impl<S: Stack> Client<S> {
    /// Initialize `stack` and wrap it.
    pub fn new(mut stack: S) -> Result<Self, Error> {
        stack.init().map_err(|_| Error::SubsystemInit)?;
        Ok(Self { stack })
    }

    /// Dotted-quad IPv4 address of the local interface, e.g. `192.168.1.20`.
    pub fn local_address(&mut self) -> String<15> {
        let ip = self.stack.local_address();
        let mut out = String::new();
        // "255.255.255.255" is exactly 15 bytes.
        let written = write!(out, "{ip}");
        debug_assert!(written.is_ok());
        out
    }

    /// Borrow the underlying stack.
    pub fn stack(&self) -> &S {
        &self.stack
    }

    /// Mutably borrow the underlying stack.
    pub fn stack_mut(&mut self) -> &mut S {
        &mut self.stack
    }

    /// Perform `request` and return the complete response.
    ///
    /// The method comes from the request, so this also issues `POST`s.
    /// Malformed responses are not errors: see [`Response::parse`].
    pub fn get(&mut self, request: &Request) -> Result<Response, Error> {
        let wire = request.encode()?;

        let mut socket = self.stack.socket().map_err(|_| Error::SocketCreate)?;
        let exchanged = self.exchange(&mut socket, request, &wire);
        if socket.close().is_err() {
            warn!("failed to close socket");
        }
        let raw = exchanged?;

        let mut response = Response::parse(&raw);
        response.decode_body();
        Ok(response)
    }

    fn exchange(&mut self, socket: &mut S::Socket, request: &Request, wire: &[u8]) -> Result<Vec<u8>, Error> {
        let ip = match self.stack.resolve(&request.hostname) {
            Ok(IpAddr::V4(ip)) => ip,
            Ok(IpAddr::V6(_)) => return Err(Error::UnsupportedAddress),
            Err(_) => {
                warn!("DNS resolution failed");
                return Err(Error::DnsResolution);
            }
        };

        self.stack
            .connect(socket, SocketAddrV4::new(ip, request.port))
            .map_err(|_| Error::Connect)?;

        send(socket, wire)?;
        Ok(receive(socket))
    }
}

impl<S: Stack> Drop for Client<S> {
    fn drop(&mut self) {
        self.stack.deinit();
    }
}

/// One logical send. A short write is as fatal as an error.
fn send<C: Write>(socket: &mut C, wire: &[u8]) -> Result<(), Error> {
    match socket.write(wire) {
        Ok(written) if written == wire.len() => {}
        _ => return Err(Error::Send),
    }
    socket.flush().map_err(|_| Error::Send)
}

/// Read until the peer closes the stream or a read fails.
fn receive<C: Read>(socket: &mut C) -> Vec<u8> {
    let mut response = Vec::new();
    let mut buffer = [0u8; RECV_BUFFER_SIZE];
    loop {
        match socket.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => response.extend_from_slice(&buffer[..n]),
            Err(_) => {
                debug!("receive ended on read error after {=usize} bytes", response.len());
                break;
            }
        }
    }
    response
}
