//! A network abstraction layer for console homebrew
//!
//! The console's networking subsystem is a vendor library with a BSD-like
//! socket API and an explicit process-wide init/deinit pair. Everything above
//! it talks to that library through the traits in this module, so the HTTP
//! client can run against a console backend, the hosted [`host`] backend or a
//! scripted test double without change.

#![deny(unsafe_code)]

use core::net::{IpAddr, Ipv4Addr, SocketAddrV4};

/// Common error types for network operations
pub mod error;

/// Hosted [`Stack`] backend built on `std::net`.
#[cfg(feature = "std")]
pub mod host;

/// Application-layer protocols built on the transport traits.
pub mod application;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{Close, Connection, Read, Stack, Write};
}

/// Byte-stream input side of a socket.
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Read data from the connection. `Ok(0)` means the peer closed the stream.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Byte-stream output side of a socket.
pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Send `buf` as one logical send, returning how many bytes were accepted.
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Releases a socket.
pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Close the connection
    fn close(self) -> Result<(), Self::Error>;
}

/// A synchronous stream connection
pub trait Connection: Read + Write + Close {}

/// The networking subsystem of the platform.
///
/// Mirrors the shape of a minimal embedded socket library: the subsystem is
/// brought up once, hands out unconnected stream sockets, resolves names and
/// connects sockets to IPv4 endpoints. All calls block.
pub trait Stack {
    /// Stream socket handed out by [`Stack::socket`].
    type Socket: Connection;
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Bring the subsystem up. Called once before any other operation.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Tear the subsystem down.
    fn deinit(&mut self);

    /// IPv4 address of the local network interface.
    fn local_address(&mut self) -> Ipv4Addr;

    /// Create an unconnected stream socket.
    fn socket(&mut self) -> Result<Self::Socket, Self::Error>;

    /// Resolve `hostname`. The result may be of any address family; callers
    /// decide what they support.
    fn resolve(&mut self, hostname: &str) -> Result<IpAddr, Self::Error>;

    /// Connect `socket` to `remote`.
    fn connect(&mut self, socket: &mut Self::Socket, remote: SocketAddrV4)
    -> Result<(), Self::Error>;
}
