//! HTTP client error kinds.

use alloc::string::String;
use core::fmt;

/// Errors surfaced by the HTTP client.
///
/// Only construction-time and transport-time faults are errors. A response
/// with a broken shape (no header terminator, unparseable status line,
/// malformed chunk framing) still produces a
/// [`Response`](super::Response) with whatever could be recovered.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// The networking subsystem failed to initialize.
    SubsystemInit,
    /// The request path does not start with `/`.
    InvalidPath,
    /// A caller header collides with a name the encoder writes itself.
    IllegalHeader(String),
    /// The stack could not create a socket.
    SocketCreate,
    /// The host name did not resolve.
    DnsResolution,
    /// The host resolved to a non-IPv4 address.
    UnsupportedAddress,
    /// The TCP connection could not be established.
    Connect,
    /// The request could not be sent in full.
    Send,
    /// A request body could not be serialized to JSON.
    JsonEncode,
    /// A response body could not be deserialized from JSON.
    JsonDecode,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SubsystemInit => write!(f, "failed to init networking"),
            Error::InvalidPath => write!(f, "path must start with /"),
            Error::IllegalHeader(name) => write!(f, "illegal header: {name}"),
            Error::SocketCreate => write!(f, "failed to create socket"),
            Error::DnsResolution => write!(f, "DNS resolution failed"),
            Error::UnsupportedAddress => write!(f, "unsupported address type"),
            Error::Connect => write!(f, "failed to connect to server"),
            Error::Send => write!(f, "failed to send request"),
            Error::JsonEncode => write!(f, "failed to serialize JSON body"),
            Error::JsonDecode => write!(f, "failed to deserialize JSON body"),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::SubsystemInit => defmt::write!(f, "SubsystemInit"),
            Error::InvalidPath => defmt::write!(f, "InvalidPath"),
            Error::IllegalHeader(name) => defmt::write!(f, "IllegalHeader({=str})", name.as_str()),
            Error::SocketCreate => defmt::write!(f, "SocketCreate"),
            Error::DnsResolution => defmt::write!(f, "DnsResolution"),
            Error::UnsupportedAddress => defmt::write!(f, "UnsupportedAddress"),
            Error::Connect => defmt::write!(f, "Connect"),
            Error::Send => defmt::write!(f, "Send"),
            Error::JsonEncode => defmt::write!(f, "JsonEncode"),
            Error::JsonDecode => defmt::write!(f, "JsonDecode"),
        }
    }
}
