//! [`Stack`] implementation for hosted targets.
//!
//! Lets the same client code run on a desktop or CI machine: sockets are
//! `std::net::TcpStream`s and names go through the system resolver. Optional
//! timeouts bound every blocking call; an expired read timeout surfaces as a
//! read error, which ends the client's receive loop.

use super::error::Error;
use super::{Close, Connection, Read, Stack, Write};
use core::net::{IpAddr, Ipv4Addr, SocketAddrV4};
use std::io::{self, Read as _, Write as _};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs, UdpSocket};
use std::time::Duration;

// Only used to pick the outbound interface; UDP connect sends nothing.
const ROUTE_PROBE: SocketAddrV4 = SocketAddrV4::new(Ipv4Addr::new(192, 0, 2, 1), 9);

/// Networking subsystem backed by the host operating system.
#[derive(Debug, Default, Clone)]
pub struct HostStack {
    initialized: bool,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    write_timeout: Option<Duration>,
}

impl HostStack {
    /// A stack with no timeouts: every call may block indefinitely.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the TCP connect.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Bound every read on sockets from this stack.
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Bound every write on sockets from this stack.
    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = Some(timeout);
        self
    }

    /// Whether [`Stack::init`] has run without a matching [`Stack::deinit`].
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl Stack for HostStack {
    type Socket = HostSocket;
    type Error = Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.initialized = true;
        Ok(())
    }

    fn deinit(&mut self) {
        self.initialized = false;
    }

    fn local_address(&mut self) -> Ipv4Addr {
        let probe = || -> io::Result<Ipv4Addr> {
            let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
            socket.connect(ROUTE_PROBE)?;
            match socket.local_addr()? {
                SocketAddr::V4(local) => Ok(*local.ip()),
                SocketAddr::V6(_) => Ok(Ipv4Addr::UNSPECIFIED),
            }
        };
        probe().unwrap_or(Ipv4Addr::UNSPECIFIED)
    }

    fn socket(&mut self) -> Result<Self::Socket, Self::Error> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        Ok(HostSocket { stream: None })
    }

    fn resolve(&mut self, hostname: &str) -> Result<IpAddr, Self::Error> {
        let addrs: Vec<SocketAddr> = (hostname, 0)
            .to_socket_addrs()
            .map_err(|_| Error::InvalidAddress)?
            .collect();
        addrs
            .iter()
            .find(|addr| addr.is_ipv4())
            .or_else(|| addrs.first())
            .map(|addr| addr.ip())
            .ok_or(Error::InvalidAddress)
    }

    fn connect(&mut self, socket: &mut Self::Socket, remote: SocketAddrV4) -> Result<(), Self::Error> {
        let stream = match self.connect_timeout {
            Some(timeout) => TcpStream::connect_timeout(&SocketAddr::V4(remote), timeout),
            None => TcpStream::connect(remote),
        }
        .map_err(connect_error)?;
        stream.set_read_timeout(self.read_timeout).map_err(|_| Error::ReadError)?;
        stream.set_write_timeout(self.write_timeout).map_err(|_| Error::WriteError)?;
        socket.stream = Some(stream);
        Ok(())
    }
}

/// A TCP socket handed out by [`HostStack`]. Unconnected until
/// [`Stack::connect`] succeeds.
#[derive(Debug)]
pub struct HostSocket {
    stream: Option<TcpStream>,
}

impl HostSocket {
    fn stream(&mut self) -> Result<&mut TcpStream, Error> {
        self.stream.as_mut().ok_or(Error::NotOpen)
    }
}

impl Read for HostSocket {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        self.stream()?.read(buf).map_err(|e| match e.kind() {
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => Error::Timeout,
            _ => Error::ReadError,
        })
    }
}

impl Write for HostSocket {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Error> {
        self.stream()?.write_all(buf).map_err(|e| match e.kind() {
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => Error::Timeout,
            _ => Error::WriteError,
        })?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.stream()?.flush().map_err(|_| Error::WriteError)
    }
}

impl Close for HostSocket {
    type Error = Error;

    fn close(self) -> Result<(), Error> {
        match self.stream {
            // The peer may already have closed its side.
            Some(stream) => match stream.shutdown(Shutdown::Both) {
                Err(e) if e.kind() != io::ErrorKind::NotConnected => Err(Error::WriteError),
                _ => Ok(()),
            },
            None => Ok(()),
        }
    }
}

impl Connection for HostSocket {}

fn connect_error(e: io::Error) -> Error {
    match e.kind() {
        io::ErrorKind::ConnectionRefused => Error::ConnectionRefused,
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => Error::Timeout,
        _ => Error::InvalidAddress,
    }
}
