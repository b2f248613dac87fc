//! Common error types for network operations

/// A common error type for network backends.
///
/// This enum defines the errors a [`Stack`](super::Stack) backend and its
/// sockets can report. It is designed to be simple and portable for `no_std`
/// environments; the HTTP client maps these onto its own error kinds.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// An operation was attempted on a socket that is not connected.
    NotOpen,
    /// The networking subsystem has not been initialized.
    NotInitialized,
    /// An error occurred during a write operation.
    WriteError,
    /// An error occurred during a read operation.
    ReadError,
    /// A connection attempt was refused.
    ConnectionRefused,
    /// A timeout occurred.
    Timeout,
    /// A host name could not be resolved to an address.
    InvalidAddress,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::NotOpen => defmt::write!(f, "NotOpen"),
            Error::NotInitialized => defmt::write!(f, "NotInitialized"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::ConnectionRefused => defmt::write!(f, "ConnectionRefused"),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::InvalidAddress => defmt::write!(f, "InvalidAddress"),
        }
    }
}
