//! Outbound request description and its HTTP/1.x wire encoding.

use super::error::Error;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;
use serde::Serialize;

/// Header names the encoder emits itself (plus the two method tokens).
///
/// A caller header whose name equals one of these, compared
/// case-sensitively, is rejected with [`Error::IllegalHeader`].
pub const RESERVED_HEADERS: [&str; 6] = ["Host", "User-Agent", "Connection", "Content-Length", "GET", "POST"];

const DEFAULT_USER_AGENT: &str = "ff-wii/1.0";
const DEFAULT_PORT: u16 = 80;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// `GET`
    #[default]
    Get,
    /// `POST`
    Post,
}

impl Method {
    /// The method token as written on the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// HTTP protocol version of the request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Version {
    /// `HTTP/1.0`
    Http10,
    /// `HTTP/1.1`
    #[default]
    Http11,
}

impl Version {
    /// The version token as written on the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Version::Http10 => "HTTP/1.0",
            Version::Http11 => "HTTP/1.1",
        }
    }
}

/// A single header field. Headers are kept as an ordered list because names
/// may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Field name, as written.
    pub name: String,
    /// Field value, as written.
    pub value: String,
}

impl Header {
    /// Build a header from anything string-like.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An outbound HTTP request.
///
/// The defaults are `GET / HTTP/1.1` on port 80 with the `ff-wii/1.0` user
/// agent, an empty body and no extra headers.
///
/// # Examples
///
/// ```rust
/// use libff::network::application::http::{Method, Request, Version};
///
/// let request = Request::post("api.example.com", "/scores", b"42".to_vec())
///     .port(8080)
///     .version(Version::Http10)
///     .header("X-Player", "one");
///
/// assert_eq!(request.method, Method::Post);
/// assert_eq!(request.headers.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Target host, also sent as the `Host` header.
    pub hostname: String,
    /// Request target; must start with `/`.
    pub path: String,
    /// TCP port of the server.
    pub port: u16,
    /// `User-Agent` value; omitted from the request when empty.
    pub user_agent: String,
    /// Request method.
    pub method: Method,
    /// Request-line version.
    pub version: Version,
    /// Raw body bytes.
    pub body: Vec<u8>,
    /// Caller headers, emitted in this order.
    pub headers: Vec<Header>,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            hostname: String::new(),
            path: String::from("/"),
            port: DEFAULT_PORT,
            user_agent: String::from(DEFAULT_USER_AGENT),
            method: Method::Get,
            version: Version::Http11,
            body: Vec::new(),
            headers: Vec::new(),
        }
    }
}

impl Request {
    /// A `GET` request for `path` on `hostname`.
    pub fn get(hostname: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// A `POST` request carrying `body`.
    pub fn post(hostname: impl Into<String>, path: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            hostname: hostname.into(),
            path: path.into(),
            method: Method::Post,
            body: body.into(),
            ..Self::default()
        }
    }

    /// Append a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(Header::new(name, value));
        self
    }

    /// Set the server port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the request-line version.
    pub fn version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Set the user agent. An empty string suppresses the header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Replace the body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Serialize `value` as the JSON body and add `Content-Type:
    /// application/json`. `N` bounds the serialized size.
    ///
    /// ```rust
    /// use libff::network::application::http::Request;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Score { player: u8, points: u32 }
    ///
    /// let request = Request::post("api.example.com", "/scores", "")
    ///     .json::<_, 64>(&Score { player: 1, points: 900 })
    ///     .unwrap();
    /// assert_eq!(request.body, br#"{"player":1,"points":900}"#);
    /// ```
    pub fn json<T: Serialize + ?Sized, const N: usize>(mut self, value: &T) -> Result<Self, Error> {
        let mut buf = [0u8; N];
        let len = serde_json_core::to_slice(value, &mut buf).map_err(|_| Error::JsonEncode)?;
        self.body = buf[..len].to_vec();
        self.headers.push(Header::new("Content-Type", "application/json"));
        Ok(self)
    }

    /// Check the path and the reserved-header policy.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.path.starts_with('/') {
            return Err(Error::InvalidPath);
        }
        if let Some(header) = self
            .headers
            .iter()
            .find(|header| RESERVED_HEADERS.iter().any(|reserved| *reserved == header.name))
        {
            return Err(Error::IllegalHeader(header.name.clone()));
        }
        Ok(())
    }

    /// Render the exact bytes to put on the wire.
    ///
    /// Layout: request line, `Host`, `User-Agent` (if set), caller headers in
    /// order, `Connection: close`, then either `Content-Length` plus the body
    /// (for `POST` or a non-empty body) or just the blank line.
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        self.validate()?;

        let mut out = Vec::with_capacity(128 + self.path.len() + self.body.len());

        // Request line
        out.extend_from_slice(self.method.as_str().as_bytes());
        out.push(b' ');
        out.extend_from_slice(self.path.as_bytes());
        out.push(b' ');
        out.extend_from_slice(self.version.as_str().as_bytes());
        out.extend_from_slice(b"\r\n");

        // Headers
        push_header(&mut out, "Host", &self.hostname);
        if !self.user_agent.is_empty() {
            push_header(&mut out, "User-Agent", &self.user_agent);
        }
        for header in &self.headers {
            push_header(&mut out, &header.name, &header.value);
        }

        // One request per connection.
        push_header(&mut out, "Connection", "close");

        // Body
        if self.method == Method::Post || !self.body.is_empty() {
            // 20 digits covers u64::MAX.
            let mut len: heapless::String<20> = heapless::String::new();
            let written = write!(len, "{}", self.body.len());
            debug_assert!(written.is_ok());
            push_header(&mut out, "Content-Length", &len);
            out.extend_from_slice(b"\r\n");
            out.extend_from_slice(&self.body);
        } else {
            out.extend_from_slice(b"\r\n");
        }

        Ok(out)
    }
}

fn push_header(out: &mut Vec<u8>, name: &str, value: &str) {
    out.extend_from_slice(name.as_bytes());
    out.extend_from_slice(b": ");
    out.extend_from_slice(value.as_bytes());
    out.extend_from_slice(b"\r\n");
}
