//! Response model and the parser that builds it from raw bytes.

use super::chunked::{self, find_slice};
use super::error::Error;
use super::request::Header;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// A complete HTTP response.
///
/// Built in one piece once the server has closed the connection. Parsing
/// never fails: anomalies in the response shape show up as field values
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    /// Status code from the status line. `0` when no header block was found,
    /// `-1` when the status token is not a number.
    pub status_code: i32,
    /// Body after transfer decoding.
    pub body: Vec<u8>,
    /// Body exactly as received.
    pub raw_body: Vec<u8>,
    /// Header fields in source order, duplicates kept.
    pub headers: Vec<Header>,
}

impl Response {
    /// Split `raw` into status line, headers and body.
    ///
    /// Without a `\r\n\r\n` separator the whole payload becomes the body and
    /// the status code stays `0`. No transfer decoding is applied; see
    /// [`Response::decode_body`].
    ///
    /// Header text is decoded lossily: bytes that are not valid UTF-8 become
    /// U+FFFD. Body bytes are kept exactly.
    pub fn parse(raw: &[u8]) -> Self {
        let mut response = Response::default();

        let Some(split) = find_slice(raw, HEADER_TERMINATOR) else {
            warn!("no header terminator");
            response.raw_body = raw.to_vec();
            response.body = response.raw_body.clone();
            return response;
        };

        response.raw_body = raw[split + HEADER_TERMINATOR.len()..].to_vec();
        response.body = response.raw_body.clone();

        let head = String::from_utf8_lossy(&raw[..split]);
        let mut lines = head.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line));

        if let Some(status_line) = lines.next() {
            response.status_code = parse_status_code(status_line);
        }

        for line in lines {
            let Some((name, value)) = line.split_once(':') else {
                continue;
            };
            response.headers.push(Header::new(trim(name), trim(value)));
        }

        response
    }

    /// Replace `body` with the chunk-decoded `raw_body` when the headers
    /// announce `Transfer-Encoding: chunked`. `raw_body` is left untouched.
    pub fn decode_body(&mut self) {
        if chunked::is_chunked(&self.headers) {
            self.body = chunked::decode(&self.raw_body);
        }
    }

    /// First header named `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers_named(name).next()
    }

    /// Every header named `name`, in source order.
    pub fn headers_named<'a, 'n>(&'a self, name: &'n str) -> impl Iterator<Item = &'a str> {
        self.headers
            .iter()
            .filter(move |header| header.name.eq_ignore_ascii_case(name))
            .map(|header| header.value.as_str())
    }

    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// The decoded body as text, if it is valid UTF-8.
    pub fn body_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.body).ok()
    }

    /// Deserialize the decoded body as JSON.
    ///
    /// ```rust
    /// use libff::network::application::http::Response;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Status<'a> { state: &'a str, players: u8 }
    ///
    /// let response = Response::parse(b"HTTP/1.1 200 OK\r\n\r\n{\"state\":\"lobby\",\"players\":3}");
    /// let status: Status = response.json().unwrap();
    /// assert_eq!(status.state, "lobby");
    /// assert_eq!(status.players, 3);
    /// ```
    pub fn json<'a, T: Deserialize<'a>>(&'a self) -> Result<T, Error> {
        serde_json_core::from_slice(&self.body)
            .map(|(value, _)| value)
            .map_err(|_| Error::JsonDecode)
    }
}

/// Status code is the token between the first and second space. A line
/// without a second space leaves the code at `0`.
fn parse_status_code(status_line: &str) -> i32 {
    let Some((_, rest)) = status_line.split_once(' ') else {
        return 0;
    };
    let Some((code, _)) = rest.split_once(' ') else {
        return 0;
    };
    parse_leading_int(code).unwrap_or(-1)
}

/// Parse the way `std::stoi` does: skip leading whitespace, take an optional
/// sign and the longest run of decimal digits, ignore the rest. No digits or
/// an `i32` overflow is `None`.
fn parse_leading_int(token: &str) -> Option<i32> {
    let token = token.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    digits[..len].bytes().try_fold(0i32, |acc, digit| {
        let digit = i32::from(digit - b'0');
        let acc = acc.checked_mul(10)?;
        if negative { acc.checked_sub(digit) } else { acc.checked_add(digit) }
    })
}

fn trim(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '\t')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_response() {
        let response = Response::parse(b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nHello");
        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers, [Header::new("Content-Type", "text/plain")]);
        assert_eq!(response.body, b"Hello");
        assert_eq!(response.raw_body, b"Hello");
    }

    #[test]
    fn missing_terminator_keeps_everything_as_body() {
        let response = Response::parse(b"not a real response");
        assert_eq!(response.status_code, 0);
        assert_eq!(response.body, b"not a real response");
        assert_eq!(response.raw_body, b"not a real response");
        assert!(response.headers.is_empty());
    }

    #[test]
    fn empty_payload() {
        let response = Response::parse(b"");
        assert_eq!(response, Response::default());
    }

    #[test]
    fn non_numeric_status_is_minus_one() {
        assert_eq!(Response::parse(b"HTTP/1.1 abc OK\r\n\r\n").status_code, -1);
        assert_eq!(Response::parse(b"HTTP/1.1  OK\r\n\r\n").status_code, -1);
    }

    #[test]
    fn status_code_ignores_trailing_text() {
        assert_eq!(Response::parse(b"HTTP/1.1 200abc OK\r\n\r\n").status_code, 200);
        assert_eq!(Response::parse(b"HTTP/1.1 \t404x Not Found\r\n\r\n").status_code, 404);
        assert_eq!(Response::parse(b"HTTP/1.1 +301 Moved\r\n\r\n").status_code, 301);
    }

    #[test]
    fn status_code_overflow_is_minus_one() {
        assert_eq!(Response::parse(b"HTTP/1.1 99999999999 OK\r\n\r\n").status_code, -1);
        assert_eq!(Response::parse(b"HTTP/1.1 - OK\r\n\r\n").status_code, -1);
    }

    #[test]
    fn leading_int_parsing() {
        assert_eq!(parse_leading_int("200"), Some(200));
        assert_eq!(parse_leading_int("  -12ms"), Some(-12));
        assert_eq!(parse_leading_int("2147483647"), Some(i32::MAX));
        assert_eq!(parse_leading_int("-2147483648"), Some(i32::MIN));
        assert_eq!(parse_leading_int("2147483648"), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn status_without_reason_phrase_stays_zero() {
        assert_eq!(Response::parse(b"HTTP/1.1 204\r\n\r\n").status_code, 0);
    }

    #[test]
    fn multi_word_reason_phrase() {
        let response = Response::parse(b"HTTP/1.0 404 Not Found\r\n\r\n");
        assert_eq!(response.status_code, 404);
        assert!(!response.is_success());
    }

    #[test]
    fn header_fields_are_trimmed() {
        let response = Response::parse(b"HTTP/1.1 200 OK\r\n \tX-Pad\t :  spaced value \t\r\n\r\n");
        assert_eq!(response.headers, [Header::new("X-Pad", "spaced value")]);
    }

    #[test]
    fn value_keeps_later_colons() {
        let response = Response::parse(b"HTTP/1.1 200 OK\r\nLocation: http://host:8080/x\r\n\r\n");
        assert_eq!(response.header("location"), Some("http://host:8080/x"));
    }

    #[test]
    fn lines_without_colon_are_skipped() {
        let response = Response::parse(b"HTTP/1.1 200 OK\r\ngarbage line\r\nA: 1\r\n\r\n");
        assert_eq!(response.headers, [Header::new("A", "1")]);
    }

    #[test]
    fn duplicate_headers_are_preserved_in_order() {
        let response = Response::parse(b"HTTP/1.1 200 OK\r\nSet-Cookie: a=1\r\nX: y\r\nSet-Cookie: b=2\r\n\r\n");
        assert_eq!(response.headers.len(), 3);
        let cookies: Vec<&str> = response.headers_named("set-cookie").collect();
        assert_eq!(cookies, ["a=1", "b=2"]);
        assert_eq!(response.header("Set-Cookie"), Some("a=1"));
    }

    #[test]
    fn bare_lf_header_lines() {
        let response = Response::parse(b"HTTP/1.1 201 Created\nA: 1\nB: 2\r\n\r\nbody");
        assert_eq!(response.status_code, 201);
        assert_eq!(response.headers, [Header::new("A", "1"), Header::new("B", "2")]);
        assert_eq!(response.body, b"body");
    }

    #[test]
    fn body_may_contain_terminator_bytes() {
        let response = Response::parse(b"HTTP/1.1 200 OK\r\n\r\nfirst\r\n\r\nsecond");
        assert_eq!(response.body, b"first\r\n\r\nsecond");
    }

    #[test]
    fn non_utf8_header_bytes_become_replacement_chars() {
        let response = Response::parse(b"HTTP/1.1 200 OK\r\nX-Raw: \xff\xfe\r\n\r\n\xff\xfe");
        assert_eq!(response.header("X-Raw"), Some("\u{FFFD}\u{FFFD}"));
        assert_eq!(response.body, [0xff, 0xfe]);
    }

    #[test]
    fn binary_body_is_kept_verbatim() {
        let mut raw = b"HTTP/1.1 200 OK\r\n\r\n".to_vec();
        raw.extend_from_slice(&[0x00, 0xff, 0x10, 0x00]);
        assert_eq!(Response::parse(&raw).body, [0x00, 0xff, 0x10, 0x00]);
    }

    #[test]
    fn decode_body_only_when_chunked() {
        let mut chunked = Response::parse(b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n5\r\nHello\r\n0\r\n\r\n");
        chunked.decode_body();
        assert_eq!(chunked.body, b"Hello");
        assert_eq!(chunked.raw_body, b"5\r\nHello\r\n0\r\n\r\n");

        let mut plain = Response::parse(b"HTTP/1.1 200 OK\r\n\r\n5\r\nHello\r\n0\r\n\r\n");
        plain.decode_body();
        assert_eq!(plain.body, plain.raw_body);
    }

    #[test]
    fn lowercase_transfer_encoding_name_is_not_decoded() {
        let mut response = Response::parse(b"HTTP/1.1 200 OK\r\ntransfer-encoding: chunked\r\n\r\n5\r\nHello\r\n0\r\n\r\n");
        response.decode_body();
        assert_eq!(response.body, b"5\r\nHello\r\n0\r\n\r\n");
        assert_eq!(response.header("Transfer-Encoding"), Some("chunked"));
    }

    #[test]
    fn body_str_and_json() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct Pointer {
            x: i32,
            valid: bool,
        }

        let response = Response::parse(b"HTTP/1.1 200 OK\r\n\r\n{\"x\":-4,\"valid\":false}");
        assert_eq!(response.body_str(), Some("{\"x\":-4,\"valid\":false}"));
        assert_eq!(response.json::<Pointer>(), Ok(Pointer { x: -4, valid: false }));

        let broken = Response::parse(b"HTTP/1.1 200 OK\r\n\r\n{\"x\":");
        assert_eq!(broken.json::<Pointer>(), Err(Error::JsonDecode));
    }
}
