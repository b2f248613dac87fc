//! `Transfer-Encoding: chunked` body decoding.
//!
//! Decoding is best-effort: it runs over a body that has already been read
//! in full, and stops at the first chunk it cannot frame. Whatever was
//! decoded up to that point is the result.

use super::request::Header;
use alloc::vec::Vec;

const CRLF: &[u8] = b"\r\n";

/// Whether the response headers ask for chunked decoding: a header named
/// exactly `Transfer-Encoding` whose value contains `chunked`. Both checks
/// are case-sensitive.
pub fn is_chunked(headers: &[Header]) -> bool {
    headers
        .iter()
        .any(|header| header.name == "Transfer-Encoding" && header.value.contains("chunked"))
}

/// Decode a chunked body.
///
/// Each chunk is `<hex size>\r\n<data>\r\n`. Decoding ends at a zero-size
/// chunk, a size line without `\r\n`, a size that is not hexadecimal, or a
/// chunk that claims more bytes than remain.
///
/// ```rust
/// use libff::network::application::http::chunked::decode;
///
/// assert_eq!(decode(b"4\r\nWiki\r\n5\r\npedia\r\n0\r\n\r\n"), b"Wikipedia");
/// assert_eq!(decode(b"zz\r\nHello\r\n0\r\n\r\n"), b"");
/// ```
pub fn decode(encoded: &[u8]) -> Vec<u8> {
    let mut decoded = Vec::with_capacity(encoded.len());
    let mut pos = 0;

    while pos < encoded.len() {
        let Some(crlf) = find_slice(&encoded[pos..], CRLF).map(|offset| pos + offset) else {
            debug!("chunked: size line without CRLF at {=usize}", pos);
            break;
        };

        let Some(chunk_size) = parse_chunk_size(&encoded[pos..crlf]) else {
            debug!("chunked: malformed chunk size at {=usize}", pos);
            break;
        };

        if chunk_size == 0 {
            break;
        }

        pos = crlf + CRLF.len();
        let end = match pos.checked_add(chunk_size) {
            Some(end) if end <= encoded.len() => end,
            _ => {
                debug!("chunked: chunk of {=usize} bytes overruns body", chunk_size);
                break;
            }
        };

        decoded.extend_from_slice(&encoded[pos..end]);
        // Skip the data and its trailing CRLF.
        pos = end + CRLF.len();
    }

    decoded
}

/// Parse a chunk-size line the way `strtoul(.., 16)` does: skip leading
/// whitespace, take the longest run of hex digits, ignore the rest (so chunk
/// extensions like `1a;name=value` pass). No digits or overflow is `None`.
fn parse_chunk_size(line: &[u8]) -> Option<usize> {
    let start = line.iter().position(|b| !b.is_ascii_whitespace()).unwrap_or(line.len());
    let digits = &line[start..];
    let len = digits.iter().take_while(|b| b.is_ascii_hexdigit()).count();
    if len == 0 {
        return None;
    }
    let digits = core::str::from_utf8(&digits[..len]).ok()?;
    usize::from_str_radix(digits, 16).ok()
}

/// Finds the first occurrence of a slice in another slice and returns its starting position.
pub(crate) fn find_slice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
