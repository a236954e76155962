//! HDLC transparency (byte-stuffing) removal.
//!
//! Frames on the wire replace in-content flag and escape values with
//! [`ESCAPE`] followed by the value XOR [`ESCAPE_XOR`]. Decoding scans
//! strictly between the two flag bytes; the flags themselves are never
//! escaped in well-formed input and pass through verbatim.

use super::frame::{ESCAPE, ESCAPE_XOR};

/// Remove byte-stuffing from a flag-delimited frame.
///
/// Best effort and infallible: an escape byte with nothing after it
/// (frame closed while an escape was pending) is silently dropped, and
/// inputs too short to have an interior are returned unchanged.
///
/// # Example
///
/// ```
/// use linetap::framing::unescape;
///
/// // 0x7D 0x41 is the escaped form of 0x61.
/// let decoded = unescape(&[0x7E, 0x41, 0x7D, 0x41, 0x42, 0x7E]);
/// assert_eq!(decoded, [0x7E, 0x41, 0x61, 0x42, 0x7E]);
/// ```
pub fn unescape(raw: &[u8]) -> Vec<u8> {
    if raw.len() < 2 {
        return raw.to_vec();
    }

    let mut decoded = Vec::with_capacity(raw.len());
    decoded.push(raw[0]);

    let mut escape = false;
    for &byte in &raw[1..raw.len() - 1] {
        if byte == ESCAPE {
            escape = true;
            continue;
        }
        decoded.push(if escape { byte ^ ESCAPE_XOR } else { byte });
        escape = false;
    }

    decoded.push(raw[raw.len() - 1]);
    decoded
}
