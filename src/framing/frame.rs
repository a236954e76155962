//! Raw frame type and HDLC framing constants.
//!
//! A `RawFrame` is one flag-to-flag span lifted out of the byte stream,
//! still byte-stuffed and still carrying its trailing FCS. Uses
//! `bytes::Bytes` so frames can be passed around without copying.

use bytes::Bytes;

/// Frame delimiter marking the start and end of every frame.
pub const FLAG: u8 = 0x7E;

/// Control-escape byte introducing a transparency-encoded byte.
pub const ESCAPE: u8 = 0x7D;

/// XOR mask recovering the original value of an escaped byte.
pub const ESCAPE_XOR: u8 = 0x20;

/// Minimum distance between a frame's opening and closing flag.
///
/// Anything with four or fewer bytes between the flags cannot hold a
/// two-byte FCS plus content and is treated as line noise.
pub const MIN_FLAG_SPAN: usize = 4;

/// A complete, still-escaped frame as it appeared on the line.
///
/// Invariant (upheld by [`FrameBuffer`](super::FrameBuffer)): starts and
/// ends with [`FLAG`] and is at least 6 bytes long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    bytes: Bytes,
}

impl RawFrame {
    /// Wrap an extracted flag-to-flag span.
    pub(crate) fn new(bytes: Bytes) -> Self {
        debug_assert!(bytes.len() > MIN_FLAG_SPAN + 1);
        debug_assert_eq!(bytes.first(), Some(&FLAG));
        debug_assert_eq!(bytes.last(), Some(&FLAG));
        Self { bytes }
    }

    /// Frame bytes, flags inclusive.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Frame length in bytes, flags inclusive.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for a well-formed frame; provided for completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Remove byte-stuffing, yielding the decoded frame (flags intact).
    pub fn unescape(&self) -> Vec<u8> {
        super::unescape(&self.bytes)
    }
}

impl AsRef<[u8]> for RawFrame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_frame_accessors() {
        let frame = RawFrame::new(Bytes::from_static(&[
            FLAG, 0x01, 0x02, 0x03, 0x04, FLAG,
        ]));
        assert_eq!(frame.len(), 6);
        assert!(!frame.is_empty());
        assert_eq!(frame.as_bytes()[0], FLAG);
        assert_eq!(*frame.as_bytes().last().unwrap(), FLAG);
    }

    #[test]
    fn test_unescape_passthrough_via_frame() {
        let frame = RawFrame::new(Bytes::from_static(&[
            FLAG, 0x41, 0x42, 0x43, 0x44, FLAG,
        ]));
        assert_eq!(frame.unescape(), frame.as_bytes());
    }
}
