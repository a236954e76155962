//! Capture record types and the frame-to-record builder.
//!
//! A capture record is one timestamped, direction-tagged packet with
//! link-layer framing stripped: the raw frame is unescaped, then the
//! leading flag, trailing flag, and two-byte FCS are trimmed away. The
//! FCS is removed, never verified.

use std::time::{SystemTime, UNIX_EPOCH};

use bytes::Bytes;

use crate::framing::RawFrame;

/// Framing bytes trimmed from a decoded frame: two flags plus the
/// two-byte FCS ahead of the closing flag.
const FRAME_OVERHEAD: usize = 4;

/// Which half of the tapped link a record originated from.
///
/// Assigned to a pump at construction and immutable for its lifetime;
/// only ever used to tag output, never to alter parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The DTE side of the link.
    Incoming,
    /// The DCE side of the link.
    Outgoing,
}

impl Direction {
    /// One-byte direction marker prepended to the payload in the
    /// capture file (what linktype 204 readers expect).
    #[inline]
    pub fn marker(self) -> u8 {
        match self {
            Direction::Incoming => 0,
            Direction::Outgoing => 1,
        }
    }

    /// Console symbol used in traffic logs.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Direction::Incoming => '<',
            Direction::Outgoing => '>',
        }
    }
}

/// Capture timestamp: seconds and microseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    /// Whole seconds since the epoch.
    pub sec: u32,
    /// Microsecond remainder.
    pub usec: u32,
}

impl Timestamp {
    /// Current wall-clock time.
    ///
    /// A clock before the epoch degrades to the epoch itself rather
    /// than failing; record timestamps are metadata, not control flow.
    pub fn now() -> Self {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self {
            sec: since_epoch.as_secs() as u32,
            usec: since_epoch.subsec_micros(),
        }
    }
}

/// One packet as persisted to the capture file.
#[derive(Debug, Clone)]
pub struct CaptureRecord {
    /// When the frame completed on the line.
    pub timestamp: Timestamp,
    /// Which tapped line it arrived on.
    pub direction: Direction,
    /// Decoded frame content with flags and FCS stripped.
    pub payload: Bytes,
}

impl CaptureRecord {
    /// Build a record from a raw frame: unescape, then trim framing.
    ///
    /// Returns `None` when the decoded frame is too short to hold any
    /// payload behind its framing bytes. The extractor's length
    /// invariant makes that unreachable for escape-free input, but
    /// unescaping shortens frames, so it is checked here as well.
    pub fn from_frame(frame: &RawFrame, direction: Direction, timestamp: Timestamp) -> Option<Self> {
        let decoded = frame.unescape();
        if decoded.len() <= FRAME_OVERHEAD {
            return None;
        }

        // Bytes [1 .. len-3): drop the lead flag, the two-byte FCS,
        // and the close flag.
        let payload = Bytes::copy_from_slice(&decoded[1..decoded.len() - 3]);
        Some(Self {
            timestamp,
            direction,
            payload,
        })
    }

    /// Bytes this record contributes to the file after its per-record
    /// header: the direction marker plus the payload.
    #[inline]
    pub fn captured_len(&self) -> u32 {
        self.payload.len() as u32 + 1
    }
}
