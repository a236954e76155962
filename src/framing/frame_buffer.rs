//! Frame buffer for accumulating partial reads.
//!
//! Uses `bytes::BytesMut` for buffer management. A serial read may
//! deliver any slice of the line: half a frame, several frames, or pure
//! noise. `FrameBuffer` absorbs each chunk and yields every complete
//! flag-to-flag span, keeping whatever trails behind for the next read.
//!
//! Buffering is deliberately asymmetric:
//! - a buffer containing no flag at all is discarded outright (noise
//!   before any frame start),
//! - a buffer containing one flag is retained in full until the
//!   matching flag arrives or more data resolves it.
//!
//! Adjacent frames may share a flag, so after emitting a frame the
//! closing flag is kept as the opening flag of the next candidate.

use bytes::{Bytes, BytesMut};

use super::frame::{RawFrame, FLAG, MIN_FLAG_SPAN};

/// Initial capacity of the accumulation buffer.
const INITIAL_CAPACITY: usize = 4096;

/// Buffer for accumulating incoming bytes and extracting complete frames.
///
/// Owned exclusively by one stream pump; per-stream parse state never
/// crosses between the two tapped lines.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    /// Bytes read from the line but not yet resolved into frames.
    buffer: BytesMut,
}

impl FrameBuffer {
    /// Create a new, empty frame buffer.
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Feed a chunk of raw bytes and extract all complete frames.
    ///
    /// This is the main API for processing incoming data. Returns every
    /// frame completed by this chunk, in line order (possibly none).
    /// Candidates with [`MIN_FLAG_SPAN`] or fewer bytes between their
    /// flags are discarded as noise and never surface.
    ///
    /// Synchronous and bounded by the buffer size; never blocks.
    pub fn feed(&mut self, data: &[u8]) -> Vec<RawFrame> {
        self.buffer.extend_from_slice(data);

        let mut frames = Vec::new();

        loop {
            let Some(begin) = self.buffer.iter().position(|&b| b == FLAG) else {
                // No frame start anywhere: everything buffered is noise.
                self.buffer.clear();
                break;
            };

            let Some(offset) = self.buffer[begin + 1..].iter().position(|&b| b == FLAG) else {
                // Opening flag without its closing flag yet: keep
                // everything (including the noise prefix) and wait.
                break;
            };
            let end = begin + 1 + offset;

            if end - begin > MIN_FLAG_SPAN {
                let span = Bytes::copy_from_slice(&self.buffer[begin..=end]);
                frames.push(RawFrame::new(span));
            }

            // Retain from the closing flag onward: it opens the next
            // candidate when frames share a delimiter.
            let _ = self.buffer.split_to(end);
        }

        frames
    }

    /// Get the number of buffered, unresolved bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Discard all buffered bytes.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
