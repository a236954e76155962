//! Per-line read loop driving frames from a byte source to the sink.
//!
//! One `StreamPump` owns one half of the tapped link: it reads raw
//! bytes from its source, runs them through its private frame buffer,
//! and forwards every completed frame to the shared capture sink as a
//! direction-tagged, freshly timestamped record. Two pumps run as
//! independent tasks and share nothing but the sink handle.
//!
//! The pump is generic over `AsyncRead`, so tests can drive it from an
//! in-memory stream instead of a serial port.

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, trace};

use crate::capture::{CaptureRecord, CaptureSink, Direction, Timestamp};
use crate::error::{Result, TapError};
use crate::framing::FrameBuffer;

/// Per-read buffer size, matching a serial driver's typical burst.
const READ_BUFFER_SIZE: usize = 512;

/// Read loop for one tapped line.
pub struct StreamPump<R> {
    reader: R,
    direction: Direction,
    extractor: FrameBuffer,
    sink: CaptureSink,
}

impl<R: AsyncRead + Unpin> StreamPump<R> {
    /// Create a pump for one byte source with its fixed direction tag.
    pub fn new(reader: R, direction: Direction, sink: CaptureSink) -> Self {
        Self {
            reader,
            direction,
            extractor: FrameBuffer::new(),
            sink,
        }
    }

    /// Run the read loop until the source ends or an error is fatal.
    ///
    /// Parsing and record building happen inline on each completed
    /// read; the only suspension points are the read itself and the
    /// send into the sink. EOF ends the pump cleanly (a real serial
    /// port never reaches it; in-memory test sources do).
    pub async fn run(mut self) -> Result<()> {
        let mut buf = [0u8; READ_BUFFER_SIZE];

        loop {
            let n = match self.reader.read(&mut buf).await {
                Ok(0) => return Ok(()),
                Ok(n) => n,
                Err(e) => return Err(TapError::Io(e)),
            };
            trace!("{} read {} bytes", self.direction.symbol(), n);

            for frame in self.extractor.feed(&buf[..n]) {
                let timestamp = Timestamp::now();
                let Some(record) = CaptureRecord::from_frame(&frame, self.direction, timestamp)
                else {
                    continue;
                };
                debug!(
                    "{}{} {}",
                    self.direction.symbol(),
                    frame.len(),
                    printable(frame.as_bytes())
                );
                self.sink.append(record).await?;
            }
        }
    }
}

/// Escape a byte sequence for one-line console logging: printable
/// ASCII verbatim, everything else as `\xNN`.
fn printable(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        if (0x20..=0x7E).contains(&b) {
            out.push(b as char);
        } else {
            out.push_str(&format!("\\x{:02x}", b));
        }
    }
    out
}
