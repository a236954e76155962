//! Framing module - HDLC flag delimiting and transparency removal.
//!
//! This module turns an unbounded, arbitrarily chunked byte stream into
//! whole link-layer frames:
//! - Flag-delimited frame extraction with partial-frame buffering
//! - Byte-stuffing (transparency) removal
//! - The `RawFrame` type handed to the capture layer

mod frame;
mod frame_buffer;
mod unescape;

pub use frame::{RawFrame, ESCAPE, ESCAPE_XOR, FLAG, MIN_FLAG_SPAN};
pub use frame_buffer::FrameBuffer;
pub use unescape::unescape;
