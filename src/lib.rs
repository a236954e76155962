//! # linetap
//!
//! Passive bidirectional serial-line tap. Listens on the two halves of
//! a modem link (DTE and DCE), reconstructs HDLC-framed packets from
//! the raw byte streams, strips framing and checksum bytes, and writes
//! each packet to a pcap file (linktype 204, PPP with direction) that
//! Wireshark and friends read natively.
//!
//! ## Architecture
//!
//! ```text
//! serial DTE ─► StreamPump ─► FrameBuffer ─► CaptureRecord ─┐
//!                                                           ├─► CaptureSink ─► pcap
//! serial DCE ─► StreamPump ─► FrameBuffer ─► CaptureRecord ─┘
//! ```
//!
//! Each pump owns its parse state; the sink is the only shared
//! resource and serializes appends through a dedicated writer task.
//!
//! ## Example
//!
//! ```no_run
//! use linetap::capture::{spawn_sink, Direction, PcapFile};
//! use linetap::pump::StreamPump;
//! use linetap::transport;
//!
//! # async fn run() -> linetap::Result<()> {
//! let file = PcapFile::create("ppp.pcap").await?;
//! let (sink, sink_task) = spawn_sink(file);
//!
//! let dte = transport::open("/dev/ttyS0", 115200)?;
//! tokio::spawn(StreamPump::new(dte, Direction::Incoming, sink.clone()).run());
//! # drop(sink);
//! # sink_task.await??;
//! # Ok(())
//! # }
//! ```

pub mod capture;
pub mod error;
pub mod framing;
pub mod pump;
pub mod transport;

pub use capture::{CaptureRecord, CaptureSink, Direction, PcapFile, Timestamp};
pub use error::{Result, TapError};
pub use framing::{FrameBuffer, RawFrame};
pub use pump::StreamPump;
