//! Capture module - record building and pcap persistence.
//!
//! This module owns everything downstream of frame extraction:
//! - Direction tags and timestamps
//! - Building a capture record from a raw frame (unescape + trim)
//! - The pcap file format and the shared, serialized capture sink

mod pcap;
mod record;
mod sink;

pub use pcap::{
    PcapFile, GLOBAL_HEADER_SIZE, LINKTYPE_PPP_WITH_DIR, PCAP_MAGIC, RECORD_HEADER_SIZE, SNAPLEN,
    VERSION_MAJOR, VERSION_MINOR,
};
pub use record::{CaptureRecord, Direction, Timestamp};
pub use sink::{spawn_sink, CaptureSink};
