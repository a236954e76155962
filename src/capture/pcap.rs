//! pcap file format and the on-disk capture file.
//!
//! The classic pcap format is simple enough to write by hand, which
//! also keeps the byte layout bit-exact for Wireshark/tshark:
//!
//! ```text
//! global header (24 bytes, once):
//! ┌────────┬───────┬───────┬──────────┬─────────┬─────────┬──────────┐
//! │ magic  │ major │ minor │ thiszone │ sigfigs │ snaplen │ linktype │
//! │ 4B     │ 2B    │ 2B    │ 4B       │ 4B      │ 4B      │ 4B       │
//! └────────┴───────┴───────┴──────────┴─────────┴─────────┴──────────┘
//! per record (16-byte header + captured bytes):
//! ┌────────┬─────────┬──────────┬──────────┬────────┬─────────┐
//! │ ts sec │ ts usec │ incl len │ orig len │ dirmark│ payload │
//! │ 4B     │ 4B      │ 4B       │ 4B       │ 1B     │ N bytes │
//! └────────┴─────────┴──────────┴──────────┴────────┴─────────┘
//! ```
//!
//! All fields little-endian. Linktype 204 (PPP with direction) is what
//! makes the one-byte direction marker ahead of each payload meaningful
//! to generic packet-analysis tooling.
//!
//! Useful resources:
//! * https://wiki.wireshark.org/Development/LibpcapFileFormat
//! * https://www.tcpdump.org/linktypes.html

use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::error::Result;

use super::record::CaptureRecord;

/// pcap magic number (written little-endian).
pub const PCAP_MAGIC: u32 = 0xA1B2_C3D4;

/// Format version: 2.4, the only one in the wild.
pub const VERSION_MAJOR: u16 = 2;
/// Format minor version.
pub const VERSION_MINOR: u16 = 4;

/// Snapshot length cap. Nothing is ever truncated; 65535 is the
/// conventional "whole packet" value.
pub const SNAPLEN: u32 = 65535;

/// Linktype 204: PPP with a one-byte direction marker per packet.
pub const LINKTYPE_PPP_WITH_DIR: u32 = 204;

/// Size of the one-time global header.
pub const GLOBAL_HEADER_SIZE: usize = 24;

/// Size of the fixed header ahead of each record's bytes.
pub const RECORD_HEADER_SIZE: usize = 16;

/// Encode the one-time global header.
pub(crate) fn encode_global_header() -> [u8; GLOBAL_HEADER_SIZE] {
    let mut header = [0u8; GLOBAL_HEADER_SIZE];
    header[0..4].copy_from_slice(&PCAP_MAGIC.to_le_bytes());
    header[4..6].copy_from_slice(&VERSION_MAJOR.to_le_bytes());
    header[6..8].copy_from_slice(&VERSION_MINOR.to_le_bytes());
    // thiszone and sigfigs stay zero, as every writer sets them.
    header[16..20].copy_from_slice(&SNAPLEN.to_le_bytes());
    header[20..24].copy_from_slice(&LINKTYPE_PPP_WITH_DIR.to_le_bytes());
    header
}

/// Encode one record: 16-byte header, direction marker, payload.
///
/// Included and original length are identical; this writer never
/// truncates.
pub(crate) fn encode_record(record: &CaptureRecord) -> Vec<u8> {
    let captured_len = record.captured_len();
    let mut encoded = Vec::with_capacity(RECORD_HEADER_SIZE + captured_len as usize);
    encoded.extend_from_slice(&record.timestamp.sec.to_le_bytes());
    encoded.extend_from_slice(&record.timestamp.usec.to_le_bytes());
    encoded.extend_from_slice(&captured_len.to_le_bytes());
    encoded.extend_from_slice(&captured_len.to_le_bytes());
    encoded.push(record.direction.marker());
    encoded.extend_from_slice(&record.payload);
    encoded
}

/// The on-disk capture file.
///
/// Created once with its global header, then append-only. Each append
/// runs a full open/write/close cycle, so a crash can damage at most
/// one record. `PcapFile` itself is not synchronized; concurrent
/// producers go through [`CaptureSink`](super::CaptureSink), which
/// serializes appends in a single writer task.
#[derive(Debug)]
pub struct PcapFile {
    path: PathBuf,
}

impl PcapFile {
    /// Create (or truncate) the capture file and write the global
    /// header.
    pub async fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut file = tokio::fs::File::create(&path).await?;
        file.write_all(&encode_global_header()).await?;
        file.flush().await?;
        Ok(Self { path })
    }

    /// Append one record.
    ///
    /// The record is assembled in memory and written with a single
    /// `write_all`, then the file is closed again.
    pub async fn append(&mut self, record: &CaptureRecord) -> Result<()> {
        let encoded = encode_record(record);
        let mut file = OpenOptions::new().append(true).open(&self.path).await?;
        file.write_all(&encoded).await?;
        file.flush().await?;
        Ok(())
    }

    /// Path of the capture file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::super::record::{Direction, Timestamp};
    use super::*;

    fn record(direction: Direction, payload: &[u8]) -> CaptureRecord {
        CaptureRecord {
            timestamp: Timestamp {
                sec: 0x0102_0304,
                usec: 0x0005_0607,
            },
            direction,
            payload: Bytes::copy_from_slice(payload),
        }
    }

    #[test]
    fn test_global_header_layout() {
        let header = encode_global_header();
        let expected: [u8; GLOBAL_HEADER_SIZE] = [
            0xD4, 0xC3, 0xB2, 0xA1, // magic, little-endian
            0x02, 0x00, // version major = 2
            0x04, 0x00, // version minor = 4
            0x00, 0x00, 0x00, 0x00, // thiszone = 0
            0x00, 0x00, 0x00, 0x00, // sigfigs = 0
            0xFF, 0xFF, 0x00, 0x00, // snaplen = 65535
            0xCC, 0x00, 0x00, 0x00, // linktype = 204
        ];
        assert_eq!(header, expected);
    }

    #[test]
    fn test_record_layout() {
        let encoded = encode_record(&record(Direction::Outgoing, &[0xAA, 0xBB, 0xCC]));
        let expected: &[u8] = &[
            0x04, 0x03, 0x02, 0x01, // ts sec
            0x07, 0x06, 0x05, 0x00, // ts usec
            0x04, 0x00, 0x00, 0x00, // incl len = payload + marker
            0x04, 0x00, 0x00, 0x00, // orig len, identical
            0x01, // direction marker: outgoing
            0xAA, 0xBB, 0xCC, // payload
        ];
        assert_eq!(encoded, expected);
    }

    #[test]
    fn test_record_marker_incoming() {
        let encoded = encode_record(&record(Direction::Incoming, &[0x42]));
        assert_eq!(encoded[RECORD_HEADER_SIZE], 0);
        assert_eq!(encoded.len(), RECORD_HEADER_SIZE + 2);
    }

    #[tokio::test]
    async fn test_create_truncates_and_appends_accumulate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tap.pcap");

        let mut file = PcapFile::create(&path).await.unwrap();
        file.append(&record(Direction::Incoming, &[1, 2, 3])).await.unwrap();
        file.append(&record(Direction::Outgoing, &[4, 5])).await.unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(
            bytes.len(),
            GLOBAL_HEADER_SIZE + (RECORD_HEADER_SIZE + 4) + (RECORD_HEADER_SIZE + 3)
        );
        assert_eq!(&bytes[..4], &[0xD4, 0xC3, 0xB2, 0xA1]);

        // Re-creating starts the file over.
        let _file = PcapFile::create(&path).await.unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), GLOBAL_HEADER_SIZE);
    }
}
