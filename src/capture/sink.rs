//! Shared capture sink backed by a dedicated writer task.
//!
//! Both stream pumps append records to one capture file. Rather than
//! exposing a lock, the sink routes every record through an mpsc
//! channel into a single writer task that owns the [`PcapFile`]:
//!
//! ```text
//! DTE pump ─┐
//!           ├─► mpsc::Sender<CaptureRecord> ─► writer task ─► pcap file
//! DCE pump ─┘
//! ```
//!
//! The single consumer serializes appends, so no interleaving of two
//! records' bytes is possible. Per-pump ordering is preserved by the
//! channel; cross-pump ordering is whatever the channel sees, which is
//! the same guarantee a mutex held across the write would give.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::{Result, TapError};

use super::pcap::PcapFile;
use super::record::CaptureRecord;

/// Channel capacity. A bounded channel makes `append` apply
/// backpressure instead of queueing without limit while the disk
/// stalls.
const SINK_CHANNEL_CAPACITY: usize = 256;

/// Handle for appending records to the shared capture file.
///
/// Cheaply cloneable; one clone lives in each pump.
#[derive(Debug, Clone)]
pub struct CaptureSink {
    tx: mpsc::Sender<CaptureRecord>,
}

impl CaptureSink {
    /// Append a record to the capture file.
    ///
    /// Waits when the writer task is saturated. Fails with
    /// [`TapError::SinkClosed`] once the writer task has terminated,
    /// which only happens after a file write failed.
    pub async fn append(&self, record: CaptureRecord) -> Result<()> {
        self.tx
            .send(record)
            .await
            .map_err(|_| TapError::SinkClosed)
    }
}

/// Spawn the writer task and return a handle for appending records.
///
/// The task exits cleanly when every [`CaptureSink`] clone has been
/// dropped, or with an error when an append to the file fails (a fatal
/// condition for the process). The returned `JoinHandle` reports
/// either outcome.
pub fn spawn_sink(file: PcapFile) -> (CaptureSink, JoinHandle<Result<()>>) {
    let (tx, rx) = mpsc::channel(SINK_CHANNEL_CAPACITY);
    let task = tokio::spawn(sink_loop(rx, file));
    (CaptureSink { tx }, task)
}

/// Writer loop: drain the channel, append one record at a time.
async fn sink_loop(mut rx: mpsc::Receiver<CaptureRecord>, mut file: PcapFile) -> Result<()> {
    while let Some(record) = rx.recv().await {
        file.append(&record).await?;
    }
    // All senders dropped: clean shutdown.
    Ok(())
}
