use std::path::Path;

use chrono::{DateTime, Utc};
use log::warn;
use pcap::{Capture, Offline, PacketHeader};

use crate::error::ScanError;

/// A packet copied out of the capture together with its record timestamp.
#[derive(Debug, Clone)]
pub struct CapturedPacket {
    pub data: Vec<u8>,
    pub timestamp: DateTime<Utc>,
}

/// Offline reader over a libpcap savefile.
///
/// Yields packets until the file is exhausted. The underlying handle is
/// closed when the reader is dropped.
pub struct OfflineCapture {
    cap: Capture<Offline>,
}

impl OfflineCapture {
    pub fn open(path: &Path) -> Result<Self, ScanError> {
        let cap = Capture::from_file(path).map_err(|source| ScanError::CaptureOpen {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self { cap })
    }
}

impl Iterator for OfflineCapture {
    type Item = CapturedPacket;

    fn next(&mut self) -> Option<CapturedPacket> {
        match self.cap.next_packet() {
            Ok(packet) => Some(CapturedPacket {
                data: packet.data.to_vec(),
                timestamp: header_timestamp(packet.header),
            }),
            Err(pcap::Error::NoMorePackets) => None,
            Err(e) => {
                // A damaged record ends the capture.
                warn!("Stopping capture read: {e}");
                None
            }
        }
    } // next
}

fn header_timestamp(header: &PacketHeader) -> DateTime<Utc> {
    record_timestamp(header.ts.tv_sec as i64, header.ts.tv_usec as i64)
}

/// Converts a record's seconds + microseconds into UTC, falling back to the
/// epoch when chrono cannot represent it.
fn record_timestamp(secs: i64, usecs: i64) -> DateTime<Utc> {
    let nanos = u32::try_from(usecs).unwrap_or(0).saturating_mul(1_000);
    DateTime::from_timestamp(secs, nanos).unwrap_or_else(|| {
        warn!("Record timestamp {secs}.{usecs:06} out of range, using epoch");
        DateTime::default()
    })
}
