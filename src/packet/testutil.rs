// Builders for DNS queries, Ethernet frames and libpcap files used in tests,
// plus a thread-local log recorder.

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};
use trust_dns_proto::op::{Message, MessageType, OpCode, Query};
use trust_dns_proto::rr::{Name, RecordType};

use super::HEADER_OFFSET;

pub fn dns_query(names: &[&str]) -> Vec<u8> {
    let mut message = Message::new();
    message
        .set_id(0x1234)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    for name in names {
        message.add_query(Query::query(Name::from_ascii(name).unwrap(), RecordType::A));
    }
    message.to_vec().unwrap()
}

/// Wraps a DNS payload in Ethernet + IPv4 (no options) + UDP headers.
pub fn udp_frame(dns: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(HEADER_OFFSET + dns.len());

    // Ethernet
    frame.extend_from_slice(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
    frame.extend_from_slice(&[0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb]);
    frame.extend_from_slice(&0x0800u16.to_be_bytes());

    // IPv4
    let ip_len = (20 + 8 + dns.len()) as u16;
    frame.extend_from_slice(&[0x45, 0x00]);
    frame.extend_from_slice(&ip_len.to_be_bytes());
    frame.extend_from_slice(&[0x00, 0x00, 0x40, 0x00, 0x40, 17, 0x00, 0x00]);
    frame.extend_from_slice(&[192, 168, 1, 10]);
    frame.extend_from_slice(&[192, 168, 1, 1]);

    // UDP
    let udp_len = (8 + dns.len()) as u16;
    frame.extend_from_slice(&40000u16.to_be_bytes());
    frame.extend_from_slice(&53u16.to_be_bytes());
    frame.extend_from_slice(&udp_len.to_be_bytes());
    frame.extend_from_slice(&[0x00, 0x00]);

    frame.extend_from_slice(dns);
    frame
}

/// Encodes a little-endian libpcap savefile with Ethernet link type.
/// Each record is `(seconds, microseconds, frame)`.
pub fn pcap_file(records: &[(u32, u32, &[u8])]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&0xa1b2_c3d4u32.to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&4u16.to_le_bytes());
    out.extend_from_slice(&0i32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&65535u32.to_le_bytes());
    out.extend_from_slice(&1u32.to_le_bytes());

    for (secs, usecs, frame) in records {
        out.extend_from_slice(&secs.to_le_bytes());
        out.extend_from_slice(&usecs.to_le_bytes());
        out.extend_from_slice(&(frame.len() as u32).to_le_bytes());
        out.extend_from_slice(&(frame.len() as u32).to_le_bytes());
        out.extend_from_slice(frame);
    }
    out
}

/// Writes `bytes` to a per-process file under the system temp directory.
pub fn write_temp(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "onion-dns-scan-{}-{}",
        std::process::id(),
        name
    ));
    std::fs::write(&path, bytes).unwrap();
    path
}

thread_local! {
    static RECORDED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct RecordingLogger;

impl Log for RecordingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDED.with(|r| r.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static LOGGER: RecordingLogger = RecordingLogger;
static LOGGER_INIT: Once = Once::new();

/// Runs `f` and returns the warn-level messages it logged on this thread.
pub fn record_warnings<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    LOGGER_INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });

    RECORDED.with(|r| r.borrow_mut().clear());
    let result = f();
    let warnings = RECORDED.with(|r| {
        r.borrow_mut()
            .drain(..)
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, message)| message)
            .collect()
    });
    (result, warnings)
} // record_warnings
