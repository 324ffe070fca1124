use std::io;

use thiserror::Error;
use trust_dns_proto::error::ProtoError;

/// Errors that end the scan before or while it runs.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("{0}")]
    Configuration(String),

    #[error("failed to open capture {path}: {source}")]
    CaptureOpen {
        path: String,
        #[source]
        source: pcap::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Per-packet failures. These are logged and the packet is skipped.
#[derive(Error, Debug)]
pub enum MalformedPacket {
    #[error("packet too short for fixed header ({len} bytes, need {need})")]
    TooShort { len: usize, need: usize },

    #[error("{0}")]
    Dns(#[from] ProtoError),
}
