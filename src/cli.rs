use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::error::ScanError;

/// onion-dns-scan - find DNS queries for .onion names in a capture file
#[derive(Parser, Debug)]
#[command(
    name = "onion-dns-scan",
    version,
    about = "Print timestamp,name for every .onion DNS question in a pcap file"
)]
pub struct CliArgs {
    /// Pcap file to analyse.
    #[arg(long, value_name = "FILE", allow_hyphen_values = true)]
    pub pcap: Option<String>,
}

impl CliArgs {
    /// Parses the process arguments, accepting the single-dash `-pcap` form.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// The capture path, or a configuration error when it is missing or empty.
    pub fn capture_path(&self) -> Result<PathBuf, ScanError> {
        match self.pcap.as_deref() {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => Err(ScanError::Configuration(
                "No pcap file given.  Use the -pcap argument.".to_string(),
            )),
        }
    }
}

/// Rewrites `-pcap` and `-pcap=FILE` to their double-dash spelling.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-pcap") => OsString::from("--pcap"),
            Some(s) if s.starts_with("-pcap=") => OsString::from(format!("-{s}")),
            _ => arg,
        })
        .collect()
}
