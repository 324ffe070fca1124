use std::fmt;

use log::debug;

/// Counters collected over one pass of a capture.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub packets: usize,
    pub skipped: usize,
    pub matches: usize,
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} packets scanned, {} skipped, {} onion questions",
            self.packets, self.skipped, self.matches
        )
    }
}

/// Logs the end-of-run counters. Only visible at debug level so a normal
/// run stays silent on stderr.
pub fn log_scan_summary(summary: &ScanSummary) {
    debug!("Scan summary: {summary}");
}
