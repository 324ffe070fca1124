use std::io::{self, BufWriter, Write};

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::capture::{CapturedPacket, OfflineCapture};
use crate::cli::CliArgs;
use crate::core::summary::{ScanSummary, log_scan_summary};
use crate::error::{MalformedPacket, ScanError};
use crate::onion::is_onion_domain;
use crate::packet::parse_packet;

/// Output timestamp layout, e.g. `2017-03-01.14:22:05`.
pub const TIME_LAYOUT: &str = "%Y-%m-%d.%H:%M:%S";

/// Opens the capture named on the command line and prints every onion
/// question to stdout.
pub fn run(args: &CliArgs) -> Result<ScanSummary, ScanError> {
    let path = args.capture_path()?;
    let capture = OfflineCapture::open(&path)?;
    debug!("Scanning {}", path.display());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = scan(capture, &mut out)?;
    out.flush()?;

    log_scan_summary(&summary);
    Ok(summary)
} // run

/// Runs the question matcher over `packets`, writing one line per match.
///
/// Packets that are too short or fail DNS decoding are logged with their
/// 1-based index and skipped. Only write errors stop the scan.
pub fn scan<I, W>(packets: I, out: &mut W) -> io::Result<ScanSummary>
where
    I: IntoIterator<Item = CapturedPacket>,
    W: Write,
{
    let mut summary = ScanSummary::default();

    for (counter, packet) in (1..).zip(packets) {
        summary.packets += 1;

        let questions = match parse_packet(&packet.data) {
            Ok(questions) => questions,
            Err(e) => {
                warn!("{}", skip_notice(counter, &e));
                summary.skipped += 1;
                continue;
            }
        };

        for question in questions.iter().filter(|q| is_onion_domain(&q.name)) {
            debug!("Packet #{counter}: onion question {question}");
            writeln!(out, "{}", format_match(&packet.timestamp, &question.name))?;
            summary.matches += 1;
        }
    }

    Ok(summary)
} // scan

pub fn format_match(timestamp: &DateTime<Utc>, name: &str) -> String {
    format!("{},{}", timestamp.format(TIME_LAYOUT), name)
}

fn skip_notice(counter: usize, err: &MalformedPacket) -> String {
    format!("Packet #{counter}: {err}")
}
