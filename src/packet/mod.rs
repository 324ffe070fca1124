mod dns;
#[cfg(test)]
pub mod testutil;

pub use dns::*;

use crate::error::MalformedPacket;

pub const ETHERNET_HEADER_LEN: usize = 14;
pub const IPV4_HEADER_LEN: usize = 20;
pub const UDP_HEADER_LEN: usize = 8;

/// Fixed link + network + transport prefix in front of every DNS message.
/// IPv4 options are not supported.
pub const HEADER_OFFSET: usize = ETHERNET_HEADER_LEN + IPV4_HEADER_LEN + UDP_HEADER_LEN;

/// Returns the bytes after the fixed Ethernet/IPv4/UDP headers.
pub fn dns_payload(data: &[u8]) -> Result<&[u8], MalformedPacket> {
    data.get(HEADER_OFFSET..).ok_or(MalformedPacket::TooShort {
        len: data.len(),
        need: HEADER_OFFSET,
    })
}

/// Slices a raw frame and decodes its DNS question section.
pub fn parse_packet(data: &[u8]) -> Result<Vec<Question>, MalformedPacket> {
    parse_questions(dns_payload(data)?)
}
