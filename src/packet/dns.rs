use std::fmt;

use trust_dns_proto::op::Message;
use trust_dns_proto::rr::{DNSClass, RecordType};
use trust_dns_proto::serialize::binary::BinDecodable;

use crate::error::MalformedPacket;

/// One entry of a DNS question section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Presentation form; fully qualified names keep their trailing dot.
    pub name: String,
    pub query_type: RecordType,
    pub query_class: DNSClass,
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.query_class, self.query_type)
    }
}

/// Decodes a DNS wire-format message and returns its questions in order.
///
/// The whole message is decoded, so a truncated answer section fails the
/// packet even if the questions themselves are intact.
pub fn parse_questions(payload: &[u8]) -> Result<Vec<Question>, MalformedPacket> {
    let mut message = Message::from_bytes(payload)?;

    let questions = message
        .take_queries()
        .into_iter()
        .map(|query| Question {
            name: query.name().to_string(),
            query_type: query.query_type(),
            query_class: query.query_class(),
        })
        .collect();

    Ok(questions)
} // parse_questions
