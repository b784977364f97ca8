use crate::header::Header;
use crate::utils::parse_labels;
use std::io::{self, Cursor};

pub const HEADER_SIZE: usize = 12;

/// A query received by the server: the header plus the labels of the single
/// question name.
#[derive(Debug)]
pub struct InboundQuery {
    header: Header,
    labels: Vec<String>,
}

impl InboundQuery {
    /// Decode an inbound request. Every failure here is a per-request
    /// condition: the caller logs it and drops the packet, it never aborts
    /// the process.
    pub fn parse(request: &[u8]) -> io::Result<Self> {
        if request.len() < HEADER_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("packet too short for a DNS header: {} bytes", request.len()),
            ));
        }

        let mut reader = Cursor::new(request);
        let header = Header::parse_from_reader(&mut reader)?;

        // One question per message. Anything else gets no reply at all, and
        // the name is not parsed.
        if header.qd_count() != 1 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("expected exactly one question, got {}", header.qd_count()),
            ));
        }

        let (labels, _consumed) = parse_labels(&request[HEADER_SIZE..])?;

        Ok(Self { header, labels })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn name(&self) -> String {
        self.labels.join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_for(name: &[&str]) -> Vec<u8> {
        let mut bytes: Vec<u8> = vec![0x12, 0x34, 0x01, 0x00, 0, 1, 0, 0, 0, 0, 0, 0];
        for label in name {
            bytes.push(label.len() as u8);
            bytes.extend_from_slice(label.as_bytes());
        }
        bytes.extend_from_slice(&[0, 0, 1, 0, 1]);

        bytes
    }

    #[test]
    fn parses_a_single_question() {
        let request = request_for(&["apple", "river", "cloud"]);

        let query = InboundQuery::parse(&request).unwrap();
        assert_eq!(0x1234, query.header().id());
        assert_eq!(1, query.header().qd_count());
        assert_eq!("apple.river.cloud", query.name());
    }

    #[test]
    fn rejects_more_than_one_question() {
        let mut request = request_for(&["apple", "river", "cloud"]);
        request[5] = 2;

        assert!(InboundQuery::parse(&request).is_err());
    }

    #[test]
    fn rejects_zero_questions() {
        let mut request = request_for(&["apple"]);
        request[5] = 0;

        assert!(InboundQuery::parse(&request).is_err());
    }

    #[test]
    fn rejects_short_packets() {
        assert!(InboundQuery::parse(&[]).is_err());
        assert!(InboundQuery::parse(&[0x12, 0x34, 0x01]).is_err());
    }

    #[test]
    fn rejects_truncated_labels() {
        let mut request = request_for(&["apple"]);
        // Claim a label longer than what is left in the packet.
        request[12] = 60;

        assert!(InboundQuery::parse(&request).is_err());
    }
}
