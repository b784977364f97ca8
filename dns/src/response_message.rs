use crate::header::Header;
use crate::question::Question;
use crate::resource_record::ResourceRecord;
use std::io::Cursor;

/// A decoded upstream response.
#[derive(Debug)]
pub struct ResponseMessage {
    header: Header,
    question: Option<Question>,
    answer_records: Vec<ResourceRecord>,
}

impl ResponseMessage {
    pub fn parse_response(response: &[u8]) -> std::io::Result<Self> {
        let mut reader = Cursor::new(response);

        let header = Header::parse_from_reader(&mut reader)?;

        let question = if header.qd_count() == 1 {
            Some(Question::parse_from_reader(&mut reader)?)
        } else {
            None
        };

        let count = header.answer_count() as usize;
        let mut answer_records: Vec<ResourceRecord> = Vec::with_capacity(count);
        for _ in 0..header.answer_count() {
            let record = ResourceRecord::parse_from_reader(&mut reader)?;
            answer_records.push(record);
        }

        let msg = Self {
            header,
            question,
            answer_records,
        };

        Ok(msg)
    }

    /// The first A answer carrying a 4-byte address, if any. Upstream
    /// responses can interleave CNAME and AAAA records; those are skipped.
    pub fn first_v4_address(&self) -> Option<[u8; 4]> {
        self.answer_records.iter().find_map(|r| r.v4_address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A response for apple.com with a CNAME followed by an A record, names
    // compressed the way recursors actually send them.
    fn sample_response() -> Vec<u8> {
        let mut bytes: Vec<u8> = vec![
            0xD1, 0xB7, 0x81, 0x80, 0, 1, 0, 2, 0, 0, 0, 0, // header
            5, 97, 112, 112, 108, 101, 3, 99, 111, 109, 0, // apple.com
            0, 1, 0, 1, // qtype, qclass
        ];

        // CNAME answer pointing at the question name.
        bytes.extend_from_slice(&[0xC0, 0x0C, 0, 5, 0, 1, 0, 0, 0, 60, 0, 2, 0xC0, 0x0C]);

        // A answer.
        bytes.extend_from_slice(&[0xC0, 0x0C, 0, 1, 0, 1, 0, 0, 0, 60, 0, 4, 17, 253, 144, 10]);

        bytes
    }

    #[test]
    fn picks_the_first_a_record() {
        let msg = ResponseMessage::parse_response(&sample_response()).unwrap();

        assert_eq!(Some([17, 253, 144, 10]), msg.first_v4_address());
    }

    #[test]
    fn no_answers_means_no_address() {
        let response = [
            0xD1, 0xB7, 0x81, 0x83, 0, 1, 0, 0, 0, 0, 0, 0, // header, rcode 3
            2, 122, 122, 0, // zz
            0, 1, 0, 1,
        ];

        let msg = ResponseMessage::parse_response(&response).unwrap();
        assert_eq!(None, msg.first_v4_address());
    }
}
