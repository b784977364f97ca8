use crate::header::Header;
use crate::question::Question;

/// An outbound standard query, used when translating a conventional domain.
pub struct RequestMessage {
    header: Header,
    question: Question,
}

impl RequestMessage {
    pub fn new(domain: &str) -> Self {
        let header = Header::query();
        let question = Question::new(domain);

        Self { header, question }
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) -> std::io::Result<()> {
        self.header.to_bytes(bytes)?;
        self.question.to_bytes(bytes)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_bytes_test() {
        let mut bytes: Vec<u8> = vec![];

        let msg = RequestMessage::new("example.com");
        msg.to_bytes(&mut bytes).unwrap();

        let expected = [
            209, 183, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, // header
            7, 101, 120, 97, 109, 112, 108, 101, // example
            3, 99, 111, 109, // com
            0, 0, 1, 0, 1, // terminator, qtype, qclass
        ];

        for (i, b) in bytes.iter().enumerate() {
            assert_eq!(*b, expected[i]);
        }
    }
}
