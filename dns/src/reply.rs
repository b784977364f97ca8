use crate::header::Header;
use crate::query::InboundQuery;
use crate::utils::labels_to_qname;
use byteorder::{WriteBytesExt, BE};

const TYPE_A: u16 = 1;
const CLASS_IN: u16 = 1;

/// An authoritative reply carrying a single A record for the queried name.
pub struct ReplyMessage {
    header: Header,
    labels: Vec<String>,
    addr: u32,
}

impl ReplyMessage {
    pub fn new(query: &InboundQuery, addr: u32) -> Self {
        Self {
            header: Header::reply_to(query.header()),
            labels: query.labels().to_vec(),
            addr,
        }
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) -> std::io::Result<()> {
        self.header.to_bytes(bytes)?;

        // Question section, echoed back to the client.
        bytes.extend_from_slice(&labels_to_qname(&self.labels));
        bytes.write_u16::<BE>(TYPE_A)?;
        bytes.write_u16::<BE>(CLASS_IN)?;

        // Answer section. TTL stays zero so nothing caches these names.
        bytes.extend_from_slice(&labels_to_qname(&self.labels));
        bytes.write_u16::<BE>(TYPE_A)?;
        bytes.write_u16::<BE>(CLASS_IN)?;
        bytes.write_u32::<BE>(0)?;
        bytes.write_u16::<BE>(4)?;
        bytes.extend_from_slice(&self.addr.to_be_bytes());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_bytes(flags: [u8; 2]) -> Vec<u8> {
        let mut bytes: Vec<u8> = vec![0xBE, 0xEF, flags[0], flags[1], 0, 1, 0, 0, 0, 0, 0, 0];
        for label in &["one", "two", "six"] {
            bytes.push(label.len() as u8);
            bytes.extend_from_slice(label.as_bytes());
        }
        bytes.extend_from_slice(&[0, 0, 1, 0, 1]);

        bytes
    }

    #[test]
    fn to_bytes_test() {
        let request = query_bytes([0x01, 0x00]);
        let query = InboundQuery::parse(&request).unwrap();

        let mut bytes: Vec<u8> = vec![];
        let reply = ReplyMessage::new(&query, 0x0102_0304);
        reply.to_bytes(&mut bytes).unwrap();

        let expected = [
            0xBE, 0xEF, 0x84, 0x00, 0, 1, 0, 1, 0, 0, 0, 0, // header
            3, 111, 110, 101, 3, 116, 119, 111, 3, 115, 105, 120, 0, // one.two.six
            0, 1, 0, 1, // question qtype, qclass
            3, 111, 110, 101, 3, 116, 119, 111, 3, 115, 105, 120, 0, // answer name
            0, 1, 0, 1, // answer type, class
            0, 0, 0, 0, // TTL
            0, 4, // rdlength
            1, 2, 3, 4, // address
        ];
        assert_eq!(&expected[..], &bytes[..]);
    }

    #[test]
    fn copies_the_rd_bit_from_the_request() {
        let request = query_bytes([0x00, 0x02]);
        let query = InboundQuery::parse(&request).unwrap();

        let mut bytes: Vec<u8> = vec![];
        ReplyMessage::new(&query, 0).to_bytes(&mut bytes).unwrap();

        assert_eq!(0x86, bytes[2]);
    }
}
