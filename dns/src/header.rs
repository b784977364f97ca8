use byteorder::{ReadBytesExt, WriteBytesExt, BE};
use std::io::Cursor;

// https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.1
//
// 12 bytes on the wire.
#[derive(Debug)]
pub struct Header {
    id: u16,
    flags: u16,
    qdcount: u16,
    ancount: u16,
    nscount: u16,
    arcount: u16,
}

const FLAG_QR: u16 = 0x8000;
const FLAG_AA: u16 = 0x0400;
const FLAG_RD: u16 = 0x0100;

impl Header {
    /// Header for an outbound standard query. RD is set so the upstream
    /// recursor does the walking and one request is enough.
    pub fn query() -> Self {
        Self {
            id: 209 * 256 + 183,
            flags: FLAG_RD,
            qdcount: 1,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }

    /// Header for an authoritative reply carrying exactly one answer: QR and
    /// AA set, OPCODE/TC/RA/Z/RCODE all zero, transaction ID and the RD bit
    /// taken from the request (bit 1 of its low flag byte).
    pub fn reply_to(request: &Header) -> Self {
        let rd = (request.flags & 0x0002) << 8;

        Self {
            id: request.id,
            flags: FLAG_QR | FLAG_AA | rd,
            qdcount: 1,
            ancount: 1,
            nscount: 0,
            arcount: 0,
        }
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) -> std::io::Result<()> {
        bytes.write_u16::<BE>(self.id)?;
        bytes.write_u16::<BE>(self.flags)?;
        bytes.write_u16::<BE>(self.qdcount)?;
        bytes.write_u16::<BE>(self.ancount)?;
        bytes.write_u16::<BE>(self.nscount)?;
        bytes.write_u16::<BE>(self.arcount)?;

        Ok(())
    }

    pub fn parse_from_reader(rdr: &mut Cursor<&[u8]>) -> std::io::Result<Self> {
        let id = rdr.read_u16::<BE>()?;
        let flags = rdr.read_u16::<BE>()?;
        let qdcount = rdr.read_u16::<BE>()?;
        let ancount = rdr.read_u16::<BE>()?;
        let nscount = rdr.read_u16::<BE>()?;
        let arcount = rdr.read_u16::<BE>()?;

        let h = Self {
            id,
            flags,
            qdcount,
            ancount,
            nscount,
            arcount,
        };

        Ok(h)
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn flags(&self) -> u16 {
        self.flags
    }

    pub fn qd_count(&self) -> u16 {
        self.qdcount
    }

    pub fn answer_count(&self) -> u16 {
        self.ancount
    }
}
