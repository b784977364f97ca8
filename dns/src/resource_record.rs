use crate::utils::qname_to_domain;
use byteorder::{ReadBytesExt, BE};
use std::io::{BufRead, Cursor};

#[derive(Debug)]
pub struct ResourceRecord {
    domain: String,
    rtype: u16,
    rclass: u16,
    ttl: u32,
    rdlength: u16,
    pub rdata: Vec<u8>,
}

impl ResourceRecord {
    pub fn parse_from_reader(rdr: &mut Cursor<&[u8]>) -> std::io::Result<Self> {
        let first_byte = rdr.read_u8()?;

        let domain = if first_byte & 0xC0 == 0xC0 {
            // Compressed name: two-byte pointer back into the message.
            let second_byte = rdr.read_u8()?;
            let offset = (u64::from(first_byte & 0x3F) << 8) | u64::from(second_byte);

            let current_pos = rdr.position();

            rdr.set_position(offset);
            let mut name: Vec<u8> = Vec::new();
            rdr.read_until(0, &mut name)?;
            rdr.set_position(current_pos);

            qname_to_domain(&name)
        } else if first_byte == 0 {
            // Root name.
            String::new()
        } else {
            let mut name: Vec<u8> = vec![first_byte];
            rdr.read_until(0, &mut name)?;

            qname_to_domain(&name)
        };

        let rtype = rdr.read_u16::<BE>()?;
        let rclass = rdr.read_u16::<BE>()?;
        let ttl = rdr.read_u32::<BE>()?;
        let rdlength = rdr.read_u16::<BE>()?;

        let mut rdata: Vec<u8> = Vec::with_capacity(rdlength as usize);
        for _ in 0..rdlength {
            rdata.push(rdr.read_u8()?);
        }

        let record = Self {
            domain,
            rtype,
            rclass,
            ttl,
            rdlength,
            rdata,
        };

        Ok(record)
    }

    /// The record's address, when it is an A record with a 4-byte RDATA.
    pub fn v4_address(&self) -> Option<[u8; 4]> {
        if self.rtype != 1 || self.rdata.len() != 4 {
            return None;
        }

        Some([self.rdata[0], self.rdata[1], self.rdata[2], self.rdata[3]])
    }
}
