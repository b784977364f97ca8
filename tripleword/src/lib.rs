use wordlist::{WordIndex, Wordlist};

const ORDINAL_MASK: u32 = 0x7FF;

/// Fold the labels of a queried name into an address, 11 bits per word with
/// the first label most significant. The `u32` shift discards whatever runs
/// past 32 bits; `addr_to_name` below mirrors that truncation, so the two
/// directions stay mutually consistent. `None` if any label is unknown —
/// there is no partial resolution.
pub fn name_to_addr(labels: &[String], index: &WordIndex) -> Option<u32> {
    let mut addr: u32 = 0;
    for label in labels {
        let ordinal = index.ordinal(label)?;
        addr = (addr << 11) | ordinal;
    }

    Some(addr)
}

/// Map an address back to its dotted three-word name. `None` when the
/// wordlist is too short for one of the ordinals.
pub fn addr_to_name(addr: u32, words: &Wordlist) -> Option<String> {
    let first = (addr >> 22) & ORDINAL_MASK;
    let second = (addr >> 11) & ORDINAL_MASK;
    let third = addr & ORDINAL_MASK;

    Some(format!(
        "{}.{}.{}",
        words.word(first)?,
        words.word(second)?,
        words.word(third)?,
    ))
}
