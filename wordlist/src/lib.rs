use std::collections::HashMap;

/// Number of words a full list carries: an 11-bit ordinal covers 0..2048.
pub const FULL_LIST_LEN: usize = 2048;

/// The ordered wordlist. Built once at startup, never mutated afterwards;
/// word order is significant, since a word's position *is* its ordinal.
#[derive(Debug)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    pub fn from_text(text: &str) -> Self {
        let words = text.lines().map(|line| line.to_string()).collect();

        Self { words }
    }

    pub fn word(&self, ordinal: u32) -> Option<&str> {
        self.words.get(ordinal as usize).map(|w| w.as_str())
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Word to ordinal map, so query handling doesn't scan the list per label.
/// Read-only after construction and safe to share across handlers.
#[derive(Debug)]
pub struct WordIndex {
    ordinals: HashMap<String, u32>,
}

impl WordIndex {
    pub fn new(list: &Wordlist) -> Self {
        let mut ordinals = HashMap::with_capacity(list.len());
        for (n, word) in list.words().iter().enumerate() {
            ordinals.insert(word.clone(), n as u32);
        }

        Self { ordinals }
    }

    pub fn ordinal(&self, word: &str) -> Option<u32> {
        self.ordinals.get(word).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_keeps_order() {
        let list = Wordlist::from_text("apple\nriver\ncloud\n");

        assert_eq!(3, list.len());
        assert_eq!(Some("apple"), list.word(0));
        assert_eq!(Some("river"), list.word(1));
        assert_eq!(Some("cloud"), list.word(2));
        assert_eq!(None, list.word(3));
    }

    #[test]
    fn index_maps_words_back_to_ordinals() {
        let list = Wordlist::from_text("apple\nriver\ncloud");
        let index = WordIndex::new(&list);

        assert_eq!(Some(0), index.ordinal("apple"));
        assert_eq!(Some(2), index.ordinal("cloud"));
        assert_eq!(None, index.ordinal("pear"));
    }
}
