use crate::dictionary::Dictionary;
use crate::error::{Error, Result};

/// Maps single bytes to dictionary words and back.
#[derive(Debug, Clone, Copy)]
pub struct ByteWordCodec<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> ByteWordCodec<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        ByteWordCodec { dictionary }
    }

    /// Returns the word for a byte. Every byte value has one.
    pub fn encode(&self, byte: u8) -> &'a str {
        self.dictionary.word_at(byte)
    }

    /// Returns the byte for a word.
    ///
    /// # Errors
    ///
    /// `Error::UnknownWord` if the word is not in the dictionary. `line` is only used to locate the
    /// word in the error.
    pub fn decode(&self, word: &str, line: usize) -> Result<u8> {
        self.dictionary
            .index_of(word)
            .ok_or_else(|| Error::UnknownWord {
                word: word.to_string(),
                line,
            })
    }

    /// Encodes a run of bytes as space separated words.
    pub fn encode_line(&self, bytes: &[u8]) -> String {
        bytes
            .iter()
            .map(|&byte| self.encode(byte))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Decodes a line of whitespace separated words.
    pub fn decode_line(&self, line: &str, line_number: usize) -> Result<Vec<u8>> {
        line.split_whitespace()
            .map(|word| self.decode(word, line_number))
            .collect()
    }
}
