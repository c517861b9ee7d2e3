use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::constants::DICTIONARY_WORDS;
use crate::error::{Error, Result};

/// An ordered word list used as a 256 symbol alphabet.
///
/// Only the first 256 words are used, one per byte value. The reverse lookup is built once when the
/// dictionary is loaded, so it always matches the forward list.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    indices: HashMap<String, u8>,
    lines: usize,
}

impl Dictionary {
    /// Loads a dictionary from a newline separated word list on disk.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read, `Error::DictionaryTooSmall` if it has fewer
    /// than 256 lines and `Error::InvalidDictionary` if one of the used words is empty, contains
    /// whitespace or repeats an earlier word.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let dictionary = Self::parse(&content)?;
        debug!(
            "📖 Loaded dictionary {:?} ({} lines, {} used)",
            path,
            dictionary.lines,
            DICTIONARY_WORDS
        );
        Ok(dictionary)
    }

    /// Builds a dictionary from newline separated word list content.
    pub fn parse(content: &str) -> Result<Self> {
        let lines: Vec<&str> = content.lines().collect();
        if lines.len() < DICTIONARY_WORDS {
            return Err(Error::DictionaryTooSmall { found: lines.len() });
        }

        let mut words = Vec::with_capacity(DICTIONARY_WORDS);
        let mut indices = HashMap::with_capacity(DICTIONARY_WORDS);

        for (index, line) in lines.iter().take(DICTIONARY_WORDS).enumerate() {
            let word = line.trim();
            if word.is_empty() {
                return Err(Error::InvalidDictionary {
                    index,
                    reason: "word is empty".to_string(),
                });
            }
            if word.chars().any(char::is_whitespace) {
                return Err(Error::InvalidDictionary {
                    index,
                    reason: format!("{word:?} contains whitespace"),
                });
            }
            if let Some(first) = indices.insert(word.to_string(), index as u8) {
                return Err(Error::InvalidDictionary {
                    index,
                    reason: format!("{word:?} already appears at index {first}"),
                });
            }
            words.push(word.to_string());
        }

        Ok(Dictionary {
            words,
            indices,
            lines: lines.len(),
        })
    }

    /// Returns the word standing for `byte`.
    pub fn word_at(&self, byte: u8) -> &str {
        &self.words[byte as usize]
    }

    /// Returns the byte a word stands for, or `None` if the word is not one of the 256 used words.
    pub fn index_of(&self, word: &str) -> Option<u8> {
        self.indices.get(word).copied()
    }

    /// Number of lines in the source, including the ones past the 256 that are used.
    pub fn len(&self) -> usize {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }
}

impl FromStr for Dictionary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Dictionary::parse(s)
    }
}

/// Word list `w0`..`w{count - 1}`, one per line.
#[cfg(test)]
pub(crate) fn numbered_words(count: usize) -> String {
    (0..count)
        .map(|i| format!("w{i}"))
        .collect::<Vec<_>>()
        .join("\n")
}
