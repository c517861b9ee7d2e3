use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::constants::{BLOCK_BYTES, BLOCK_CHARS};
use crate::error::{Error, Result};

/// One share as produced by a `SecretSharingProvider`.
///
/// The token is URL-safe base64 text made of 44 character blocks, each carrying 33 raw bytes. The
/// codec never interprets the bytes, it only moves them between the alphabet and words.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ShareToken(String);

impl ShareToken {
    /// Wraps already encoded token text.
    pub fn new(text: impl Into<String>) -> Self {
        ShareToken(text.into())
    }

    /// Encodes raw token bytes. The length has to be a whole number of blocks.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() || bytes.len() % BLOCK_BYTES != 0 {
            return Err(Error::MalformedToken(format!(
                "{} bytes is not a whole number of {BLOCK_BYTES} byte blocks",
                bytes.len()
            )));
        }
        Ok(ShareToken(encode_block(bytes)))
    }

    /// Decodes the whole token back into raw bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(self.0.len() / BLOCK_CHARS * BLOCK_BYTES);
        for block in self.blocks()? {
            bytes.extend(decode_block(block)?);
        }
        Ok(bytes)
    }

    /// Splits the token into its 44 character blocks.
    pub fn blocks(&self) -> Result<Vec<&str>> {
        if self.0.is_empty() || self.0.len() % BLOCK_CHARS != 0 || !self.0.is_ascii() {
            return Err(Error::MalformedToken(format!(
                "length {} is not a whole number of {BLOCK_CHARS} character blocks",
                self.0.len()
            )));
        }
        Ok((0..self.0.len())
            .step_by(BLOCK_CHARS)
            .map(|start| &self.0[start..start + BLOCK_CHARS])
            .collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Token text is share material, keep it out of debug output.
impl fmt::Debug for ShareToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShareToken({} chars)", self.0.len())
    }
}

impl fmt::Display for ShareToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ShareToken {
    fn from(text: String) -> Self {
        ShareToken(text)
    }
}

/// Decodes one 44 character block into its 33 raw bytes.
pub fn decode_block(block: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(block)
        .map_err(|err| Error::MalformedToken(err.to_string()))
}

/// Encodes raw bytes into the token alphabet.
pub fn encode_block(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_sizes_line_up() {
        let raw: Vec<u8> = (0..=255u8).cycle().take(BLOCK_BYTES * 3).collect();
        let token = ShareToken::from_bytes(&raw).unwrap();

        assert_eq!(token.len(), BLOCK_CHARS * 3);
        let blocks = token.blocks().unwrap();
        assert_eq!(blocks.len(), 3);
        for (i, block) in blocks.iter().enumerate() {
            let bytes = decode_block(block).unwrap();
            assert_eq!(bytes.as_slice(), &raw[i * BLOCK_BYTES..(i + 1) * BLOCK_BYTES]);
        }
        assert_eq!(token.to_bytes().unwrap(), raw);
    }

    #[test]
    fn test_partial_blocks_are_rejected() {
        assert!(matches!(
            ShareToken::from_bytes(&[1u8; 32]),
            Err(Error::MalformedToken(_))
        ));
        assert!(matches!(
            ShareToken::from_bytes(&[]),
            Err(Error::MalformedToken(_))
        ));
        assert!(matches!(
            ShareToken::new("abc").blocks(),
            Err(Error::MalformedToken(_))
        ));
    }

    #[test]
    fn test_invalid_alphabet_is_rejected() {
        let token = ShareToken::new("!".repeat(BLOCK_CHARS));
        assert!(matches!(token.to_bytes(), Err(Error::MalformedToken(_))));
    }

    #[test]
    fn test_debug_hides_token_text() {
        let token = ShareToken::from_bytes(&[7u8; BLOCK_BYTES]).unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains(token.as_str()));
        assert_eq!(token.to_string(), token.as_str());
    }
}
