use std::collections::HashMap;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::constants::{BLOCK_BYTES, BLOCK_CHARS, CHECKSUM_LEN, MAX_SECRET_LEN, MAX_SHARES};
use crate::error::{Error, Result};
use crate::sss::{combine_shares, split_secret};
use crate::token::ShareToken;

/// Threshold secret sharing as seen by the share workflow.
///
/// The workflow only moves tokens between text and the provider, so any scheme whose tokens are
/// whole 44 character blocks of the share alphabet can be plugged in here.
pub trait SecretSharingProvider {
    /// Splits `secret` into `total` tokens, any `threshold` of which recover it.
    ///
    /// # Errors
    ///
    /// `Error::SharingMath` if the parameters are invalid or splitting fails.
    fn split(&self, threshold: usize, total: usize, secret: &[u8]) -> Result<Vec<ShareToken>>;

    /// Recovers the secret from tokens of one split.
    ///
    /// # Errors
    ///
    /// `Error::InsufficientOrInvalidShares` if there are too few tokens or they do not belong
    /// together.
    fn combine(&self, tokens: &[ShareToken]) -> Result<Vec<u8>>;
}

/// Byte-wise Shamir sharing over GF(2^8).
///
/// # Token layout
///
/// ```text
/// x (1) | threshold (1) | share of: len (2, BE) | secret | sha256(secret)[..4] | zero padding
/// ```
///
/// The padding makes the raw token a whole number of 33 byte blocks. Length, secret and checksum
/// are all shared, so a single token only tells how many blocks the secret spans.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShamirProvider;

const HEADER_LEN: usize = 2;
const LENGTH_PREFIX: usize = 2;

impl ShamirProvider {
    pub fn new() -> Self {
        ShamirProvider
    }

    fn checksum(secret: &[u8]) -> [u8; CHECKSUM_LEN] {
        let digest = Sha256::digest(secret);
        let mut checksum = [0u8; CHECKSUM_LEN];
        checksum.copy_from_slice(&digest[..CHECKSUM_LEN]);
        checksum
    }

    fn plaintext(secret: &[u8]) -> Vec<u8> {
        let unpadded = HEADER_LEN + LENGTH_PREFIX + secret.len() + CHECKSUM_LEN;
        let padded = unpadded.div_ceil(BLOCK_BYTES) * BLOCK_BYTES;

        let mut plaintext = Vec::with_capacity(padded - HEADER_LEN);
        plaintext.extend_from_slice(&(secret.len() as u16).to_be_bytes());
        plaintext.extend_from_slice(secret);
        plaintext.extend_from_slice(&Self::checksum(secret));
        plaintext.resize(padded - HEADER_LEN, 0);
        plaintext
    }

    fn open(plaintext: &[u8]) -> Result<Vec<u8>> {
        let invalid = |reason: &str| Error::InsufficientOrInvalidShares(reason.to_string());

        if plaintext.len() < LENGTH_PREFIX + CHECKSUM_LEN {
            return Err(invalid("shares are too short"));
        }
        let len = u16::from_be_bytes([plaintext[0], plaintext[1]]) as usize;
        let end = LENGTH_PREFIX + len;
        if end + CHECKSUM_LEN > plaintext.len() {
            return Err(invalid("recovered length is out of range, not enough shares?"));
        }

        let secret = &plaintext[LENGTH_PREFIX..end];
        if plaintext[end..end + CHECKSUM_LEN] != Self::checksum(secret) {
            return Err(invalid("checksum mismatch, not enough shares or shares from different splits"));
        }
        Ok(secret.to_vec())
    }
}

impl SecretSharingProvider for ShamirProvider {
    fn split(&self, threshold: usize, total: usize, secret: &[u8]) -> Result<Vec<ShareToken>> {
        if threshold == 0 || threshold > total {
            return Err(Error::SharingMath(format!(
                "cannot split into {total} shares with a threshold of {threshold}"
            )));
        }
        if total > MAX_SHARES {
            return Err(Error::SharingMath(format!(
                "at most {MAX_SHARES} shares are supported, {total} requested"
            )));
        }
        if secret.len() > MAX_SECRET_LEN {
            return Err(Error::SharingMath(format!(
                "secrets are limited to {MAX_SECRET_LEN} bytes, got {}",
                secret.len()
            )));
        }

        let shares = split_secret(&Self::plaintext(secret), threshold, total)?;

        let mut tokens = Vec::with_capacity(total);
        for x in 1..=total as u8 {
            let share = shares
                .get(&x)
                .ok_or_else(|| Error::SharingMath(format!("share {x} is missing")))?;
            let mut raw = Vec::with_capacity(HEADER_LEN + share.len());
            raw.push(x);
            raw.push(threshold as u8);
            raw.extend_from_slice(share);
            let token =
                ShareToken::from_bytes(&raw).map_err(|err| Error::SharingMath(err.to_string()))?;
            tokens.push(token);
        }

        debug!(
            "✂️  Split secret into {} share(s), threshold {}, {} block(s) each",
            total,
            threshold,
            tokens[0].len() / BLOCK_CHARS
        );
        Ok(tokens)
    }

    fn combine(&self, tokens: &[ShareToken]) -> Result<Vec<u8>> {
        let invalid = |reason: String| Error::InsufficientOrInvalidShares(reason);

        if tokens.is_empty() {
            return Err(invalid("no shares given".to_string()));
        }

        let mut threshold = None;
        let mut shares_map: HashMap<u8, Vec<u8>> = HashMap::with_capacity(tokens.len());

        for (i, token) in tokens.iter().enumerate() {
            let raw = token
                .to_bytes()
                .map_err(|err| invalid(format!("share {}: {err}", i + 1)))?;
            let (x, t) = (raw[0], raw[1] as usize);

            if x == 0 || t == 0 {
                return Err(invalid(format!("share {} has an invalid header", i + 1)));
            }
            match threshold {
                None => threshold = Some(t),
                Some(expected) if expected != t => {
                    return Err(invalid(format!(
                        "share {} needs {t} shares, earlier ones need {expected}",
                        i + 1
                    )))
                }
                Some(_) => {}
            }
            if shares_map.insert(x, raw[HEADER_LEN..].to_vec()).is_some() {
                return Err(invalid(format!("share number {x} is given twice")));
            }
        }

        let threshold = threshold.unwrap_or(1);
        if shares_map.len() < threshold {
            return Err(invalid(format!(
                "{threshold} shares are needed, only {} given",
                shares_map.len()
            )));
        }

        let plaintext = combine_shares(&shares_map)?;
        let secret = Self::open(&plaintext)?;
        debug!("🔑 Combined {} share(s)", shares_map.len());
        Ok(secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_fits_one_block() {
        let tokens = ShamirProvider.split(2, 3, b"hello").unwrap();

        assert_eq!(tokens.len(), 3);
        for token in &tokens {
            assert_eq!(token.len(), BLOCK_CHARS);
        }
        assert_eq!(ShamirProvider.combine(&tokens[..2]).unwrap(), b"hello");
        assert_eq!(ShamirProvider.combine(&tokens[1..]).unwrap(), b"hello");
        assert_eq!(
            ShamirProvider
                .combine(&[tokens[2].clone(), tokens[0].clone()])
                .unwrap(),
            b"hello"
        );
        assert!(matches!(
            ShamirProvider.combine(&tokens[..1]),
            Err(Error::InsufficientOrInvalidShares(_))
        ));
    }

    #[test]
    fn test_every_subset_at_or_above_threshold() {
        let secret = b"correct horse battery staple";
        for total in 1..=6usize {
            for threshold in 1..=total {
                let tokens = ShamirProvider.split(threshold, total, secret).unwrap();
                for mask in 1u32..(1 << total) {
                    let subset: Vec<ShareToken> = (0..total)
                        .filter(|i| mask & (1 << i) != 0)
                        .map(|i| tokens[i].clone())
                        .collect();
                    let result = ShamirProvider.combine(&subset);
                    if subset.len() >= threshold {
                        assert_eq!(result.unwrap(), secret);
                    } else {
                        assert!(matches!(result, Err(Error::InsufficientOrInvalidShares(_))));
                    }
                }
            }
        }
    }

    #[test]
    fn test_long_secret_spans_blocks() {
        let secret = vec![0xA5u8; 100];
        let tokens = ShamirProvider.split(3, 4, &secret).unwrap();

        // 2 + 2 + 100 + 4 bytes rounds up to four blocks
        assert!(tokens.iter().all(|t| t.len() == 4 * BLOCK_CHARS));
        assert_eq!(ShamirProvider.combine(&tokens[1..]).unwrap(), secret);
    }

    #[test]
    fn test_empty_secret() {
        let tokens = ShamirProvider.split(2, 2, b"").unwrap();
        assert_eq!(ShamirProvider.combine(&tokens).unwrap(), b"");
    }

    #[test]
    fn test_invalid_split_parameters() {
        for (threshold, total) in [(0, 3), (4, 3), (2, 256)] {
            assert!(matches!(
                ShamirProvider.split(threshold, total, b"x"),
                Err(Error::SharingMath(_))
            ));
        }
        let huge = vec![0u8; MAX_SECRET_LEN + 1];
        assert!(matches!(
            ShamirProvider.split(2, 3, &huge),
            Err(Error::SharingMath(_))
        ));
    }

    #[test]
    fn test_mismatched_and_corrupted_shares() {
        let first = ShamirProvider.split(2, 3, b"first secret").unwrap();
        let second = ShamirProvider.split(2, 3, b"second secret").unwrap();

        // same x coordinate twice
        assert!(ShamirProvider
            .combine(&[first[0].clone(), second[0].clone()])
            .is_err());
        // shares from different splits
        assert!(ShamirProvider
            .combine(&[first[0].clone(), second[1].clone()])
            .is_err());

        // flip a byte of the shared payload
        let mut raw = first[1].to_bytes().unwrap();
        raw[5] ^= 0x01;
        let corrupted = ShareToken::from_bytes(&raw).unwrap();
        assert!(matches!(
            ShamirProvider.combine(&[first[0].clone(), corrupted]),
            Err(Error::InsufficientOrInvalidShares(_))
        ));

        assert!(matches!(
            ShamirProvider.combine(&[ShareToken::new("garbage")]),
            Err(Error::InsufficientOrInvalidShares(_))
        ));
        assert!(matches!(
            ShamirProvider.combine(&[]),
            Err(Error::InsufficientOrInvalidShares(_))
        ));
    }

    #[test]
    fn test_threshold_mismatch() {
        let two = ShamirProvider.split(2, 3, b"same").unwrap();
        let mut raw = two[1].to_bytes().unwrap();
        raw[1] = 3;
        let altered = ShareToken::from_bytes(&raw).unwrap();

        assert!(matches!(
            ShamirProvider.combine(&[two[0].clone(), altered]),
            Err(Error::InsufficientOrInvalidShares(_))
        ));
    }
}
