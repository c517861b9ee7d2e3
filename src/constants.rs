/// Number of alphabet characters in one token block (one line of words).
pub const BLOCK_CHARS: usize = 44;

/// Number of raw bytes a block decodes to, i.e. the number of words per line.
pub const BLOCK_BYTES: usize = 33;

/// A dictionary needs one word for every possible byte value.
pub const DICTIONARY_WORDS: usize = 256;

/// Marker that starts a comment line in a share file.
pub const COMMENT_MARKER: char = '#';

/// Largest share count the provider can address with a one byte x coordinate.
pub const MAX_SHARES: usize = 255;

/// Largest secret the provider accepts, bounded by the u16 length prefix.
pub const MAX_SECRET_LEN: usize = u16::MAX as usize;

/// Number of SHA-256 bytes appended to the shared plaintext.
pub const CHECKSUM_LEN: usize = 4;

pub const DEFAULT_THRESHOLD: usize = 2;
pub const DEFAULT_TOTAL: usize = 3;
pub const DEFAULT_DICTIONARY: &str = "english.txt";
pub const DEFAULT_SHARES_FILE: &str = "shares.txt";
pub const DEFAULT_CONFIG_FILE: &str = "wordshare.toml";

/// Prefix for configuration environment variables, e.g. `WORDSHARE_DICTIONARY`.
pub const ENV_PREFIX: &str = "WORDSHARE";
