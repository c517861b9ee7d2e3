//! The share file text format.
//!
//! ```text
//! # Share 1
//! <word> <word> ... <word>
//!
//! # Share 2
//! <word> <word> ... <word>
//!
//! # You need 2 shares out of these 2 shares to be able to get your secret back.
//! ```
//!
//! Each word line holds one 33 byte block of a token, a blank line closes a share.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::codec::ByteWordCodec;
use crate::constants::COMMENT_MARKER;
use crate::error::{Error, Result};
use crate::token::{decode_block, encode_block, ShareToken};

/// Renders tokens as share file text.
///
/// # Errors
///
/// `Error::MalformedToken` if a token is not a whole number of valid blocks.
pub fn render(
    tokens: &[ShareToken],
    threshold: usize,
    total: usize,
    codec: &ByteWordCodec<'_>,
) -> Result<String> {
    let mut text = String::new();

    for (i, token) in tokens.iter().enumerate() {
        text.push_str(&format!("{COMMENT_MARKER} Share {}\n", i + 1));
        let blocks = token.blocks()?;
        debug!("Share {} spans {} block(s)", i + 1, blocks.len());
        for block in blocks {
            let bytes = decode_block(block)?;
            text.push_str(codec.encode_line(&bytes).trim());
            text.push('\n');
        }
        text.push('\n');
    }

    text.push_str(&summary_line(threshold, total));
    text.push('\n');
    Ok(text)
}

fn summary_line(threshold: usize, total: usize) -> String {
    format!(
        "{COMMENT_MARKER} You need {threshold} shares out of these {total} shares to be able to get your secret back."
    )
}

/// Fails with `Error::DestinationExists` if `path` exists and overwriting is not allowed.
pub fn check_destination(path: &Path, allow_overwrite: bool) -> Result<()> {
    if !allow_overwrite && path.exists() {
        return Err(Error::DestinationExists(path.to_path_buf()));
    }
    Ok(())
}

/// Renders tokens and writes them to `destination`, mirroring the text to `echo` when given.
///
/// Without `allow_overwrite` the file is opened with `create_new`, so a file that shows up after
/// [`check_destination`] is still not clobbered. Two concurrent writers to one path are not
/// coordinated beyond that.
pub fn write_share_file(
    destination: &Path,
    allow_overwrite: bool,
    tokens: &[ShareToken],
    threshold: usize,
    total: usize,
    codec: &ByteWordCodec<'_>,
    echo: Option<&mut dyn Write>,
) -> Result<()> {
    check_destination(destination, allow_overwrite)?;
    let text = render(tokens, threshold, total, codec)?;

    let mut options = OpenOptions::new();
    options.write(true);
    if allow_overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut file = options.open(destination).map_err(|err| match err.kind() {
        io::ErrorKind::AlreadyExists => Error::DestinationExists(destination.to_path_buf()),
        _ => Error::Io(err),
    })?;
    file.write_all(text.as_bytes())?;
    file.flush()?;

    if let Some(echo) = echo {
        echo.write_all(text.as_bytes())?;
        echo.flush()?;
    }

    debug!("📝 Wrote {} share(s) to {:?}", tokens.len(), destination);
    Ok(())
}

/// Parses share file text back into tokens, one per blank line terminated group.
///
/// A comment line starts a new share and drops anything collected since the last blank line. A
/// group that is not followed by a blank line is not returned.
///
/// # Errors
///
/// `Error::UnknownWord` for the first word that is not in the dictionary.
pub fn parse(text: &str, codec: &ByteWordCodec<'_>) -> Result<Vec<ShareToken>> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();

        if line.starts_with(COMMENT_MARKER) {
            if !current.is_empty() {
                debug!("Comment on line {} discards an unterminated share", index + 1);
            }
            current.clear();
            continue;
        }

        if line.is_empty() {
            if !current.is_empty() {
                tokens.push(ShareToken::new(std::mem::take(&mut current)));
            }
            continue;
        }

        let bytes = codec.decode_line(line, index + 1)?;
        current.push_str(&encode_block(&bytes));
    }

    if !current.is_empty() {
        warn!("Share file ends without a blank line, the last share is ignored");
    }

    debug!("Parsed {} share(s)", tokens.len());
    Ok(tokens)
}

/// Reads `(threshold, total)` from the trailing summary comment, if there is one.
pub fn parse_summary(text: &str) -> Option<(usize, usize)> {
    text.lines().rev().find_map(|line| {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            ["#", "You", "need", threshold, "shares", "out", "of", "these", total, ..] => {
                Some((threshold.parse().ok()?, total.parse().ok()?))
            }
            _ => None,
        }
    })
}
