use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::codec::ByteWordCodec;
use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::format::{check_destination, parse, parse_summary, write_share_file};
use crate::provider::{SecretSharingProvider, ShamirProvider};

/// Parameters of a `create` run.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Minimum number of shares needed to reveal the secret.
    pub threshold: usize,
    /// Number of shares to write.
    pub total: usize,
    pub secret: String,
    pub dictionary: PathBuf,
    pub destination: PathBuf,
    /// Replace `destination` if it already exists.
    pub allow_overwrite: bool,
}

/// Parameters of a `reveal` run.
#[derive(Debug, Clone)]
pub struct RevealOptions {
    pub dictionary: PathBuf,
    pub source: PathBuf,
}

/// Creates share files from secrets and reveals secrets from share files.
///
/// Each call loads its own dictionary; nothing is kept between calls.
#[derive(Debug, Clone, Default)]
pub struct ShareWorkflow<P: SecretSharingProvider = ShamirProvider> {
    provider: P,
}

impl ShareWorkflow<ShamirProvider> {
    pub fn new() -> Self {
        ShareWorkflow {
            provider: ShamirProvider,
        }
    }
}

impl<P: SecretSharingProvider> ShareWorkflow<P> {
    pub fn with_provider(provider: P) -> Self {
        ShareWorkflow { provider }
    }

    /// Splits the secret and writes the share file.
    ///
    /// The threshold and the destination are checked before the dictionary is read or anything
    /// is computed.
    pub fn create(&self, options: &CreateOptions) -> Result<()> {
        self.run_create(options, None)
    }

    /// Like [`ShareWorkflow::create`], also writing the share file text to `echo`.
    pub fn create_with_echo(&self, options: &CreateOptions, echo: &mut dyn Write) -> Result<()> {
        self.run_create(options, Some(echo))
    }

    fn run_create(&self, options: &CreateOptions, echo: Option<&mut dyn Write>) -> Result<()> {
        let CreateOptions {
            threshold,
            total,
            ..
        } = *options;

        if threshold < 1 || threshold > total {
            return Err(Error::InvalidThreshold { threshold, total });
        }
        check_destination(&options.destination, options.allow_overwrite)?;

        let dictionary = Dictionary::from_path(&options.dictionary)?;
        let codec = ByteWordCodec::new(&dictionary);

        let tokens = self
            .provider
            .split(threshold, total, options.secret.as_bytes())?;

        write_share_file(
            &options.destination,
            options.allow_overwrite,
            &tokens,
            threshold,
            total,
            &codec,
            echo,
        )?;

        info!(
            "Created {} shares ({} needed) in {:?}",
            total, threshold, options.destination
        );
        Ok(())
    }

    /// Reads a share file and recovers the secret.
    pub fn reveal(&self, options: &RevealOptions) -> Result<String> {
        let dictionary = Dictionary::from_path(&options.dictionary)?;
        let codec = ByteWordCodec::new(&dictionary);

        let text = fs::read_to_string(&options.source)?;
        let tokens = parse(&text, &codec)?;
        debug!("Read {} share(s) from {:?}", tokens.len(), options.source);

        if let Some((threshold, total)) = parse_summary(&text) {
            if tokens.len() < threshold {
                warn!(
                    "{:?} holds {} share(s), its summary asks for {} out of {}",
                    options.source,
                    tokens.len(),
                    threshold,
                    total
                );
            }
        }

        let secret = self.provider.combine(&tokens)?;
        let secret = String::from_utf8(secret).map_err(|_| {
            Error::InsufficientOrInvalidShares("recovered secret is not valid UTF-8".to_string())
        })?;

        info!("Revealed secret from {} share(s)", tokens.len());
        Ok(secret)
    }
}
