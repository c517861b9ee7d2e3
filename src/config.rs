use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    DEFAULT_DICTIONARY, DEFAULT_SHARES_FILE, DEFAULT_THRESHOLD, DEFAULT_TOTAL, ENV_PREFIX,
};

/// Defaults for the command line, layered from built-in values, an optional TOML file and
/// `WORDSHARE_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordshareConfig {
    /// Word list used to encode and decode shares.
    pub dictionary: PathBuf,
    /// Share file written by `create` and read by `reveal`.
    pub shares_file: PathBuf,
    pub threshold: usize,
    pub total: usize,
    /// Overwrite an existing shares file on `create`.
    pub force: bool,
}

impl Default for WordshareConfig {
    fn default() -> Self {
        WordshareConfig {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            shares_file: PathBuf::from(DEFAULT_SHARES_FILE),
            threshold: DEFAULT_THRESHOLD,
            total: DEFAULT_TOTAL,
            force: false,
        }
    }
}

impl WordshareConfig {
    /// Loads the configuration. A missing file is not an error, the defaults are used instead.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let settings = Config::builder()
            // Add in `./wordshare.toml` when present
            .add_source(File::from(path).required(false))
            // Eg.. `WORDSHARE_DICTIONARY=words.txt ./target/wordshare reveal`
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: WordshareConfig = settings.try_deserialize()?;
        debug!("📝 Loaded config (file {:?}): {:?}", path, config);
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|err| ConfigError::Foreign(Box::new(err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = WordshareConfig::load(dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.total, DEFAULT_TOTAL);
        assert_eq!(config.shares_file, PathBuf::from(DEFAULT_SHARES_FILE));
        assert!(!config.force);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordshare.toml");
        fs::write(&path, "dictionary = \"words.txt\"\nthreshold = 3\ntotal = 5\n").unwrap();

        let config = WordshareConfig::load(&path).unwrap();
        assert_eq!(config.dictionary, PathBuf::from("words.txt"));
        assert_eq!(config.threshold, 3);
        assert_eq!(config.total, 5);
        assert_eq!(config.shares_file, PathBuf::from(DEFAULT_SHARES_FILE));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = WordshareConfig {
            force: true,
            total: 7,
            ..WordshareConfig::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordshare.toml");
        fs::write(&path, config.to_toml().unwrap()).unwrap();

        assert_eq!(WordshareConfig::load(&path).unwrap(), config);
    }
}
