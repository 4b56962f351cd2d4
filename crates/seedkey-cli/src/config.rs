//! `seedkey.toml` configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use seedkey_wallet::Network;
use tracing::debug;

use crate::cli::OutputFormat;

/// Config file looked up in the working directory when no path is given.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "seedkey.toml";

/// Largest seed file accepted by default: 10 MiB.
pub(crate) const DEFAULT_MAX_SEED_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Defaults for command-line flags. Flags given explicitly take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct CliConfig {
    pub(crate) network: Network,
    pub(crate) format: OutputFormat,
    pub(crate) max_seed_file_size: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            network: Network::Mainnet,
            format: OutputFormat::Text,
            max_seed_file_size: DEFAULT_MAX_SEED_FILE_SIZE,
        }
    }
}

impl CliConfig {
    /// Load the config from `path`, or from `seedkey.toml` if it exists,
    /// or fall back to defaults.
    ///
    /// An explicit path that cannot be read is an error.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
