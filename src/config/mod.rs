//! Configuration management for `tola-lang.toml`.
//!
//! # Sections
//!
//! | Section       | Purpose                                    |
//! |---------------|--------------------------------------------|
//! | `[multilang]` | Which output extensions get split by `lang` |
//!
//! # Example
//!
//! ```toml
//! [multilang]
//! extensions = [".html"]
//! ```

pub mod defaults;
mod error;
mod multilang;

pub use error::ConfigError;
pub use multilang::MultilangConfig;

use anyhow::{Result, bail};
use educe::Educe;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

/// Default config file name, looked up relative to the working directory.
pub const CONFIG_FILE: &str = "tola-lang.toml";

/// Root configuration structure representing tola-lang.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Path to the config file (empty when running on defaults)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Multilanguage settings
    #[serde(default)]
    pub multilang: MultilangConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Load from `path` when it exists, otherwise fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            Self::from_path(path)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check semantic constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        static RE_EXTENSION: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"^(\*|\.[A-Za-z0-9]+)$").unwrap());

        if self.multilang.extensions.is_empty() {
            bail!(ConfigError::NoExtensions);
        }

        if let Some(ext) = self
            .multilang
            .extensions
            .iter()
            .find(|ext| !RE_EXTENSION.is_match(ext))
        {
            bail!(ConfigError::InvalidExtension(ext.clone()));
        }

        Ok(())
    }
}
