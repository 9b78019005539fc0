//! Errors raised while loading `tola-lang.toml`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config")]
    Toml(#[from] toml::de::Error),

    #[error("[multilang.extensions] must not be empty")]
    NoExtensions,

    #[error("[multilang.extensions] entry `{0}` must be `*` or `.` followed by letters or digits")]
    InvalidExtension(String),
}
