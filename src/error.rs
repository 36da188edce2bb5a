//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::theme::Category;

/// Error returned when loading a configuration or resolving a token fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value in the configuration has the wrong shape for its category.
    ///
    /// `path` is a dotted location inside the configuration, for example
    /// `theme.extend.fontFamily.roboto[1]`.
    #[error("invalid overlay at '{path}': {reason}")]
    InvalidOverlay { path: String, reason: String },

    /// No base or overlay entry defines the requested token.
    #[error("unknown {category} token '{name}'")]
    UnknownToken { category: Category, name: String },

    /// The configuration source is not valid JSON or YAML.
    #[error("failed to parse {format} configuration: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// The file extension names no supported configuration format.
    #[error("unsupported configuration format for '{}'", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The configuration file could not be read.
    #[error("failed to read configuration '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub(crate) fn invalid(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidOverlay {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown(category: Category, name: &str) -> Self {
        ConfigError::UnknownToken {
            category,
            name: name.to_string(),
        }
    }
}
