//! Configuration files.
//!
//! A configuration has three top-level entries:
//!
//! ```yaml
//! content: ["../*.rs"]        # globs scanned for class usage
//! theme:
//!   fontFamily: {...}         # replaces the base category
//!   extend:                   # merged over the base key by key
//!     backgroundImage:
//!       vertical-to-pink: "linear-gradient(to bottom, white, rgb(248,201,212))"
//! plugins: []                 # identifiers, loaded by the external tool
//! ```
//!
//! JSON and YAML sources are supported; the format is chosen from the file
//! extension (`.json`, `.yaml` or `.yml`).

mod scope;

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::overlay::{expect_object, expect_string, kind, parse_token_set, Overlay, ThemeOverrides};

pub use scope::ContentScope;

/// Source format of a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        match path.as_ref().extension()?.to_str()? {
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }

    /// Returns the format name used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigFormat::Json => "JSON",
            ConfigFormat::Yaml => "YAML",
        }
    }

    /// Parses `text` into a JSON value tree.
    ///
    /// YAML is converted so both formats share one validation path. An
    /// empty YAML document yields an empty object.
    pub(crate) fn parse_value(self, text: &str) -> Result<Value, ConfigError> {
        let parse_error = |message: String| ConfigError::Parse {
            format: self.as_str(),
            message,
        };

        match self {
            ConfigFormat::Json => serde_json::from_str(text).map_err(|e| parse_error(e.to_string())),
            ConfigFormat::Yaml => {
                let yaml: serde_yaml::Value =
                    serde_yaml::from_str(text).map_err(|e| parse_error(e.to_string()))?;
                if yaml.is_null() {
                    return Ok(Value::Object(Map::new()));
                }
                serde_json::to_value(yaml).map_err(|e| parse_error(e.to_string()))
            }
        }
    }
}

/// A whole configuration: content scope, theme and plugins.
///
/// Built once at startup and passed by reference to whatever needs it.
///
/// # Example
///
/// ```rust
/// use tokenwind::{Config, ConfigFormat, ThemeResolver};
///
/// let config = Config::parse(
///     r##"{
///         "content": ["../*.rs"],
///         "theme": { "extend": { "colors": { "gold": "#FFD700" } } },
///         "plugins": []
///     }"##,
///     ConfigFormat::Json,
/// )
/// .unwrap();
///
/// let theme = ThemeResolver::default().load_config(&config).unwrap();
/// assert_eq!(theme.color("gold").unwrap(), "#FFD700");
/// assert!(config.content_scope().matches("../main.rs"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    content: ContentScope,
    overrides: ThemeOverrides,
    overlay: Overlay,
    plugins: Vec<String>,
}

impl Config {
    /// Creates a configuration with a content scope and an `extend` overlay.
    pub fn new(content: ContentScope, overlay: Overlay) -> Self {
        Self {
            content,
            overlay,
            ..Self::default()
        }
    }

    /// Sets the whole-category overrides.
    pub fn with_overrides(mut self, overrides: ThemeOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Sets the plugin identifiers.
    pub fn with_plugins<I, S>(mut self, plugins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plugins = plugins.into_iter().map(Into::into).collect();
        self
    }

    /// Builds a configuration from a parsed value tree.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverlay`] for any entry of the wrong
    /// shape. Unknown top-level keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let root = value.as_object().ok_or_else(|| {
            ConfigError::invalid(
                "<root>",
                format!("expected an object, found {}", kind(value)),
            )
        })?;

        let mut config = Self::default();
        for (key, value) in root {
            match key.as_str() {
                "content" => config.content = ContentScope::from_value(value)?,
                "theme" => {
                    let (overrides, overlay) = parse_theme(value)?;
                    config.overrides = overrides;
                    config.overlay = overlay;
                }
                "plugins" => config.plugins = parse_plugins(value)?,
                other => tracing::warn!(key = other, "ignoring unsupported configuration key"),
            }
        }

        if config.content.is_empty() {
            tracing::warn!("content scope is empty; no files will be scanned");
        }
        if !config.plugins.is_empty() {
            tracing::debug!(plugins = ?config.plugins, "plugins are left to the generator");
        }

        Ok(config)
    }

    /// Parses a configuration from JSON or YAML text.
    pub fn parse(text: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        Self::from_value(&format.parse_value(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// The file is read to completion and closed before parsing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for an unrecognized
    /// extension and [`ConfigError::Io`] if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), format = format.as_str(), "loading configuration");
        Self::parse(&text, format)
    }

    /// Returns the globs the external scanner should read.
    pub fn content_scope(&self) -> &ContentScope {
        &self.content
    }

    /// Returns the `theme.extend` overlay.
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Returns the categories replaced directly under `theme`.
    pub fn overrides(&self) -> &ThemeOverrides {
        &self.overrides
    }

    /// Returns the plugin identifiers in configuration order.
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }
}

fn parse_theme(value: &Value) -> Result<(ThemeOverrides, Overlay), ConfigError> {
    let theme = expect_object(value, "theme")?;

    let mut overlay = Overlay::default();
    let mut replaced = Map::new();
    for (key, value) in theme {
        if key == "extend" {
            overlay = Overlay::from_value(value)?;
        } else {
            replaced.insert(key.clone(), value.clone());
        }
    }

    let (tokens, categories) = parse_token_set(&Value::Object(replaced), "theme")?;
    Ok((ThemeOverrides::new(tokens, categories), overlay))
}

fn parse_plugins(value: &Value) -> Result<Vec<String>, ConfigError> {
    let entries = value.as_array().ok_or_else(|| {
        ConfigError::invalid(
            "plugins",
            format!("expected an array, found {}", kind(value)),
        )
    })?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| expect_string(entry, &format!("plugins[{i}]")))
        .collect()
}
