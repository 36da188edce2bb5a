//! Content scope: the globs the external scanner reads for class usage.

use std::path::Path;

use glob::{MatchOptions, Pattern};
use serde_json::Value;

use crate::error::ConfigError;
use crate::overlay::{expect_string, kind};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// An ordered, duplicate-free set of glob patterns.
///
/// Tokens that no scanned file references are legal; the scope only tells
/// the scanner where to look.
///
/// # Example
///
/// ```rust
/// use tokenwind::ContentScope;
///
/// let scope = ContentScope::new(["../*.rs"]).unwrap();
/// assert!(scope.matches("../main.rs"));
/// assert!(!scope.matches("../static/main.js"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentScope {
    patterns: Vec<Pattern>,
}

impl ContentScope {
    /// Compiles a list of glob patterns.
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverlay`] at `content[i]` for a pattern
    /// that is empty or not a valid glob.
    pub fn new<I, S>(patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scope = Self::default();
        for (i, raw) in patterns.into_iter().enumerate() {
            scope.push(raw.as_ref(), &format!("content[{i}]"))?;
        }
        Ok(scope)
    }

    /// Parses the `content` entry: an array of globs or `{ files: [...] }`.
    pub(crate) fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let (entries, path) = match value {
            Value::Array(entries) => (entries, "content"),
            Value::Object(object) => {
                for key in object.keys().filter(|k| k.as_str() != "files") {
                    tracing::warn!(key = key.as_str(), "ignoring unsupported content option");
                }
                match object.get("files") {
                    Some(Value::Array(entries)) => (entries, "content.files"),
                    Some(other) => {
                        return Err(ConfigError::invalid(
                            "content.files",
                            format!("expected an array of globs, found {}", kind(other)),
                        ))
                    }
                    None => return Ok(Self::default()),
                }
            }
            other => {
                return Err(ConfigError::invalid(
                    "content",
                    format!("expected an array of globs, found {}", kind(other)),
                ))
            }
        };

        let mut scope = Self::default();
        for (i, entry) in entries.iter().enumerate() {
            let entry_path = format!("{path}[{i}]");
            let raw = expect_string(entry, &entry_path)?;
            scope.push(&raw, &entry_path)?;
        }
        Ok(scope)
    }

    fn push(&mut self, raw: &str, path: &str) -> Result<(), ConfigError> {
        if raw.trim().is_empty() {
            return Err(ConfigError::invalid(path, "glob pattern is empty"));
        }
        let pattern = Pattern::new(raw)
            .map_err(|e| ConfigError::invalid(path, format!("invalid glob: {e}")))?;
        if !self.patterns.contains(&pattern) {
            self.patterns.push(pattern);
        }
        Ok(())
    }

    /// Returns the patterns in configuration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Pattern::as_str)
    }

    /// Returns true if any pattern matches `path`.
    ///
    /// `*` does not cross path separators; use `**` for that.
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.patterns
            .iter()
            .any(|p| p.matches_path_with(path, MATCH_OPTIONS))
    }

    /// Returns the number of distinct patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true when the scope names no files.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
