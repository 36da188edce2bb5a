//! Overlays: partial themes applied over the base.
//!
//! - [`Overlay`]: the `theme.extend` block, merged key by key
//! - [`ThemeOverrides`]: categories named directly under `theme`, each
//!   replacing the base category wholesale
//!
//! Both are immutable once built. Values are checked when a
//! [`ThemeResolver`](crate::ThemeResolver) loads them, so an overlay built in
//! code gets the same validation as one parsed from a file.

mod css;
mod parse;

use serde_json::Value;

use crate::config::ConfigFormat;
use crate::error::ConfigError;
use crate::theme::{Category, TokenSet};

pub(crate) use parse::{expect_object, expect_string, kind, parse_token_set};

const EXTEND_PATH: &str = "theme.extend";
const THEME_PATH: &str = "theme";

/// One `theme.extend` block.
///
/// # Example
///
/// ```rust
/// use tokenwind::{ConfigFormat, Overlay};
///
/// let overlay = Overlay::parse(
///     r#"
/// fontFamily:
///   roboto: [Roboto, sans-serif]
/// backgroundImage:
///   vertical-to-pink: "linear-gradient(to bottom, white, rgb(248,201,212))"
/// "#,
///     ConfigFormat::Yaml,
/// )
/// .unwrap();
///
/// assert!(!overlay.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    tokens: TokenSet,
}

impl Overlay {
    /// Wraps a token set as an overlay.
    pub fn new(tokens: TokenSet) -> Self {
        Self { tokens }
    }

    /// Builds an overlay from a raw `extend` object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverlay`] if a category or value has
    /// the wrong shape.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let (tokens, _) = parse_token_set(value, EXTEND_PATH)?;
        Ok(Self { tokens })
    }

    /// Parses an overlay from JSON or YAML text.
    pub fn parse(text: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        Self::from_value(&format.parse_value(text)?)
    }

    /// Returns the overlay's tokens.
    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    /// Returns true if the overlay defines no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Checks every value of the overlay.
    ///
    /// Called by the resolver before merging.
    pub fn validate(&self) -> Result<(), ConfigError> {
        css::validate_tokens(&self.tokens, EXTEND_PATH)
    }
}

/// Categories defined directly under `theme`, outside `extend`.
///
/// Each listed category replaces the base category entirely, including when
/// the replacement is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeOverrides {
    tokens: TokenSet,
    categories: Vec<Category>,
}

impl ThemeOverrides {
    /// Creates overrides for `categories`, holding `tokens`.
    ///
    /// Any category with tokens in `tokens` is treated as overridden even if
    /// it is missing from `categories`.
    pub fn new(tokens: TokenSet, categories: impl IntoIterator<Item = Category>) -> Self {
        let mut listed: Vec<Category> = categories.into_iter().collect();
        listed.extend(Category::ALL.into_iter().filter(|c| tokens.len(*c) > 0));
        listed.sort();
        listed.dedup();

        Self {
            tokens,
            categories: listed,
        }
    }

    /// Returns the replacement tokens.
    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    /// Returns the overridden categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns true if no category is overridden.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Checks every replacement value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        css::validate_tokens(&self.tokens, THEME_PATH)
    }
}
