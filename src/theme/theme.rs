//! The resolved, immutable theme consumed by the generator.

use serde::Serialize;

use super::category::{Category, TokenRef};
use super::tokens::{Keyframes, TokenSet};
use crate::error::ConfigError;

/// A flattened token mapping produced by [`ThemeResolver`](super::ThemeResolver).
///
/// A theme is built once and never mutated afterwards, so it can be shared
/// by reference (or behind an `Arc`) between any number of readers.
///
/// # Example
///
/// ```rust
/// use tokenwind::{Category, Overlay, ThemeResolver, TokenSet};
///
/// let overlay = Overlay::new(
///     TokenSet::new().background_image("pink-to-white", "linear-gradient(to bottom, rgb(248,201,212), white)"),
/// );
/// let theme = ThemeResolver::default().load(&overlay).unwrap();
///
/// let value = theme.resolve(Category::BackgroundImage, "pink-to-white").unwrap();
/// assert_eq!(value.as_str(), Some("linear-gradient(to bottom, rgb(248,201,212), white)"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Theme {
    tokens: TokenSet,
}

impl Theme {
    /// Wraps a token set as a theme.
    ///
    /// Used to supply a custom base to [`ThemeResolver::new`](super::ThemeResolver::new).
    pub fn from_tokens(tokens: TokenSet) -> Self {
        Self { tokens }
    }

    /// Returns the underlying tokens.
    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    /// Returns the value of a token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownToken`] if neither the base nor the
    /// overlay defines `name` in `category`.
    pub fn resolve(&self, category: Category, name: &str) -> Result<TokenRef<'_>, ConfigError> {
        tracing::trace!(%category, name, "resolving token");
        self.tokens
            .get(category, name)
            .ok_or_else(|| ConfigError::unknown(category, name))
    }

    /// Resolves a font stack.
    pub fn font_family(&self, name: &str) -> Result<&[String], ConfigError> {
        self.tokens
            .font_family
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| ConfigError::unknown(Category::FontFamily, name))
    }

    /// Resolves a color.
    pub fn color(&self, name: &str) -> Result<&str, ConfigError> {
        self.tokens
            .colors
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::unknown(Category::Colors, name))
    }

    /// Resolves a background image.
    pub fn background_image(&self, name: &str) -> Result<&str, ConfigError> {
        self.tokens
            .background_image
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::unknown(Category::BackgroundImage, name))
    }

    /// Resolves an animation shorthand.
    pub fn animation(&self, name: &str) -> Result<&str, ConfigError> {
        self.tokens
            .animation
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::unknown(Category::Animation, name))
    }

    /// Resolves a keyframe set.
    pub fn keyframes(&self, name: &str) -> Result<&Keyframes, ConfigError> {
        self.tokens
            .keyframes
            .get(name)
            .ok_or_else(|| ConfigError::unknown(Category::Keyframes, name))
    }

    /// Returns the keyframe sets referenced by an animation's shorthand.
    ///
    /// The shorthand is split on whitespace and commas; every word naming a
    /// keyframe set in this theme is returned, in shorthand order.
    pub fn animation_keyframes(&self, name: &str) -> Result<Vec<&str>, ConfigError> {
        let shorthand = self.animation(name)?;
        Ok(self.referenced_keyframes(shorthand))
    }

    fn referenced_keyframes(&self, shorthand: &str) -> Vec<&str> {
        shorthand
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter_map(|word| {
                self.tokens
                    .keyframes
                    .get_key_value(word)
                    .map(|(k, _)| k.as_str())
            })
            .collect()
    }

    /// Returns animations whose shorthand names no keyframe set of this theme.
    ///
    /// `none` is never reported.
    pub fn dangling_animations(&self) -> Vec<&str> {
        self.tokens
            .animation
            .iter()
            .filter(|(_, shorthand)| shorthand.trim() != "none")
            .filter(|(_, shorthand)| self.referenced_keyframes(shorthand).is_empty())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Serializes the theme to the JSON shape the generator consumes.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
