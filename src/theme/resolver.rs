//! Merging overlays over a base theme.

use super::base::base_theme;
use super::category::Category;
use super::theme::Theme;
use crate::config::Config;
use crate::error::ConfigError;
use crate::overlay::{Overlay, ThemeOverrides};

/// Builds [`Theme`]s from a base theme and an overlay.
///
/// The base is injected at construction; [`ThemeResolver::default`] uses the
/// built-in [`base_theme`]. Each call to [`load`](Self::load) is independent:
/// overlays never accumulate across calls.
///
/// # Merge Policy
///
/// | Source | Effect on the base |
/// |--------|--------------------|
/// | `theme.<category>` ([`ThemeOverrides`]) | replaces the whole category |
/// | `theme.extend.<category>` ([`Overlay`]) | adds new keys, replaces same-named keys |
///
/// Replaced values are never merged element-wise: an overlay font stack
/// replaces the base stack of the same name entirely.
///
/// # Example
///
/// ```rust
/// use tokenwind::{Overlay, Theme, ThemeResolver, TokenSet};
///
/// let base = Theme::from_tokens(TokenSet::new().font_family("sans", ["Helvetica"]));
/// let overlay = Overlay::new(TokenSet::new().font_family("roboto", ["Roboto", "sans-serif"]));
///
/// let theme = ThemeResolver::new(base).load(&overlay).unwrap();
/// assert_eq!(theme.font_family("sans").unwrap(), ["Helvetica".to_string()]);
/// assert_eq!(theme.font_family("roboto").unwrap().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeResolver {
    base: Theme,
}

impl ThemeResolver {
    /// Creates a resolver over the given base theme.
    pub fn new(base: Theme) -> Self {
        Self { base }
    }

    /// Returns the base theme.
    pub fn base(&self) -> &Theme {
        &self.base
    }

    /// Deep-merges `overlay` over the base theme.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverlay`] if any overlay value fails
    /// validation. Nothing is merged in that case.
    pub fn load(&self, overlay: &Overlay) -> Result<Theme, ConfigError> {
        self.merge(&ThemeOverrides::default(), overlay)
    }

    /// Resolves the theme described by a whole configuration.
    ///
    /// Category overrides are applied first, then the `extend` overlay.
    pub fn load_config(&self, config: &Config) -> Result<Theme, ConfigError> {
        self.merge(config.overrides(), config.overlay())
    }

    fn merge(&self, overrides: &ThemeOverrides, overlay: &Overlay) -> Result<Theme, ConfigError> {
        overrides.validate()?;
        overlay.validate()?;

        let mut tokens = self.base.tokens().clone();
        for category in overrides.categories() {
            tokens.clear_category(*category);
        }
        tokens.extend_from(overrides.tokens());
        tokens.extend_from(overlay.tokens());

        let theme = Theme::from_tokens(tokens);

        for name in theme.dangling_animations() {
            tracing::warn!(animation = name, "animation references no known keyframes");
        }
        tracing::debug!(
            font_families = theme.tokens().len(Category::FontFamily),
            colors = theme.tokens().len(Category::Colors),
            background_images = theme.tokens().len(Category::BackgroundImage),
            animations = theme.tokens().len(Category::Animation),
            keyframes = theme.tokens().len(Category::Keyframes),
            "theme loaded"
        );

        Ok(theme)
    }
}

impl Default for ThemeResolver {
    fn default() -> Self {
        Self::new(base_theme())
    }
}
