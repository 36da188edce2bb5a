//! Theme tokens, resolution and merging.
//!
//! This module provides:
//!
//! - [`Category`]: The closed set of token categories
//! - [`TokenSet`]: Tokens grouped by category, shared by themes and overlays
//! - [`Keyframes`]: Ordered keyframe steps referenced by animations
//! - [`Theme`]: The resolved, immutable token mapping
//! - [`ThemeResolver`]: Merges an overlay over an injected base theme
//! - [`base_theme`]: The built-in base theme
//!
//! A theme is built once per build invocation and is read-only afterwards.

mod base;
mod category;
mod resolver;
#[allow(clippy::module_inception)]
mod theme;
mod tokens;

pub use base::base_theme;
pub use category::{Category, TokenRef, UnknownCategory};
pub use resolver::ThemeResolver;
pub use theme::Theme;
pub use tokens::{KeyframeStep, Keyframes, TokenSet};
