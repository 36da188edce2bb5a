//! # Tokenwind - design tokens for utility-class generators
//!
//! Tokenwind resolves the theme section of a utility-class CSS generator's
//! configuration: a base theme is extended by one overlay, and the
//! generator looks tokens up by category and name.
//!
//! ## Core Concepts
//!
//! - [`Config`]: One configuration file (`content`, `theme`, `plugins`)
//! - [`Overlay`]: The `theme.extend` block, merged key by key over the base
//! - [`ThemeResolver`]: Merges an overlay over an injected base theme
//! - [`Theme`]: The resolved, immutable token mapping
//! - [`ContentScope`]: The globs the external scanner reads
//! - [`VariantRegistry`]: Named configurations selected at build time
//!
//! ## Quick Start
//!
//! ```rust
//! use tokenwind::{Category, Revision, ThemeResolver};
//!
//! let config = Revision::First.config().unwrap();
//! let theme = ThemeResolver::default().load_config(&config).unwrap();
//!
//! let gradient = theme.resolve(Category::BackgroundImage, "vertical-to-pink").unwrap();
//! assert_eq!(
//!     gradient.as_str(),
//!     Some("linear-gradient(to bottom, white, rgb(248,201,212))")
//! );
//!
//! // The external scanner decides which files to read
//! assert!(config.content_scope().matches("../gallery.rs"));
//! ```
//!
//! ## Merge Rules
//!
//! - An overlay key with the same name as a base key replaces it entirely
//! - An overlay key missing from the base is added
//! - Base keys the overlay does not mention are kept
//! - Categories named directly under `theme` replace the base category
//!
//! Every overlay value is checked before merging; a malformed value aborts
//! the load with [`ConfigError::InvalidOverlay`]. Looking up a token nobody
//! defines fails with [`ConfigError::UnknownToken`].

pub mod config;
mod error;
pub mod overlay;
pub mod registry;
mod revisions;
pub mod theme;

pub use config::{Config, ConfigFormat, ContentScope};
pub use error::ConfigError;
pub use overlay::{Overlay, ThemeOverrides};
pub use registry::{RegistryError, VariantRegistry};
pub use revisions::Revision;
pub use theme::{
    base_theme, Category, KeyframeStep, Keyframes, Theme, ThemeResolver, TokenRef, TokenSet,
    UnknownCategory,
};
