//! Token categories and borrowed lookup results.

use std::str::FromStr;

use super::tokens::Keyframes;

/// A token category understood by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Font stacks, e.g. `roboto: ["Roboto", "sans-serif"]`.
    FontFamily,
    /// Color values.
    Colors,
    /// Background image values, usually gradients.
    BackgroundImage,
    /// Animation shorthands, e.g. `blink-color 2s infinite`.
    Animation,
    /// Keyframe sets referenced by animations.
    Keyframes,
}

impl Category {
    /// All categories in configuration order.
    pub const ALL: [Category; 5] = [
        Category::FontFamily,
        Category::Colors,
        Category::BackgroundImage,
        Category::Animation,
        Category::Keyframes,
    ];

    /// Returns the key used for this category in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::FontFamily => "fontFamily",
            Category::Colors => "colors",
            Category::BackgroundImage => "backgroundImage",
            Category::Animation => "animation",
            Category::Keyframes => "keyframes",
        }
    }

    /// Maps a configuration key to a category.
    ///
    /// Accepts both the generator's key (`fontFamily`) and the plural
    /// data-model name (`fontFamilies`).
    pub fn from_key(key: &str) -> Option<Category> {
        match key {
            "fontFamily" | "fontFamilies" => Some(Category::FontFamily),
            "colors" => Some(Category::Colors),
            "backgroundImage" | "backgroundImages" => Some(Category::BackgroundImage),
            "animation" | "animations" => Some(Category::Animation),
            "keyframes" => Some(Category::Keyframes),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl std::fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown token category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_key(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A resolved token, borrowed from a [`Theme`](super::Theme).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenRef<'a> {
    /// An ordered font stack.
    FontStack(&'a [String]),
    /// A single CSS value (color, background image or animation).
    Value(&'a str),
    /// A keyframe set.
    Keyframes(&'a Keyframes),
}

impl<'a> TokenRef<'a> {
    /// Renders the token as a CSS property value.
    ///
    /// Font stacks are joined with `", "`. Keyframes have no property value
    /// and return `None`.
    pub fn to_css_value(&self) -> Option<String> {
        match self {
            TokenRef::FontStack(stack) => Some(stack.join(", ")),
            TokenRef::Value(value) => Some((*value).to_string()),
            TokenRef::Keyframes(_) => None,
        }
    }

    /// Returns the plain value for colors, background images and animations.
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            TokenRef::Value(value) => Some(value),
            _ => None,
        }
    }
}
