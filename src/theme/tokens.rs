//! Token storage shared by themes and overlays.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::category::{Category, TokenRef};

/// One step of a keyframe set: a selector and its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyframeStep {
    selector: String,
    declarations: IndexMap<String, String>,
}

impl KeyframeStep {
    /// Returns the step selector, e.g. `"0%, 100%"` or `"from"`.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Returns the CSS declarations of this step in definition order.
    pub fn declarations(&self) -> &IndexMap<String, String> {
        &self.declarations
    }

    /// Returns the value of a single declaration.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }
}

/// An ordered keyframe set.
///
/// Serializes as a map from selector to declarations, the shape the
/// generator expects.
///
/// # Example
///
/// ```rust
/// use tokenwind::Keyframes;
///
/// let blink = Keyframes::new()
///     .step("0%, 100%", [("color", "#FFD700")])
///     .step("50%", [("color", "#FF4500")]);
///
/// assert_eq!(blink.len(), 2);
/// assert_eq!(blink.get("50%").and_then(|s| s.get("color")), Some("#FF4500"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyframes {
    steps: Vec<KeyframeStep>,
}

impl Keyframes {
    /// Creates an empty keyframe set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step, returning the updated set for chaining.
    ///
    /// A step with an existing selector replaces that step's declarations
    /// in place.
    pub fn step<I, K, V>(mut self, selector: &str, declarations: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.push(
            selector.to_string(),
            declarations
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    pub(crate) fn push(&mut self, selector: String, declarations: IndexMap<String, String>) {
        match self.steps.iter_mut().find(|s| s.selector == selector) {
            Some(existing) => existing.declarations = declarations,
            None => self.steps.push(KeyframeStep {
                selector,
                declarations,
            }),
        }
    }

    /// Returns the steps in definition order.
    pub fn steps(&self) -> &[KeyframeStep] {
        &self.steps
    }

    /// Looks up a step by its exact selector.
    pub fn get(&self, selector: &str) -> Option<&KeyframeStep> {
        self.steps.iter().find(|s| s.selector == selector)
    }

    /// Returns the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true when the set has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Serialize for Keyframes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.steps.len()))?;
        for step in &self.steps {
            map.serialize_entry(&step.selector, &step.declarations)?;
        }
        map.end()
    }
}

/// Tokens grouped by category.
///
/// Each category is an insertion-ordered map from token name to value.
/// Equality is structural: two sets are equal when every category holds the
/// same names with the same values, regardless of order.
///
/// # Example
///
/// ```rust
/// use tokenwind::{Category, TokenSet};
///
/// let tokens = TokenSet::new()
///     .font_family("roboto", ["Roboto", "sans-serif"])
///     .background_image("vertical-to-pink", "linear-gradient(to bottom, white, rgb(248,201,212))");
///
/// assert!(tokens.contains(Category::FontFamily, "roboto"));
/// assert_eq!(tokens.len(Category::BackgroundImage), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSet {
    pub(crate) font_family: IndexMap<String, Vec<String>>,
    pub(crate) colors: IndexMap<String, String>,
    pub(crate) background_image: IndexMap<String, String>,
    pub(crate) animation: IndexMap<String, String>,
    pub(crate) keyframes: IndexMap<String, Keyframes>,
}

impl TokenSet {
    /// Creates an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a font stack.
    pub fn font_family<I, S>(mut self, name: &str, stack: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.font_family
            .insert(name.to_string(), stack.into_iter().map(Into::into).collect());
        self
    }

    /// Adds a color.
    pub fn color(mut self, name: &str, value: impl Into<String>) -> Self {
        self.colors.insert(name.to_string(), value.into());
        self
    }

    /// Adds a background image.
    pub fn background_image(mut self, name: &str, value: impl Into<String>) -> Self {
        self.background_image.insert(name.to_string(), value.into());
        self
    }

    /// Adds an animation shorthand.
    pub fn animation(mut self, name: &str, value: impl Into<String>) -> Self {
        self.animation.insert(name.to_string(), value.into());
        self
    }

    /// Adds a keyframe set.
    pub fn keyframes(mut self, name: &str, keyframes: Keyframes) -> Self {
        self.keyframes.insert(name.to_string(), keyframes);
        self
    }

    /// Looks up a token without producing an error.
    pub fn get(&self, category: Category, name: &str) -> Option<TokenRef<'_>> {
        match category {
            Category::FontFamily => self
                .font_family
                .get(name)
                .map(|stack| TokenRef::FontStack(stack)),
            Category::Colors => self.colors.get(name).map(|v| TokenRef::Value(v)),
            Category::BackgroundImage => {
                self.background_image.get(name).map(|v| TokenRef::Value(v))
            }
            Category::Animation => self.animation.get(name).map(|v| TokenRef::Value(v)),
            Category::Keyframes => self.keyframes.get(name).map(TokenRef::Keyframes),
        }
    }

    /// Returns true if `name` is defined in `category`.
    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.get(category, name).is_some()
    }

    /// Returns the token names of a category in definition order.
    pub fn names(&self, category: Category) -> Vec<&str> {
        match category {
            Category::FontFamily => self.font_family.keys().map(String::as_str).collect(),
            Category::Colors => self.colors.keys().map(String::as_str).collect(),
            Category::BackgroundImage => {
                self.background_image.keys().map(String::as_str).collect()
            }
            Category::Animation => self.animation.keys().map(String::as_str).collect(),
            Category::Keyframes => self.keyframes.keys().map(String::as_str).collect(),
        }
    }

    /// Returns the number of tokens in a category.
    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::FontFamily => self.font_family.len(),
            Category::Colors => self.colors.len(),
            Category::BackgroundImage => self.background_image.len(),
            Category::Animation => self.animation.len(),
            Category::Keyframes => self.keyframes.len(),
        }
    }

    /// Returns true if no category holds any token.
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.len(*c) == 0)
    }

    /// Removes every token of a category.
    pub(crate) fn clear_category(&mut self, category: Category) {
        match category {
            Category::FontFamily => self.font_family.clear(),
            Category::Colors => self.colors.clear(),
            Category::BackgroundImage => self.background_image.clear(),
            Category::Animation => self.animation.clear(),
            Category::Keyframes => self.keyframes.clear(),
        }
    }

    /// Merges `other` into `self` key by key.
    ///
    /// Keys present in both are replaced wholesale by `other`'s value; font
    /// stacks and keyframe sets are never merged element-wise.
    pub(crate) fn extend_from(&mut self, other: &TokenSet) {
        self.font_family.extend(
            other
                .font_family
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        self.colors
            .extend(other.colors.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.background_image.extend(
            other
                .background_image
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        self.animation
            .extend(other.animation.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.keyframes
            .extend(other.keyframes.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blink() -> Keyframes {
        Keyframes::new()
            .step("0%, 100%", [("color", "#FFD700")])
            .step("33%", [("color", "#FF4500")])
            .step("66%", [("color", "#00FF00")])
    }

    #[test]
    fn test_keyframes_preserve_order() {
        let keyframes = blink();
        let selectors: Vec<&str> = keyframes.steps().iter().map(|s| s.selector()).collect();
        assert_eq!(selectors, vec!["0%, 100%", "33%", "66%"]);
    }

    #[test]
    fn test_keyframes_duplicate_selector_replaces_in_place() {
        let keyframes = blink().step("33%", [("color", "red")]);
        assert_eq!(keyframes.len(), 3);
        assert_eq!(keyframes.steps()[1].get("color"), Some("red"));
    }

    #[test]
    fn test_keyframes_serialize_as_map() {
        let json = serde_json::to_value(blink()).unwrap();
        assert_eq!(json["33%"]["color"], "#FF4500");
    }

    #[test]
    fn test_token_set_get_by_category() {
        let tokens = TokenSet::new()
            .font_family("roboto", ["Roboto", "sans-serif"])
            .animation("blink-color", "blink-color 2s infinite")
            .keyframes("blink-color", blink());

        assert!(matches!(
            tokens.get(Category::FontFamily, "roboto"),
            Some(TokenRef::FontStack(stack)) if stack.len() == 2
        ));
        assert_eq!(
            tokens
                .get(Category::Animation, "blink-color")
                .and_then(|t| t.as_str()),
            Some("blink-color 2s infinite")
        );
        assert!(tokens.contains(Category::Keyframes, "blink-color"));
        assert!(!tokens.contains(Category::Colors, "blink-color"));
    }

    #[test]
    fn test_token_set_names_in_order() {
        let tokens = TokenSet::new().color("b", "blue").color("a", "red");
        assert_eq!(tokens.names(Category::Colors), vec!["b", "a"]);
    }

    #[test]
    fn test_token_set_is_empty() {
        assert!(TokenSet::new().is_empty());
        assert!(!TokenSet::new().color("x", "red").is_empty());
    }

    #[test]
    fn test_extend_from_replaces_whole_stack() {
        let mut base = TokenSet::new().font_family("sans", ["Helvetica", "Arial"]);
        let overlay = TokenSet::new().font_family("sans", ["Inter"]);
        base.extend_from(&overlay);

        assert_eq!(
            base.get(Category::FontFamily, "sans"),
            Some(TokenRef::FontStack(&["Inter".to_string()]))
        );
    }

    #[test]
    fn test_clear_category() {
        let mut tokens = TokenSet::new().color("a", "red").background_image("g", "none");
        tokens.clear_category(Category::Colors);
        assert_eq!(tokens.len(Category::Colors), 0);
        assert_eq!(tokens.len(Category::BackgroundImage), 1);
    }

    #[test]
    fn test_token_set_serializes_with_config_keys() {
        let tokens = TokenSet::new().background_image("g", "none");
        let json = serde_json::to_value(&tokens).unwrap();
        assert_eq!(json["backgroundImage"]["g"], "none");
        assert!(json.get("fontFamily").is_some());
    }
}
