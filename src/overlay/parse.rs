//! Shape validation of raw configuration values.
//!
//! Walks a `serde_json::Value` tree category by category and builds typed
//! tokens, rejecting anything that does not match its category's shape.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::theme::{Category, Keyframes, TokenSet};

/// Key naming the bare color in a nested palette.
const DEFAULT_SHADE: &str = "DEFAULT";

/// Parses an object of categories (the `theme.extend` shape).
///
/// Returns the tokens and the categories that appeared as keys, in the
/// order they appeared.
pub(crate) fn parse_token_set(
    value: &Value,
    path: &str,
) -> Result<(TokenSet, Vec<Category>), ConfigError> {
    let object = expect_object(value, path)?;
    let mut tokens = TokenSet::new();
    let mut present = Vec::new();

    for (key, value) in object {
        let category = Category::from_key(key).ok_or_else(|| {
            ConfigError::invalid(format!("{path}.{key}"), "unsupported token category")
        })?;
        parse_category(&mut tokens, category, value, &format!("{path}.{key}"))?;
        if !present.contains(&category) {
            present.push(category);
        }
    }

    Ok((tokens, present))
}

fn parse_category(
    tokens: &mut TokenSet,
    category: Category,
    value: &Value,
    path: &str,
) -> Result<(), ConfigError> {
    let object = expect_object(value, path)?;

    match category {
        Category::FontFamily => {
            for (name, stack) in object {
                let stack = parse_font_stack(stack, &format!("{path}.{name}"))?;
                tokens.font_family.insert(name.clone(), stack);
            }
        }
        Category::Colors => flatten_colors(object, None, path, &mut tokens.colors)?,
        Category::BackgroundImage => {
            for (name, value) in object {
                let value = expect_string(value, &format!("{path}.{name}"))?;
                tokens.background_image.insert(name.clone(), value);
            }
        }
        Category::Animation => {
            for (name, value) in object {
                let value = expect_string(value, &format!("{path}.{name}"))?;
                tokens.animation.insert(name.clone(), value);
            }
        }
        Category::Keyframes => {
            for (name, value) in object {
                let keyframes = parse_keyframes(value, &format!("{path}.{name}"))?;
                tokens.keyframes.insert(name.clone(), keyframes);
            }
        }
    }

    Ok(())
}

/// A font stack is an array of strings, or a single string.
fn parse_font_stack(value: &Value, path: &str) -> Result<Vec<String>, ConfigError> {
    match value {
        Value::String(family) => Ok(vec![family.clone()]),
        Value::Array(entries) => {
            if entries.is_empty() {
                return Err(ConfigError::invalid(path, "font stack is empty"));
            }
            entries
                .iter()
                .enumerate()
                .map(|(i, entry)| expect_string(entry, &format!("{path}[{i}]")))
                .collect()
        }
        other => Err(ConfigError::invalid(
            path,
            format!(
                "expected a font stack (array of strings), found {}",
                kind(other)
            ),
        )),
    }
}

/// Flattens nested palettes: `{blue: {DEFAULT: a, 500: b}}` becomes
/// `blue = a`, `blue-500 = b`.
fn flatten_colors(
    object: &Map<String, Value>,
    prefix: Option<&str>,
    path: &str,
    out: &mut IndexMap<String, String>,
) -> Result<(), ConfigError> {
    for (key, value) in object {
        let name = match prefix {
            Some(prefix) if key == DEFAULT_SHADE => prefix.to_string(),
            Some(prefix) => format!("{prefix}-{key}"),
            None => key.clone(),
        };
        let path = format!("{path}.{key}");

        match value {
            Value::String(color) => {
                out.insert(name, color.clone());
            }
            Value::Object(shades) => flatten_colors(shades, Some(&name), &path, out)?,
            other => {
                return Err(ConfigError::invalid(
                    path,
                    format!("expected a color string or palette, found {}", kind(other)),
                ))
            }
        }
    }
    Ok(())
}

fn parse_keyframes(value: &Value, path: &str) -> Result<Keyframes, ConfigError> {
    let steps = expect_object(value, path)?;
    let mut keyframes = Keyframes::new();

    for (selector, declarations) in steps {
        let step_path = format!("{path}[\"{selector}\"]");
        let declarations = expect_object(declarations, &step_path)?;
        let mut parsed = IndexMap::with_capacity(declarations.len());

        for (property, value) in declarations {
            let decl_path = format!("{step_path}.{property}");
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                other => {
                    return Err(ConfigError::invalid(
                        decl_path,
                        format!("expected a string or number, found {}", kind(other)),
                    ))
                }
            };
            parsed.insert(property.clone(), value);
        }

        keyframes.push(selector.clone(), parsed);
    }

    Ok(keyframes)
}

pub(crate) fn expect_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, ConfigError> {
    value.as_object().ok_or_else(|| {
        ConfigError::invalid(path, format!("expected an object, found {}", kind(value)))
    })
}

pub(crate) fn expect_string(value: &Value, path: &str) -> Result<String, ConfigError> {
    value.as_str().map(str::to_string).ok_or_else(|| {
        ConfigError::invalid(path, format!("expected a string, found {}", kind(value)))
    })
}

pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn invalid_path(result: Result<(TokenSet, Vec<Category>), ConfigError>) -> String {
        match result {
            Err(ConfigError::InvalidOverlay { path, .. }) => path,
            other => panic!("expected InvalidOverlay, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_revision_one_shape() {
        let value = json!({
            "fontFamily": {
                "roboto": ["Roboto", "sans-serif"],
                "taviraj": ["\"Taviraj\"", "serif"]
            },
            "colors": {},
            "animation": { "blink-color": "blink-color 2s infinite" },
            "keyframes": {
                "blink-color": {
                    "0%, 100%": { "color": "#FFD700" },
                    "33%": { "color": "#FF4500" },
                    "66%": { "color": "#00FF00" }
                }
            }
        });
        let (tokens, present) = parse_token_set(&value, "theme.extend").unwrap();

        assert_eq!(
            present,
            vec![
                Category::FontFamily,
                Category::Colors,
                Category::Animation,
                Category::Keyframes
            ]
        );
        assert_eq!(tokens.len(Category::FontFamily), 2);
        assert_eq!(tokens.len(Category::Colors), 0);
        assert_eq!(tokens.keyframes["blink-color"].len(), 3);
    }

    #[test]
    fn test_font_stack_single_string() {
        let value = json!({ "fontFamily": { "body": "Georgia" } });
        let (tokens, _) = parse_token_set(&value, "theme").unwrap();
        assert_eq!(tokens.font_family["body"], vec!["Georgia".to_string()]);
    }

    #[test]
    fn test_font_stack_non_string_entry() {
        let value = json!({ "fontFamily": { "roboto": ["Roboto", 42] } });
        assert_eq!(
            invalid_path(parse_token_set(&value, "theme.extend")),
            "theme.extend.fontFamily.roboto[1]"
        );
    }

    #[test]
    fn test_font_stack_empty_array() {
        let value = json!({ "fontFamily": { "roboto": [] } });
        assert!(parse_token_set(&value, "theme").is_err());
    }

    #[test]
    fn test_nested_color_palette() {
        let value = json!({
            "colors": {
                "pink": { "DEFAULT": "rgb(248,201,212)", "100": "#fce7f3", "deep": { "DEFAULT": "#9d174d" } },
                "gold": "#FFD700"
            }
        });
        let (tokens, _) = parse_token_set(&value, "theme").unwrap();

        assert_eq!(
            tokens.names(Category::Colors),
            vec!["pink", "pink-100", "pink-deep", "gold"]
        );
        assert_eq!(tokens.colors["pink-deep"], "#9d174d");
    }

    #[test]
    fn test_color_wrong_type() {
        let value = json!({ "colors": { "gold": true } });
        assert_eq!(invalid_path(parse_token_set(&value, "theme")), "theme.colors.gold");
    }

    #[test]
    fn test_unknown_category() {
        let value = json!({ "spacing": { "128": "32rem" } });
        assert_eq!(invalid_path(parse_token_set(&value, "theme.extend")), "theme.extend.spacing");
    }

    #[test]
    fn test_category_must_be_object() {
        let value = json!({ "backgroundImage": ["linear-gradient(white, black)"] });
        assert_eq!(
            invalid_path(parse_token_set(&value, "theme")),
            "theme.backgroundImage"
        );
    }

    #[test]
    fn test_keyframe_numeric_values() {
        let value = json!({ "keyframes": { "fade": { "from": { "opacity": 0 }, "to": { "opacity": 1 } } } });
        let (tokens, _) = parse_token_set(&value, "theme").unwrap();
        let fade = &tokens.keyframes["fade"];
        assert_eq!(fade.get("from").and_then(|s| s.get("opacity")), Some("0"));
    }

    #[test]
    fn test_keyframe_declarations_must_be_object() {
        let value = json!({ "keyframes": { "fade": { "from": "opacity: 0" } } });
        assert_eq!(
            invalid_path(parse_token_set(&value, "theme")),
            "theme.keyframes.fade[\"from\"]"
        );
    }
}
