//! CSS value checks applied to every overlay value before merging.

use cssparser::{ParseError, ParseErrorKind, Parser, ParserInput, Token};

use crate::error::ConfigError;
use crate::theme::{Category, TokenSet};

/// Validates every token of `tokens`, reporting paths under `prefix`.
pub(crate) fn validate_tokens(tokens: &TokenSet, prefix: &str) -> Result<(), ConfigError> {
    for (name, stack) in &tokens.font_family {
        let path = format!("{prefix}.{}.{name}", Category::FontFamily);
        if stack.is_empty() {
            return Err(ConfigError::invalid(path, "font stack is empty"));
        }
        for (i, family) in stack.iter().enumerate() {
            check_value(&format!("{path}[{i}]"), family)?;
        }
    }

    let plain = [
        (Category::Colors, &tokens.colors),
        (Category::BackgroundImage, &tokens.background_image),
        (Category::Animation, &tokens.animation),
    ];
    for (category, values) in plain {
        for (name, value) in values {
            check_value(&format!("{prefix}.{category}.{name}"), value)?;
        }
    }

    for (name, keyframes) in &tokens.keyframes {
        let path = format!("{prefix}.{}.{name}", Category::Keyframes);
        for step in keyframes.steps() {
            let step_path = format!("{path}[\"{}\"]", step.selector());
            check_selector(&step_path, step.selector())?;
            for (property, value) in step.declarations() {
                let decl_path = format!("{step_path}.{property}");
                check_property(&decl_path, property)?;
                check_value(&decl_path, value)?;
            }
        }
    }

    Ok(())
}

/// Checks that `value` is a single, self-contained CSS property value.
pub(crate) fn check_value(path: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::invalid(path, "value is empty"));
    }

    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    check_tokens(&mut parser).map_err(|reason| ConfigError::invalid(path, reason))
}

fn check_tokens(parser: &mut Parser<'_, '_>) -> Result<(), String> {
    loop {
        let start = parser.position();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(()),
        };

        match token {
            Token::BadString(_) => return Err("unterminated string".to_string()),
            Token::BadUrl(_) => return Err("malformed url()".to_string()),
            Token::Semicolon => return Err("unexpected ';'".to_string()),
            Token::CurlyBracketBlock => return Err("unexpected '{'".to_string()),
            Token::CloseCurlyBracket => return Err("unexpected '}'".to_string()),
            Token::CloseParenthesis => return Err("unbalanced ')'".to_string()),
            Token::CloseSquareBracket => return Err("unbalanced ']'".to_string()),
            // The tokenizer accepts strings, urls and comments cut off by
            // the end of input, so check the raw source for the terminator.
            Token::QuotedString(_) => {
                let source = parser.slice_from(start);
                let terminated = source.len() >= 2
                    && source
                        .chars()
                        .next()
                        .is_some_and(|quote| is_closed(source, quote));
                if !terminated {
                    return Err("unterminated string".to_string());
                }
            }
            Token::UnquotedUrl(_) => {
                if !is_closed(parser.slice_from(start), ')') {
                    return Err("missing closing ')'".to_string());
                }
            }
            Token::Comment(_) => {
                let source = parser.slice_from(start);
                if source.len() < 4 || !source.ends_with("*/") {
                    return Err("unterminated comment".to_string());
                }
            }
            Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock => {
                let close = if matches!(token, Token::SquareBracketBlock) {
                    ']'
                } else {
                    ')'
                };
                let content_end = parser
                    .parse_nested_block(|nested| {
                        check_tokens(nested)
                            .map(|()| nested.position())
                            .map_err(|reason| nested.new_custom_error(reason))
                    })
                    .map_err(describe)?;
                if !parser.slice_from(content_end).starts_with(close) {
                    return Err(format!("missing closing '{close}'"));
                }
            }
            _ => {}
        }
    }
}

/// Returns true when `source` ends with an unescaped `close`.
fn is_closed(source: &str, close: char) -> bool {
    match source.strip_suffix(close) {
        Some(rest) => rest.chars().rev().take_while(|&c| c == '\\').count() % 2 == 0,
        None => false,
    }
}

fn describe(err: ParseError<'_, String>) -> String {
    match err.kind {
        ParseErrorKind::Custom(reason) => reason,
        ParseErrorKind::Basic(kind) => format!("{kind:?}"),
    }
}

/// Checks a keyframe selector: a comma-separated list of `from`, `to` or
/// percentages between 0% and 100%.
pub(crate) fn check_selector(path: &str, selector: &str) -> Result<(), ConfigError> {
    for part in selector.split(',') {
        let part = part.trim();
        let valid = part.eq_ignore_ascii_case("from")
            || part.eq_ignore_ascii_case("to")
            || part
                .strip_suffix('%')
                .and_then(|n| n.trim().parse::<f64>().ok())
                .is_some_and(|n| (0.0..=100.0).contains(&n));

        if !valid {
            return Err(ConfigError::invalid(
                path,
                format!("'{part}' is not a keyframe selector"),
            ));
        }
    }
    Ok(())
}

fn check_property(path: &str, property: &str) -> Result<(), ConfigError> {
    let valid = !property.is_empty()
        && property
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            path,
            format!("'{property}' is not a CSS property name"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Keyframes;

    fn reason(result: Result<(), ConfigError>) -> String {
        match result {
            Err(ConfigError::InvalidOverlay { reason, .. }) => reason,
            other => panic!("expected InvalidOverlay, got {other:?}"),
        }
    }

    #[test]
    fn test_accepts_real_values() {
        for value in [
            "linear-gradient(to bottom, white, rgb(248,201,212))",
            "\"Taviraj\"",
            "blink-color 2s infinite",
            "#FFD700",
            "url(\"/img/hero.png\")",
            "linear-gradient(to right, var(--tw-gradient-stops))",
            "0.5",
        ] {
            assert!(check_value("v", value).is_ok(), "{value} should be accepted");
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(reason(check_value("v", "  ")), "value is empty");
    }

    #[test]
    fn test_rejects_declaration_escape() {
        assert_eq!(reason(check_value("v", "red; display: none")), "unexpected ';'");
        assert_eq!(reason(check_value("v", "red } body {")), "unexpected '}'");
    }

    #[test]
    fn test_rejects_unbalanced_parenthesis() {
        assert_eq!(reason(check_value("v", "white)")), "unbalanced ')'");
    }

    #[test]
    fn test_rejects_problems_inside_functions() {
        assert_eq!(reason(check_value("v", "rgb(1, 2; 3)")), "unexpected ';'");
    }

    #[test]
    fn test_rejects_unclosed_function() {
        assert_eq!(
            reason(check_value("v", "linear-gradient(to bottom, white")),
            "missing closing ')'"
        );
        assert_eq!(
            reason(check_value("v", "linear-gradient(to bottom, white, rgb(248,201,212)")),
            "missing closing ')'"
        );
        assert_eq!(reason(check_value("v", "[a")), "missing closing ']'");
    }

    #[test]
    fn test_rejects_unclosed_url() {
        assert_eq!(reason(check_value("v", "url(\"/a.png\"")), "missing closing ')'");
        assert!(check_value("v", "url(/a.png").is_err());
        assert!(check_value("v", "url(/a.png)").is_ok());
    }

    #[test]
    fn test_rejects_unterminated_string() {
        assert_eq!(reason(check_value("v", "\"Taviraj")), "unterminated string");
        assert_eq!(reason(check_value("v", "'Taviraj")), "unterminated string");
        assert_eq!(reason(check_value("v", "\"Taviraj\\\"")), "unterminated string");
        assert!(check_value("v", "'Taviraj'").is_ok());
    }

    #[test]
    fn test_rejects_unterminated_comment() {
        assert_eq!(reason(check_value("v", "white /* accent")), "unterminated comment");
        assert!(check_value("v", "white /* accent */").is_ok());
    }

    #[test]
    fn test_selectors() {
        assert!(check_selector("s", "0%, 100%").is_ok());
        assert!(check_selector("s", "from").is_ok());
        assert!(check_selector("s", "TO").is_ok());
        assert!(check_selector("s", "33.5%").is_ok());
        assert!(check_selector("s", "120%").is_err());
        assert!(check_selector("s", "33").is_err());
        assert!(check_selector("s", "").is_err());
    }

    #[test]
    fn test_validate_tokens_reports_path() {
        let tokens = TokenSet::new().keyframes(
            "blink-color",
            Keyframes::new().step("33%", [("color", "")]),
        );
        let err = validate_tokens(&tokens, "theme.extend").unwrap_err();
        match err {
            ConfigError::InvalidOverlay { path, .. } => {
                assert_eq!(path, "theme.extend.keyframes.blink-color[\"33%\"].color");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_validate_tokens_rejects_empty_stack() {
        let tokens = TokenSet::new().font_family("roboto", Vec::<String>::new());
        assert_eq!(reason(validate_tokens(&tokens, "theme")), "font stack is empty");
    }

    #[test]
    fn test_validate_tokens_rejects_bad_property() {
        let tokens = TokenSet::new().keyframes(
            "fade",
            Keyframes::new().step("to", [("opacity: 0", "1")]),
        );
        assert!(validate_tokens(&tokens, "theme").is_err());
    }
}
