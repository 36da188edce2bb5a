//! Built-in base theme.
//!
//! A subset of the generator's default tokens: the font stacks, keyword
//! colors, gradient directions and stock animations that overlays extend.

use super::theme::Theme;
use super::tokens::{Keyframes, TokenSet};

const GRADIENT_DIRECTIONS: &[(&str, &str)] = &[
    ("gradient-to-t", "to top"),
    ("gradient-to-tr", "to top right"),
    ("gradient-to-r", "to right"),
    ("gradient-to-br", "to bottom right"),
    ("gradient-to-b", "to bottom"),
    ("gradient-to-bl", "to bottom left"),
    ("gradient-to-l", "to left"),
    ("gradient-to-tl", "to top left"),
];

/// Returns the built-in base theme.
pub fn base_theme() -> Theme {
    let mut tokens = TokenSet::new()
        .font_family(
            "sans",
            [
                "ui-sans-serif",
                "system-ui",
                "sans-serif",
                "\"Apple Color Emoji\"",
                "\"Segoe UI Emoji\"",
                "\"Segoe UI Symbol\"",
                "\"Noto Color Emoji\"",
            ],
        )
        .font_family(
            "serif",
            ["ui-serif", "Georgia", "Cambria", "\"Times New Roman\"", "Times", "serif"],
        )
        .font_family(
            "mono",
            [
                "ui-monospace",
                "SFMono-Regular",
                "Menlo",
                "Monaco",
                "Consolas",
                "\"Liberation Mono\"",
                "\"Courier New\"",
                "monospace",
            ],
        )
        .color("inherit", "inherit")
        .color("current", "currentColor")
        .color("transparent", "transparent")
        .color("black", "#000")
        .color("white", "#fff")
        .background_image("none", "none");

    for (name, direction) in GRADIENT_DIRECTIONS {
        tokens = tokens.background_image(
            name,
            format!("linear-gradient({direction}, var(--tw-gradient-stops))"),
        );
    }

    let tokens = tokens
        .animation("none", "none")
        .animation("spin", "spin 1s linear infinite")
        .animation("ping", "ping 1s cubic-bezier(0, 0, 0.2, 1) infinite")
        .animation("pulse", "pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite")
        .animation("bounce", "bounce 1s infinite")
        .keyframes(
            "spin",
            Keyframes::new().step("to", [("transform", "rotate(360deg)")]),
        )
        .keyframes(
            "ping",
            Keyframes::new().step("75%, 100%", [("transform", "scale(2)"), ("opacity", "0")]),
        )
        .keyframes("pulse", Keyframes::new().step("50%", [("opacity", ".5")]))
        .keyframes(
            "bounce",
            Keyframes::new()
                .step(
                    "0%, 100%",
                    [
                        ("transform", "translateY(-25%)"),
                        ("animationTimingFunction", "cubic-bezier(0.8, 0, 1, 1)"),
                    ],
                )
                .step(
                    "50%",
                    [
                        ("transform", "none"),
                        ("animationTimingFunction", "cubic-bezier(0, 0, 0.2, 1)"),
                    ],
                ),
        );

    Theme::from_tokens(tokens)
}
