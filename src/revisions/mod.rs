//! The site's three configuration revisions, embedded as YAML.
//!
//! Each revision is an independent deployment variant; none inherits from
//! another.

use crate::config::{Config, ConfigFormat};
use crate::error::ConfigError;

const REVISION_1: &str = include_str!("revision_1.yaml");
const REVISION_2: &str = include_str!("revision_2.yaml");
const REVISION_3: &str = include_str!("revision_3.yaml");

/// One embedded configuration revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Revision {
    /// Roboto and Taviraj fonts, two gradients, the `blink-color` animation.
    First,
    /// Roboto only, two gradients, no animation.
    Second,
    /// No fonts, the `vertical-to-pink` gradient only.
    Third,
}

impl Revision {
    /// All revisions in order.
    pub const ALL: [Revision; 3] = [Revision::First, Revision::Second, Revision::Third];

    /// Returns the registry name, e.g. `revision-1`.
    pub fn name(self) -> &'static str {
        match self {
            Revision::First => "revision-1",
            Revision::Second => "revision-2",
            Revision::Third => "revision-3",
        }
    }

    /// Returns the embedded YAML source.
    pub fn source(self) -> &'static str {
        match self {
            Revision::First => REVISION_1,
            Revision::Second => REVISION_2,
            Revision::Third => REVISION_3,
        }
    }

    /// Parses the embedded configuration.
    pub fn config(self) -> Result<Config, ConfigError> {
        Config::parse(self.source(), ConfigFormat::Yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Category;

    #[test]
    fn test_all_revisions_parse() {
        for revision in Revision::ALL {
            let config = revision.config().unwrap();
            assert_eq!(
                config.content_scope().patterns().collect::<Vec<_>>(),
                vec!["../*.rs"],
                "{}",
                revision.name()
            );
            assert!(config.plugins().is_empty());
            assert_eq!(config.overlay().tokens().len(Category::Colors), 0);
            assert!(config.overlay().validate().is_ok());
        }
    }

    #[test]
    fn test_fonts_and_backgrounds_shrink() {
        let counts: Vec<(usize, usize)> = Revision::ALL
            .iter()
            .map(|r| {
                let config = r.config().unwrap();
                let tokens = config.overlay().tokens();
                (
                    tokens.len(Category::FontFamily),
                    tokens.len(Category::BackgroundImage),
                )
            })
            .collect();

        assert_eq!(counts, vec![(2, 2), (1, 2), (0, 1)]);
    }

    #[test]
    fn test_only_first_revision_animates() {
        for revision in Revision::ALL {
            let config = revision.config().unwrap();
            let animates = config.overlay().tokens().len(Category::Animation) > 0;
            assert_eq!(animates, revision == Revision::First);
        }
    }
}
