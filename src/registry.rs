//! Named configuration variants.
//!
//! A site may keep several independent configurations (its revisions, a
//! print palette) and pick one at build time. [`VariantRegistry`] maps a
//! variant name to a parsed [`Config`]; loading one variant never sees the
//! others.
//!
//! Variants come from three places:
//!
//! - the embedded revisions ([`VariantRegistry::with_revisions`])
//! - configurations built in code ([`VariantRegistry::add`])
//! - configuration files, named by their file stem
//!   ([`VariantRegistry::add_file`], [`VariantRegistry::add_dir`])
//!
//! # Example
//!
//! ```rust
//! use tokenwind::{ThemeResolver, VariantRegistry};
//!
//! let registry = VariantRegistry::with_revisions().unwrap();
//! let config = registry.get("revision-2").unwrap();
//! let theme = ThemeResolver::default().load_config(config).unwrap();
//!
//! assert!(theme.font_family("taviraj").is_err());
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{Config, ConfigFormat};
use crate::error::ConfigError;
use crate::revisions::Revision;

/// Error type for variant registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A configuration file would reuse a name already registered.
    #[error("variant \"{name}\" is already registered (while adding {})", path.display())]
    Duplicate { name: String, path: PathBuf },

    /// No variant with this name is registered.
    #[error("variant not found: \"{name}\"")]
    NotFound { name: String },

    /// The variant's configuration failed to load.
    #[error("variant \"{name}\" failed to load: {source}")]
    Config {
        name: String,
        #[source]
        source: ConfigError,
    },

    /// A configuration directory could not be listed.
    #[error("failed to read variant directory '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Named configurations selected at build time.
#[derive(Debug, Clone, Default)]
pub struct VariantRegistry {
    variants: BTreeMap<String, Config>,
}

impl VariantRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the embedded revisions as
    /// `revision-1`, `revision-2` and `revision-3`.
    pub fn with_revisions() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for revision in Revision::ALL {
            let config = revision.config().map_err(|source| RegistryError::Config {
                name: revision.name().to_string(),
                source,
            })?;
            registry.add(revision.name(), config);
        }
        Ok(registry)
    }

    /// Registers `config` under `name`, returning the configuration it
    /// replaced.
    pub fn add(&mut self, name: impl Into<String>, config: Config) -> Option<Config> {
        self.variants.insert(name.into(), config)
    }

    /// Reads a configuration file and registers it under its file stem
    /// (`print.yaml` becomes `print`). Returns the registered name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the name is taken and
    /// [`RegistryError::Config`] if the file cannot be loaded.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<String, RegistryError> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        if self.variants.contains_key(&name) {
            return Err(RegistryError::Duplicate {
                name,
                path: path.to_path_buf(),
            });
        }

        let config = Config::from_path(path).map_err(|source| RegistryError::Config {
            name: name.clone(),
            source,
        })?;
        tracing::debug!(variant = %name, path = %path.display(), "registered variant");
        self.variants.insert(name.clone(), config);
        Ok(name)
    }

    /// Registers every JSON or YAML file directly inside `dir`.
    ///
    /// Files are added in name order; other files and subdirectories are
    /// skipped. Returns the registered names.
    pub fn add_dir(&mut self, dir: impl AsRef<Path>) -> Result<Vec<String>, RegistryError> {
        let dir = dir.as_ref();
        let io_error = |source: std::io::Error| RegistryError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.is_file() && ConfigFormat::from_path(&path).is_some() {
                paths.push(path);
            }
        }
        paths.sort();

        paths.iter().map(|path| self.add_file(path)).collect()
    }

    /// Looks up a variant by name.
    pub fn get(&self, name: &str) -> Result<&Config, RegistryError> {
        self.variants
            .get(name)
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    /// Returns the number of registered variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns true when no variant is registered.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContentScope;
    use crate::overlay::Overlay;
    use crate::theme::Category;

    fn inline_config(glob: &str) -> Config {
        Config::new(ContentScope::new([glob]).unwrap(), Overlay::default())
    }

    #[test]
    fn test_add_and_get() {
        let mut registry = VariantRegistry::new();
        assert!(registry.add("site", inline_config("../*.rs")).is_none());

        assert_eq!(registry.len(), 1);
        let config = registry.get("site").unwrap();
        assert!(config.content_scope().matches("../main.rs"));
    }

    #[test]
    fn test_add_replaces_and_returns_previous() {
        let mut registry = VariantRegistry::new();
        registry.add("site", inline_config("*.html"));
        let previous = registry.add("site", inline_config("*.rs")).unwrap();

        assert!(previous.content_scope().matches("index.html"));
        assert!(registry.get("site").unwrap().content_scope().matches("main.rs"));
    }

    #[test]
    fn test_not_found() {
        let registry = VariantRegistry::new();
        assert!(matches!(
            registry.get("missing"),
            Err(RegistryError::NotFound { ref name }) if name == "missing"
        ));
    }

    #[test]
    fn test_add_dir_registers_config_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("seasonal")).unwrap();
        std::fs::write(
            dir.path().join("print.yaml"),
            "content: ['*.html']\ntheme:\n  extend:\n    colors:\n      ink: '#111'\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("winter.json"),
            r##"{ "content": ["*.rs"], "theme": { "extend": { "colors": { "snow": "#fff" } } } }"##,
        )
        .unwrap();
        std::fs::write(dir.path().join("seasonal/summer.json"), "{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a config").unwrap();

        let mut registry = VariantRegistry::new();
        let names = registry.add_dir(dir.path()).unwrap();

        assert_eq!(names, vec!["print", "winter"]);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["print", "winter"]);
        let winter = registry.get("winter").unwrap();
        assert_eq!(winter.overlay().tokens().names(Category::Colors), vec!["snow"]);
        assert!(registry.get("notes").is_err());
        assert!(registry.get("summer").is_err());
    }

    #[test]
    fn test_add_file_duplicate_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("print.yaml"), "content: ['*.html']\n").unwrap();
        std::fs::write(dir.path().join("print.json"), "{}").unwrap();

        let mut registry = VariantRegistry::new();
        match registry.add_dir(dir.path()) {
            Err(RegistryError::Duplicate { name, path }) => {
                assert_eq!(name, "print");
                assert!(path.ends_with("print.yaml"));
            }
            other => panic!("expected duplicate, got {other:?}"),
        }
    }

    #[test]
    fn test_add_file_reports_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut registry = VariantRegistry::new();
        match registry.add_file(&path) {
            Err(RegistryError::Config { name, source }) => {
                assert_eq!(name, "broken");
                assert!(matches!(source, ConfigError::Parse { .. }));
            }
            other => panic!("expected config error, got {other:?}"),
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_dir_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("themes");

        let mut registry = VariantRegistry::new();
        match registry.add_dir(&missing) {
            Err(RegistryError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_revisions() {
        let registry = VariantRegistry::with_revisions().unwrap();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["revision-1", "revision-2", "revision-3"]
        );
    }

    #[test]
    fn test_error_display_duplicate() {
        let err = RegistryError::Duplicate {
            name: "print".to_string(),
            path: PathBuf::from("/themes/print.json"),
        };

        let display = err.to_string();
        assert!(display.contains("print"));
        assert!(display.contains("/themes/print.json"));
    }
}
