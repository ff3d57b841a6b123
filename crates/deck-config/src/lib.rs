//! Configuration management for deck.
//!
//! Parses `deck.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `html.theme`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override container marker character.
    pub container_marker: Option<char>,
    /// Override directive marker character.
    pub directive_marker: Option<char>,
    /// Override default container tag.
    pub default_container_tag: Option<String>,
    /// Override highlight enabled flag.
    pub highlight: Option<bool>,
    /// Override full-document output flag.
    pub full_document: Option<bool>,
    /// Override theme name.
    pub theme: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "deck.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Markup dialect configuration.
    pub markup: MarkupConfig,
    /// HTML output configuration.
    pub html: HtmlConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Markup dialect configuration.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MarkupConfig {
    /// Container marker character.
    pub container_marker: char,
    /// Directive shorthand marker character.
    pub directive_marker: char,
    /// Tag used for containers whose selector names no tag.
    pub default_container_tag: String,
    /// Whether `==highlight==` parsing is enabled.
    pub highlight: bool,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            container_marker: ':',
            directive_marker: '@',
            default_container_tag: "div".to_owned(),
            highlight: true,
        }
    }
}

/// HTML output configuration.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HtmlConfig {
    /// Wrap rendered fragments in a full HTML document.
    pub full_document: bool,
    /// Theme name, referenced from the full-document shell.
    pub theme: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`html.theme`").
        field: String,
        /// Error message (e.g., "${`DECK_THEME`} not set").
        message: String,
    },
}

/// Require a marker to be a single ASCII punctuation character.
///
/// `<` is additionally rejected (a directive marker of `<` would let the
/// generated comment lines re-match the shorthand pattern), as are the
/// fence characters `` ` `` and `~` (a marker run would be swallowed as a
/// code fence opener before directive processing sees it).
fn require_marker(marker: char, field: &str) -> Result<(), ConfigError> {
    if !marker.is_ascii_punctuation() {
        return Err(ConfigError::Validation(format!(
            "{field} must be an ASCII punctuation character"
        )));
    }
    if matches!(marker, '<' | '`' | '~') {
        return Err(ConfigError::Validation(format!(
            "{field} cannot be '{marker}'"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `deck.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(marker) = settings.container_marker {
            self.markup.container_marker = marker;
        }
        if let Some(marker) = settings.directive_marker {
            self.markup.directive_marker = marker;
        }
        if let Some(tag) = &settings.default_container_tag {
            self.markup.default_container_tag.clone_from(tag);
        }
        if let Some(highlight) = settings.highlight {
            self.markup.highlight = highlight;
        }
        if let Some(full_document) = settings.full_document {
            self.html.full_document = full_document;
        }
        if let Some(theme) = &settings.theme {
            self.html.theme = Some(theme.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.validate()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_marker(self.markup.container_marker, "markup.container_marker")?;
        require_marker(self.markup.directive_marker, "markup.directive_marker")?;

        if self.markup.container_marker == self.markup.directive_marker {
            return Err(ConfigError::Validation(
                "markup.container_marker and markup.directive_marker must differ".to_owned(),
            ));
        }

        let tag = &self.markup.default_container_tag;
        if tag.is_empty() || !tag.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            return Err(ConfigError::Validation(
                "markup.default_container_tag must be a non-empty alphanumeric tag name"
                    .to_owned(),
            ));
        }

        if let Some(theme) = &self.html.theme
            && theme.is_empty()
        {
            return Err(ConfigError::Validation(
                "html.theme cannot be empty".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(theme) = &self.html.theme {
            let expanded = expand::expand_env(theme, "html.theme")?;
            // "${VAR:-}" with VAR unset expands to nothing: no theme.
            self.html.theme = (!expanded.is_empty()).then_some(expanded);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.markup.container_marker, ':');
        assert_eq!(config.markup.directive_marker, '@');
        assert_eq!(config.markup.default_container_tag, "div");
        assert!(config.markup.highlight);
        assert!(!config.html.full_document);
        assert_eq!(config.html.theme, None);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.markup, MarkupConfig::default());
        assert_eq!(config.html, HtmlConfig::default());
    }

    #[test]
    fn test_parse_markup_config() {
        let toml = r#"
[markup]
container_marker = "+"
directive_marker = "%"
default_container_tag = "section"
highlight = false
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.markup.container_marker, '+');
        assert_eq!(config.markup.directive_marker, '%');
        assert_eq!(config.markup.default_container_tag, "section");
        assert!(!config.markup.highlight);
    }

    #[test]
    fn test_parse_html_config() {
        let toml = r#"
[html]
full_document = true
theme = "gaia"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.html.full_document);
        assert_eq!(config.html.theme.as_deref(), Some("gaia"));
    }

    #[test]
    fn test_validate_rejects_identical_markers() {
        let mut config = Config::default();
        config.markup.directive_marker = ':';
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_punctuation_marker() {
        let mut config = Config::default();
        config.markup.container_marker = 'a';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_comment_opening_marker() {
        let mut config = Config::default();
        config.markup.directive_marker = '<';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_fence_characters_as_markers() {
        for marker in ['`', '~'] {
            let mut config = Config::default();
            config.markup.directive_marker = marker;
            assert!(config.validate().is_err(), "{marker} accepted as marker");
        }
    }

    #[test]
    fn test_validate_rejects_bad_tag() {
        let mut config = Config::default();
        config.markup.default_container_tag = String::new();
        assert!(config.validate().is_err());

        config.markup.default_container_tag = "my tag".to_owned();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.toml");
        std::fs::write(&path, "[markup]\ncontainer_marker = \"+\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.markup.container_marker, '+');
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let result = Config::load(Some(Path::new("/nonexistent/deck.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.toml");
        std::fs::write(&path, "[markup\n").unwrap();

        assert!(matches!(
            Config::load(Some(&path), None),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_cli_settings_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.toml");
        std::fs::write(&path, "[html]\ntheme = \"gaia\"\n").unwrap();

        let settings = CliSettings {
            theme: Some("uncover".to_owned()),
            highlight: Some(false),
            ..CliSettings::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.html.theme.as_deref(), Some("uncover"));
        assert!(!config.markup.highlight);
    }

    #[test]
    fn test_cli_settings_validated() {
        let settings = CliSettings {
            container_marker: Some('a'),
            ..CliSettings::default()
        };
        let mut config = Config::default();
        config.apply_cli_settings(&settings);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_theme_empty_default_means_no_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.toml");
        std::fs::write(
            &path,
            "[html]\ntheme = \"${DECK_TEST_UNSET_THEME:-}\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.html.theme, None);
    }

    #[test]
    fn test_theme_env_default_expansion() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.toml");
        std::fs::write(
            &path,
            "[html]\ntheme = \"${DECK_TEST_UNSET_THEME:-gaia}\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.html.theme.as_deref(), Some("gaia"));
    }
}
