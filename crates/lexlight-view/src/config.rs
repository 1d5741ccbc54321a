//! Viewer configuration.
//!
//! ## Learning: Serde for Serialization
//!
//! Every section derives `Serialize`/`Deserialize` and carries
//! `#[serde(default)]`, so a config file only needs the keys it changes:
//!
//! ```toml
//! [viewer]
//! theme = "light"
//!
//! [[detection.rules]]
//! language = "rust"
//! weight = 5
//! pattern = { kind = "word", pattern = "impl" }
//!
//! [styles.comment]
//! color = "#6a9955"
//! italic = true
//! ```

use lexlight_syntax::{DEFAULT_SAMPLE_BYTES, Detector, Language, Signature};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::{StyleTable, ViewError, ViewResult};

/// Main viewer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub viewer: ViewerConfig,

    /// Highlighting limits and overrides
    pub highlight: HighlightConfig,

    /// Language detection tuning
    pub detection: DetectionConfig,

    /// Per-role style overrides on top of the theme
    pub styles: HashMap<String, StyleOverride>,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from_default_path().unwrap_or_else(|err| {
            tracing::warn!("Failed to load config, using defaults: {}", err);
            Self::default()
        })
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> ViewResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    fn load_from_default_path() -> ViewResult<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> ViewResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ViewError::NoConfigDir)?;
        Ok(config_dir.join("lexlight").join("config.toml"))
    }

    /// Saves the config to the default location.
    pub fn save(&self) -> ViewResult<()> {
        self.save_to(Self::default_path()?)
    }

    /// Saves the config to `path`, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> ViewResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Builds a detector with the builtin signatures plus configured rules.
    pub fn detector(&self) -> Detector {
        let mut detector = Detector::new()
            .with_sample_bytes(self.detection.sample_bytes)
            .with_min_score(self.detection.min_score);
        detector.extend(self.detection.rules.iter().cloned());
        detector
    }

    /// The configured theme with style overrides applied.
    pub fn style_table(&self) -> ViewResult<StyleTable> {
        let mut table = StyleTable::by_name(&self.viewer.theme)?;
        table.apply_overrides(&self.styles)?;
        Ok(table)
    }

    /// The forced language, if one is configured.
    ///
    /// Unknown names are ignored with a warning so a typo does not turn all
    /// output into plain text.
    pub fn language_override(&self) -> Option<Language> {
        let name = self.highlight.language.as_deref()?;
        match name.parse() {
            Ok(language) => Some(language),
            Err(err) => {
                tracing::warn!("Ignoring configured language: {}", err);
                None
            }
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Show line numbers
    pub line_numbers: bool,

    /// Tab width in spaces
    pub tab_size: usize,

    /// Color theme name
    pub theme: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            line_numbers: true,
            tab_size: 4,
            theme: "dark".to_string(),
        }
    }
}

/// Highlighting settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Language used instead of detection
    pub language: Option<String>,

    /// Texts larger than this are shown unstyled
    pub max_bytes: usize,

    /// Number of highlighted texts kept in memory
    pub cache_capacity: usize,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            language: None,
            max_bytes: 8 * 1024 * 1024,
            cache_capacity: 16,
        }
    }
}

/// Language detection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Leading bytes inspected by the detector
    pub sample_bytes: usize,

    /// Minimum winning score; below it the text is plaintext
    pub min_score: u32,

    /// Extra signatures added to the builtin table
    pub rules: Vec<Signature>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            sample_bytes: DEFAULT_SAMPLE_BYTES,
            min_score: 1,
            rules: Vec::new(),
        }
    }
}

/// A partial style; unset fields keep the theme's value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverride {
    /// Hex color such as `#c586c0`
    pub color: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexlight_syntax::{Pattern, TokenKind};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.viewer.line_numbers);
        assert_eq!(config.viewer.tab_size, 4);
        assert_eq!(config.viewer.theme, "dark");
        assert_eq!(config.detection.sample_bytes, DEFAULT_SAMPLE_BYTES);
        assert!(config.language_override().is_none());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.highlight.language = Some("rust".to_string());
        config.detection.rules.push(Signature::new(
            Language::Ruby,
            Pattern::Word("puts".into()),
            3,
        ));
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file() {
        let config: Config = toml::from_str(
            r##"
            [viewer]
            theme = "light"

            [highlight]
            language = "py"

            [[detection.rules]]
            language = "sql"
            weight = 9
            pattern = { kind = "line_start", pattern = "PRAGMA" }

            [styles.keyword]
            color = "#ff0000"
            "##,
        )
        .unwrap();

        assert_eq!(config.viewer.theme, "light");
        assert!(config.viewer.line_numbers);
        assert_eq!(config.language_override(), Some(Language::Python));
        assert_eq!(config.detector().detect("PRAGMA foreign_keys = ON;"), Language::Sql);

        let table = config.style_table().unwrap();
        assert_eq!(table.get(TokenKind::Keyword).color.to_rgb8(), (255, 0, 0));
        assert!(!table.is_dark());
    }

    #[test]
    fn test_unknown_language_is_ignored() {
        let mut config = Config::default();
        config.highlight.language = Some("cobol".to_string());
        assert_eq!(config.language_override(), None);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.viewer.tab_size = 2;
        config.styles.insert(
            "string".to_string(),
            StyleOverride {
                italic: Some(true),
                ..StyleOverride::default()
            },
        );
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load_from(dir.path().join("missing.toml")),
            Err(ViewError::Io(_))
        ));

        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[viewer\ntheme = 1").unwrap();
        assert!(matches!(Config::load_from(&path), Err(ViewError::Parse(_))));
    }
}
