use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use folio::i18n::Language;

pub const MIN_SIDEBAR_WIDTH: u16 = 20;
pub const MAX_SIDEBAR_WIDTH: u16 = 60;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_language() -> String {
    Language::default().code().to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_sidebar_width() -> u16 {
    28
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            language: default_language(),
            log_level: default_log_level(),
            sidebar_width: default_sidebar_width(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let mut config: Config = toml::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?;
            config.normalize();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
            .join("config.toml")
    }

    /// Fix up values a hand-edited file may get wrong: unknown languages fall
    /// back to the default and the sidebar width is clamped.
    pub fn normalize(&mut self) {
        self.normalize_language();
        self.sidebar_width = self
            .sidebar_width
            .clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH);
    }

    pub fn normalize_language(&mut self) {
        self.language = match Language::from_code(&self.language) {
            Some(lang) => lang.code().to_string(),
            None => default_language(),
        };
    }

    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "catppuccin-mocha");
        assert_eq!(config.language, "ko");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.sidebar_width, 28);
    }

    #[test]
    fn test_config_partial_file_keeps_other_defaults() {
        let toml_str = r#"
theme = "gruvbox-dark"
language = "en"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "gruvbox-dark");
        assert_eq!(config.language(), Language::En);
        assert_eq!(config.sidebar_width, 28);
    }

    #[test]
    fn test_normalize_language_unknown_resets() {
        let mut config = Config {
            language: "fr".to_string(),
            ..Config::default()
        };
        config.normalize_language();
        assert_eq!(config.language, "ko");
    }

    #[test]
    fn test_normalize_language_accepts_region_codes() {
        let mut config = Config {
            language: "en-US".to_string(),
            ..Config::default()
        };
        config.normalize_language();
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_sidebar_width_clamped() {
        let mut config = Config {
            sidebar_width: 5,
            ..Config::default()
        };
        config.normalize();
        assert_eq!(config.sidebar_width, MIN_SIDEBAR_WIDTH);

        config.sidebar_width = 200;
        config.normalize();
        assert_eq!(config.sidebar_width, MAX_SIDEBAR_WIDTH);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "language = \"kr\"\nsidebar_width = 100\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.language, "ko");
        assert_eq!(config.sidebar_width, MAX_SIDEBAR_WIDTH);
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.theme, "catppuccin-mocha");
    }

    #[test]
    fn test_load_from_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "sidebar_width = \"wide\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
