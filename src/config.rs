//! Build Configuration - Explicit Options
//!
//! Every recognized option and its default is enumerated here. Validation
//! runs once at pipeline entry, before any filesystem access.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Font name must not be empty")]
    EmptyFontName,

    #[error("Font name must start with an ASCII letter: {0:?}")]
    InvalidFontName(String),

    #[error("Base code point must be non-zero")]
    ZeroBaseCodePoint,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Directory of source vector icons, one icon per file.
    pub source_dir: PathBuf,
    /// Root of the destination tree. Each target writes a disjoint subtree.
    pub output_dir: PathBuf,
    /// Target font name, used in artifact names and identifier fixups.
    pub font_name: String,
    /// First code point; icon N in enumeration order gets `base + N`.
    #[serde(default = "default_base_code_point")]
    pub base_code_point: u32,
    #[serde(default)]
    pub targets: TargetFlags,
    /// Optimizer plugins appended after the built-in defaults.
    #[serde(default)]
    pub extra_plugins: Vec<String>,
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

fn default_base_code_point() -> u32 {
    0xE001
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetFlags {
    #[serde(default = "default_true")]
    pub json: bool,
    #[serde(default = "default_true")]
    pub css: bool,
    #[serde(default = "default_true")]
    pub react: bool,
    #[serde(default = "default_true")]
    pub react_native: bool,
    #[serde(default = "default_true")]
    pub flutter: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TargetFlags {
    fn default() -> Self {
        Self {
            json: true,
            css: true,
            react: true,
            react_native: true,
            flutter: true,
        }
    }
}

impl TargetFlags {
    /// Registry-only run: nothing enabled.
    pub fn none() -> Self {
        Self {
            json: false,
            css: false,
            react: false,
            react_native: false,
            flutter: false,
        }
    }
}

/// What to do when two source files share one icon name (e.g. `home.svg`
/// and `home.SVG` in the same directory).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Fail the run before any extraction work starts.
    #[default]
    Reject,
    /// The later source (in enumeration order) replaces the earlier one.
    LastWriteWins,
}

impl BuildConfig {
    pub fn new(source_dir: PathBuf, output_dir: PathBuf, font_name: &str) -> Self {
        Self {
            source_dir,
            output_dir,
            font_name: font_name.to_string(),
            base_code_point: default_base_code_point(),
            targets: TargetFlags::default(),
            extra_plugins: vec![],
            duplicates: DuplicatePolicy::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.font_name.is_empty() {
            return Err(ConfigError::EmptyFontName);
        }
        if !self.font_name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidFontName(self.font_name.clone()));
        }
        if self.base_code_point == 0 {
            return Err(ConfigError::ZeroBaseCodePoint);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(font_name: &str) -> BuildConfig {
        BuildConfig::new(PathBuf::from("icons"), PathBuf::from("dist"), font_name)
    }

    #[test]
    fn default_config_is_valid() {
        assert!(config("myfont").validate().is_ok());
    }

    #[test]
    fn rejects_empty_font_name() {
        let err = config("").validate().unwrap_err();
        assert!(matches!(err, ConfigError::EmptyFontName));
    }

    #[test]
    fn rejects_leading_digit_font_name() {
        let err = config("7seg").validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFontName(_)));
    }

    #[test]
    fn rejects_zero_base_code_point() {
        let mut cfg = config("myfont");
        cfg.base_code_point = 0;
        assert!(matches!(
            cfg.validate().unwrap_err(),
            ConfigError::ZeroBaseCodePoint
        ));
    }

    #[test]
    fn deserializes_with_defaults() {
        let cfg: BuildConfig = serde_json::from_str(
            r#"{"sourceDir": "icons", "outputDir": "dist", "fontName": "myfont"}"#,
        )
        .unwrap();
        assert_eq!(cfg.base_code_point, 0xE001);
        assert!(cfg.targets.flutter);
        assert!(cfg.extra_plugins.is_empty());
        assert_eq!(cfg.duplicates, DuplicatePolicy::Reject);
    }
}
