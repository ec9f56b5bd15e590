//! Configuration management for Parley CLI
//!
//! Stores speech settings and the default scene in ~/.config/parley/config.toml

use anyhow::{Context, Result};
use parley::SpeechConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "parley";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Scene used when `--scene` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_scene: Option<PathBuf>,
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default)]
    pub speech: SpeechConfig,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_scene: None,
            color: default_color(),
            speech: SpeechConfig::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from the default path, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load without validating `[speech]`, so broken settings can still be
    /// shown and repaired
    pub fn load_unchecked() -> Result<Self> {
        Self::read_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Self::read_from(path)?;
        config
            .speech
            .validate()
            .with_context(|| format!("Invalid [speech] settings in {:?}", path))?;

        Ok(config)
    }

    fn read_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&content).with_context(|| "Failed to parse config file")
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content).with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Set the garbling glyph, rejecting ones that would leak words
    pub fn set_placeholder(&mut self, glyph: char) -> Result<()> {
        let speech = SpeechConfig {
            placeholder: glyph,
            ..self.speech.clone()
        };
        speech.validate()?;
        self.speech = speech;
        Ok(())
    }

    pub fn set_default_scene(&mut self, path: PathBuf) {
        self.default_scene = Some(path);
    }

    /// Resolve the scene to use (explicit or default)
    pub fn scene_path(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.default_scene.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert!(config.color);
        assert_eq!(config.speech, SpeechConfig::default());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.set_placeholder('#').unwrap();
        config.set_default_scene(PathBuf::from("scenes/tavern.toml"));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.speech.placeholder, '#');
        assert_eq!(loaded.default_scene, Some(PathBuf::from("scenes/tavern.toml")));
    }

    #[test]
    fn test_invalid_placeholder_rejected() {
        let mut config = Config::default();
        assert!(config.set_placeholder('a').is_err());
        assert_eq!(config.speech.placeholder, '*');
    }

    #[test]
    fn test_partial_speech_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "color = false\n\n[speech]\nplaceholder = \"-\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.color);
        assert_eq!(config.speech.placeholder, '-');
        assert_eq!(config.speech.escapes, SpeechConfig::default().escapes);
    }

    #[test]
    fn test_broken_glyph_can_be_repaired() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[speech]\nplaceholder = \"x\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());

        let mut config = Config::read_from(&path).unwrap();
        assert_eq!(config.speech.placeholder, 'x');
        config.set_placeholder('#').unwrap();
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap().speech.placeholder, '#');
    }

    #[test]
    fn test_scene_path_precedence() {
        let mut config = Config::default();
        assert_eq!(config.scene_path(None), None);

        config.set_default_scene(PathBuf::from("default.toml"));
        assert_eq!(config.scene_path(None), Some(PathBuf::from("default.toml")));
        assert_eq!(
            config.scene_path(Some(Path::new("other.toml"))),
            Some(PathBuf::from("other.toml"))
        );
    }
}
