use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::features::compression::DEFAULT_LEVEL;

/// Settings that shape how sequences are produced.
///
/// Every field is optional so an override file only needs the keys it
/// changes; the accessors supply the defaults.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Append a checksum tail when hiding (default: true)
    #[serde(default)]
    pub checksum: Option<bool>,
    /// Run the compression pass after hiding (default: false)
    #[serde(default)]
    pub compress: Option<bool>,
    /// gzip level, 0-9 (default: 6)
    #[serde(default)]
    pub compression_level: Option<u32>,
    /// File holding the key, `~` is expanded
    #[serde(default)]
    pub key_file: Option<String>,
}

impl Settings {
    pub fn checksum(&self) -> bool {
        self.checksum.unwrap_or(true)
    }

    pub fn compress(&self) -> bool {
        self.compress.unwrap_or(false)
    }

    pub fn compression_level(&self) -> u32 {
        self.compression_level.unwrap_or(DEFAULT_LEVEL).min(9)
    }

    /// The key file path with `~` expanded, if one is configured.
    pub fn key_file(&self) -> Option<PathBuf> {
        self.key_file
            .as_deref()
            .map(|path| PathBuf::from(shellexpand::tilde(path).as_ref()))
    }
}

/// Configuration loaded from TOML files.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct HiderConfig {
    #[serde(default)]
    pub settings: Settings,
}

impl HiderConfig {
    /// Parses a configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in configuration bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../letterveil.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in settings (from library)
    /// 2. `~/.config/letterveil/config.toml` (user overrides)
    /// 3. `./letterveil.toml` (project-local overrides)
    ///
    /// Later files override earlier ones key by key.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("letterveil").join("config.toml");
            config.merge_file(&user_config_path, "user");
        }

        config.merge_file(Path::new("letterveil.toml"), "local");

        Ok(config)
    }

    fn merge_file(&mut self, path: &Path, origin: &str) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => self.merge(other),
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load {} config from {:?}: {}",
                    origin, path, e
                );
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Settings present in `other` replace the ones in `self`.
    pub fn merge(&mut self, other: HiderConfig) {
        let settings = &mut self.settings;
        let other = other.settings;
        settings.checksum = other.checksum.or(settings.checksum);
        settings.compress = other.compress.or(settings.compress);
        settings.compression_level = other.compression_level.or(settings.compression_level);
        settings.key_file = other.key_file.or(settings.key_file.take());
    }
}
