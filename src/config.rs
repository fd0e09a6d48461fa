//! User settings persisted as TOML under the platform config directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::models::{MergePolicy, StorageConfig};

const APP_DIR: &str = "snipvault";
const FILENAME: &str = "config.toml";

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Folder holding `snippets.json`; the platform data dir when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Conflict handling for merge imports
    #[serde(default)]
    pub merge_policy: MergePolicy,
    /// Editor command used by `storage open`, ahead of $VISUAL/$EDITOR
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_dir: None,
            log_level: default_log_level(),
            merge_policy: MergePolicy::default(),
            editor: None,
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(FILENAME);
        path
    }

    /// Load from the default location; a missing file yields defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }
        let contents =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file to {}", path.display()))?;
        info!(path = %path.display(), "Settings saved");
        Ok(())
    }

    /// `override_dir` (from the command line) wins over the saved folder
    pub fn storage(&self, override_dir: Option<&Path>) -> StorageConfig {
        match override_dir.or(self.storage_dir.as_deref()) {
            Some(dir) => StorageConfig::new(dir),
            None => StorageConfig::default_location(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load_from(&tmp.path().join("nope.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "merge_policy = \"overwrite\"\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();

        assert_eq!(settings.merge_policy, MergePolicy::Overwrite);
        assert_eq!(settings.log_level, "warn");
        assert!(settings.storage_dir.is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.toml");
        let settings = Settings {
            storage_dir: Some(tmp.path().join("store")),
            editor: Some("code --wait".to_string()),
            ..Settings::default()
        };

        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "log_level = [").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_storage_override_wins() {
        let settings = Settings {
            storage_dir: Some(PathBuf::from("/saved")),
            ..Settings::default()
        };

        assert_eq!(settings.storage(None).dir, PathBuf::from("/saved"));
        assert_eq!(
            settings.storage(Some(Path::new("/flag"))).dir,
            PathBuf::from("/flag")
        );
    }
}
