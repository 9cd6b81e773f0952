use std::path::Path;

use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Skip entries whose name starts with `.` when rendering listings
    #[serde(default = "default_hide_dotfiles")]
    pub hide_dotfiles: bool,

    /// Maximum file size for uploads (in bytes)
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size: u64,
}

fn default_hide_dotfiles() -> bool {
    true
}

fn default_max_upload_size() -> u64 {
    1024 * 1024 * 1024 // 1 GiB
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hide_dotfiles: default_hide_dotfiles(),
            max_upload_size: default_max_upload_size(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.hide_dotfiles);
        assert_eq!(config.max_upload_size, 1024 * 1024 * 1024);
    }

    #[test]
    fn test_from_file_partial_keys() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("updir.toml");
        std::fs::write(&path, "hide_dotfiles = false\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(!config.hide_dotfiles);
        // Missing keys fall back to defaults
        assert_eq!(config.max_upload_size, 1024 * 1024 * 1024);
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(Config::from_file(&dir.path().join("nope.toml")).is_err());
    }
}
