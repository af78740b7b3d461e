//! Optional CONL settings file
//!
//! ```text
//! mapping = image-mapping.txt
//! pages_dir = site
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "carousels.conl";
pub const DEFAULT_MAPPING_FILE: &str = "image-mapping.txt";
pub const DEFAULT_PAGES_DIR: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mapping file to parse
    pub mapping: String,
    /// Directory holding the `{city}-page.html` files
    pub pages_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mapping: DEFAULT_MAPPING_FILE.to_string(),
            pages_dir: DEFAULT_PAGES_DIR.to_string(),
        }
    }
}

impl Config {
    /// Load settings from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = serde_conl::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load an explicitly requested config file, or fall back to the default
    /// file when present, or built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from_path(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, mapping: Option<PathBuf>, pages_dir: Option<PathBuf>) -> Self {
        if let Some(mapping) = mapping {
            self.mapping = mapping.to_string_lossy().to_string();
        }
        if let Some(pages_dir) = pages_dir {
            self.pages_dir = pages_dir.to_string_lossy().to_string();
        }
        self
    }

    pub fn mapping_path(&self) -> PathBuf {
        PathBuf::from(&self.mapping)
    }

    pub fn pages_dir(&self) -> PathBuf {
        PathBuf::from(&self.pages_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.mapping_path(), PathBuf::from("image-mapping.txt"));
        assert_eq!(config.pages_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carousels.conl");
        fs::write(&path, "mapping = photos/mapping.txt\npages_dir = site\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.mapping, "photos/mapping.txt");
        assert_eq!(config.pages_dir, "site");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carousels.conl");
        fs::write(&path, "pages_dir = public\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.mapping, DEFAULT_MAPPING_FILE);
        assert_eq!(config.pages_dir, "public");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.conl"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = Config {
            mapping: "from-file.txt".to_string(),
            pages_dir: "from-file".to_string(),
        }
        .with_overrides(Some(PathBuf::from("cli.txt")), None);

        assert_eq!(config.mapping, "cli.txt");
        assert_eq!(config.pages_dir, "from-file");
    }
}
