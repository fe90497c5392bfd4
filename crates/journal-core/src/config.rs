use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{JournalError, JournalResult};

const DEFAULT_TITLE: &str = "Journal";
const DEFAULT_PLACEHOLDER: &str = "Write an entry and press Enter";
const DEFAULT_TICK_RATE_MS: u64 = 16;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub tick_rate_ms: Option<u64>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/journal/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("journal/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("journal\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the configuration from `path`, or from the platform config
    /// directory when no path is given.
    ///
    /// A missing file yields the defaults. A file that exists but cannot be
    /// read or parsed is an error, so a typo never silently falls back.
    pub fn load(path: Option<&Path>) -> JournalResult<Self> {
        let resolved = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::config_path(),
        };

        match resolved {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> JournalResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| JournalError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn effective_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn effective_placeholder(&self) -> &str {
        self.placeholder.as_deref().unwrap_or(DEFAULT_PLACEHOLDER)
    }

    pub fn effective_tick_rate_ms(&self) -> u64 {
        self.tick_rate_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TICK_RATE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.effective_title(), "Journal");
        assert_eq!(config.effective_placeholder(), "Write an entry and press Enter");
        assert_eq!(config.effective_tick_rate_ms(), 16);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = AppConfig::load(Some(path.as_path())).unwrap();
        assert!(config.title.is_none());
    }

    #[test]
    fn test_load_overrides() {
        let file = write_config("title = \"Field notes\"\ntick_rate_ms = 50\n");
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.effective_title(), "Field notes");
        assert_eq!(config.effective_placeholder(), "Write an entry and press Enter");
        assert_eq!(config.effective_tick_rate_ms(), 50);
    }

    #[test]
    fn test_zero_tick_rate_falls_back() {
        let config = AppConfig {
            tick_rate_ms: Some(0),
            ..AppConfig::default()
        };
        assert_eq!(config.effective_tick_rate_ms(), 16);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let file = write_config("title = [unterminated");
        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, JournalError::Config { .. }));
    }

    #[test]
    fn test_unknown_key_is_config_error() {
        let file = write_config("colour = \"red\"\n");
        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, JournalError::Config { .. }));
    }
}
