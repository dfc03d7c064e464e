//! Configuration I/O: locating, loading, and saving the config file.
//!
//! Loading is forgiving: a missing file yields the default config, and
//! an unreadable or unrecognized file is logged and replaced by the
//! default rather than failing startup.

use crate::config::{Config, ConfigError};
use std::path::{Path, PathBuf};

/// Default config file location: `<config_dir>/chronoterm/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chronoterm").join("config.json"))
}

/// Load a config file, falling back to defaults when the file is
/// missing or invalid.
pub fn load_or_default(path: &Path) -> Config {
    match load(path) {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            tracing::warn!("Ignoring invalid config at {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Load a config file. `Ok(None)` means the file does not exist.
pub fn load(path: &Path) -> Result<Option<Config>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;
    let config = serde_json::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
    Ok(Some(config))
}

/// Save a config file, creating parent directories as needed.
pub fn save(path: &Path, config: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", parent.display(), e)))?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
    std::fs::write(path, json)
        .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;
    tracing::debug!("Saved config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        assert!(load(&path).unwrap().is_none());
        assert_eq!(load_or_default(&path), Config::default());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config { theme: Theme::Sunset };
        save(&path, &config).unwrap();
        assert_eq!(load(&path).unwrap(), Some(config));
    }

    #[test]
    fn unrecognized_theme_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"theme":"banana"}"#).unwrap();
        assert!(load(&path).is_err());
        assert_eq!(load_or_default(&path), Config::default());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
