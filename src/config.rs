//! Configuration: the persisted color theme.
//!
//! The only durable state this application keeps is the theme name,
//! stored as JSON in the user config directory.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Color theme for the terminal surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Vibrant,
    #[default]
    Night,
    Mint,
    Sunset,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Vibrant, Theme::Night, Theme::Mint, Theme::Sunset];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Vibrant => "vibrant",
            Theme::Night => "night",
            Theme::Mint => "mint",
            Theme::Sunset => "sunset",
        }
    }

    /// Comma-separated list of valid names, for error messages.
    pub fn options() -> String {
        Self::ALL
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "vibrant" => Ok(Theme::Vibrant),
            "night" => Ok(Theme::Night),
            "mint" => Ok(Theme::Mint),
            "sunset" => Ok(Theme::Sunset),
            _ => Err(()),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
