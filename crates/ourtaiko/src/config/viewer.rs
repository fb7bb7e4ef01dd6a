use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::network::DEFAULT_SONGS_URL;
use crate::error::Result;

/// Viewer configuration file (`ourtaiko.toml`).
///
/// ```toml
/// songs_url = "https://rating.ourtaiko.org/songs.json"
/// # songs_file = "public/songs.json"
/// # preferences = "~/.config/ourtaiko/preferences.json"
///
/// [cn]
/// api_url = "https://example.invalid/api/songs"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// URL of the songs database.
    pub songs_url: String,
    /// Local songs database, used instead of `songs_url` when set.
    pub songs_file: Option<PathBuf>,
    /// Preferences file. Defaults to the user config directory.
    pub preferences: Option<PathBuf>,
    pub cn: CnConfig,
}

/// Settings for the CN song list API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CnConfig {
    pub api_url: Option<String>,
    pub api_token: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            songs_url: DEFAULT_SONGS_URL.to_string(),
            songs_file: None,
            preferences: None,
            cn: CnConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ViewerConfig::parse("").unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.songs_url, DEFAULT_SONGS_URL);
    }

    #[test]
    fn test_parse_full_config() {
        let content = r#"
songs_url = "http://localhost:5173/songs.json"
songs_file = "public/songs.json"

[cn]
api_url = "http://localhost/api"
api_token = "secret"
"#;
        let config = ViewerConfig::parse(content).unwrap();
        assert_eq!(config.songs_url, "http://localhost:5173/songs.json");
        assert_eq!(config.songs_file, Some(PathBuf::from("public/songs.json")));
        assert_eq!(config.cn.api_url.as_deref(), Some("http://localhost/api"));
        assert_eq!(config.cn.api_token.as_deref(), Some("secret"));
        assert!(config.preferences.is_none());
    }

    #[test]
    fn test_invalid_config() {
        assert!(ViewerConfig::parse("songs_url = 3").is_err());
    }
}
