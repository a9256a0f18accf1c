//! Layered configuration: defaults, then `movie-rs.toml`, then `MOVIE_RS_*` env vars

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE: &str = "movie-rs.toml";
pub const ENV_PREFIX: &str = "MOVIE_RS_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbSettings {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OmdbSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://www.omdbapi.com/".to_string(),
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeSettings {
    /// Trailer lookups are skipped when no key is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub base_url: String,
    pub embed_host: String,
}

impl Default for YoutubeSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://www.googleapis.com/youtube/v3".to_string(),
            embed_host: "www.youtube.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionSettings {
    pub debounce_ms: u64,
    pub min_chars: usize,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            min_chars: 2,
        }
    }
}

impl SuggestionSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    pub data_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".movie-rs"),
        }
    }
}

impl StorageSettings {
    pub fn state_file(&self) -> PathBuf {
        self.data_dir.join("state.json")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub omdb: OmdbSettings,
    #[serde(default)]
    pub youtube: YoutubeSettings,
    #[serde(default)]
    pub suggestions: SuggestionSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default = "default_popular_titles")]
    pub popular_titles: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            omdb: OmdbSettings::default(),
            youtube: YoutubeSettings::default(),
            suggestions: SuggestionSettings::default(),
            storage: StorageSettings::default(),
            popular_titles: default_popular_titles(),
        }
    }
}

fn default_popular_titles() -> Vec<String> {
    [
        "Dhoom 2",
        "Dhoom 3",
        "Inception",
        "Avengers",
        "Interstellar",
        "The Dark Knight",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.omdb.api_key.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "omdb.api_key is required (set {}OMDB__API_KEY)",
                ENV_PREFIX
            )));
        }
        if self.suggestions.debounce_ms == 0 {
            return Err(ConfigError::Invalid(
                "suggestions.debounce_ms must be greater than zero".to_string(),
            ));
        }
        if self.suggestions.min_chars == 0 {
            return Err(ConfigError::Invalid(
                "suggestions.min_chars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load settings from `path` (optional) with environment overrides
pub fn load_config(path: &Path) -> Result<Settings, ConfigError> {
    let settings: Settings = Figment::from(Serialized::defaults(Settings::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::Parse(e.to_string()))?;

    settings.validate()?;
    Ok(settings)
}

/// Load settings from a TOML string, without environment overrides
#[cfg(test)]
pub fn load_config_from_str(toml_str: &str) -> Result<Settings, ConfigError> {
    let settings: Settings = Figment::from(Serialized::defaults(Settings::default()))
        .merge(Toml::string(toml_str))
        .extract()
        .map_err(|e| ConfigError::Parse(e.to_string()))?;

    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_fill_missing_sections() {
        let settings = load_config_from_str(
            r#"
[omdb]
api_key = "abc123"
"#,
        )
        .unwrap();

        assert_eq!(settings.omdb.api_key, "abc123");
        assert_eq!(settings.omdb.base_url, "https://www.omdbapi.com/");
        assert_eq!(settings.suggestions.debounce(), Duration::from_millis(500));
        assert_eq!(settings.suggestions.min_chars, 2);
        assert!(settings.youtube.api_key.is_none());
        assert_eq!(settings.popular_titles.len(), 6);
        assert_eq!(settings.popular_titles[0], "Dhoom 2");
        assert_eq!(
            settings.storage.state_file(),
            PathBuf::from(".movie-rs/state.json")
        );
    }

    #[test]
    fn test_missing_api_key_is_invalid() {
        let result = load_config_from_str("");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_debounce_is_invalid() {
        let result = load_config_from_str(
            r#"
[omdb]
api_key = "abc123"

[suggestions]
debounce_ms = 0
min_chars = 2
"#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = load_config_from_str("[omdb\napi_key = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
popular_titles = ["Heat"]

[omdb]
api_key = "from-file"

[youtube]
api_key = "yt-key"
base_url = "https://www.googleapis.com/youtube/v3"
embed_host = "www.youtube-nocookie.com"
"#
        )
        .unwrap();

        let settings = load_config(temp_file.path()).unwrap();
        assert_eq!(settings.omdb.api_key, "from-file");
        assert_eq!(settings.youtube.api_key.as_deref(), Some("yt-key"));
        assert_eq!(settings.youtube.embed_host, "www.youtube-nocookie.com");
        assert_eq!(settings.popular_titles, vec!["Heat".to_string()]);
    }
}
