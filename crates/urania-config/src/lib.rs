use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use urania::zodiac::Locale;

pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub endpoint: String,
    pub host: String,
    /// Name of the environment variable holding the RapidAPI key.
    pub api_key_env: String,
    pub timeout_secs: u64,
    pub nation: String,
    pub language: String,
    pub house_system: String,
    pub zodiac_type: String,
    pub perspective_type: String,
    pub theme: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://astrologer.p.rapidapi.com/api/v4/birth-chart".to_string(),
            host: "astrologer.p.rapidapi.com".to_string(),
            api_key_env: "RAPIDAPI_KEY".to_string(),
            timeout_secs: 15,
            nation: "BR".to_string(),
            language: "EN".to_string(),
            house_system: "P".to_string(),
            zodiac_type: "Tropic".to_string(),
            perspective_type: "Apparent Geocentric".to_string(),
            theme: "classic".to_string(),
        }
    }
}

impl ProviderSettings {
    /// API key from the configured environment variable. Empty values count as unset.
    pub fn api_key(&self) -> Option<String> {
        self.api_key_with(|name| std::env::var(name).ok())
    }

    pub fn api_key_with<F>(&self, lookup: F) -> Option<String>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        lookup(&self.api_key_env)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub locale: Locale,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UraniaSettings {
    pub provider: ProviderSettings,
    pub chart: ChartSettings,
}

pub fn parse_settings(text: &str) -> anyhow::Result<UraniaSettings> {
    toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse urania.toml: {e}"))
}

/// Try the usual relative paths for `configs/urania.toml`, returning the first
/// one that can be read.
pub fn read_config_text() -> Option<(PathBuf, String)> {
    DEFAULT_CONFIG_PATHS.iter().find_map(|p| {
        fs::read_to_string(p)
            .ok()
            .map(|text| (PathBuf::from(p), text))
    })
}

/// Load settings from an explicit path, or probe the default locations and
/// fall back to built-in defaults when none exists. An explicit path must exist.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<UraniaSettings> {
    if let Some(path) = explicit {
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", path.display()))?;
        log::info!("Loaded configuration from {}", path.display());
        return parse_settings(&text);
    }

    match read_config_text() {
        Some((path, text)) => {
            log::info!("Loaded configuration from {}", path.display());
            parse_settings(&text)
        }
        None => {
            log::debug!(
                "No urania.toml found in {:?}, using defaults",
                DEFAULT_CONFIG_PATHS
            );
            Ok(UraniaSettings::default())
        }
    }
}
