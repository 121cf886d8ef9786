use crate::Result;
use serde::Deserialize;
use std::path::Path;

pub const SETTINGS_FILE: &str = "writerops.toml";

/// Environment variable that overrides `classifier.api_base`
pub const API_BASE_ENV: &str = "WRITEROPS_API_BASE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassifierSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_enabled() -> bool {
    true
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_api_base() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_api_key_env() -> String {
    "ANTHROPIC_API_KEY".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            model: default_model(),
            api_base: default_api_base(),
            api_key_env: default_api_key_env(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl ClassifierSettings {
    /// API base after applying the environment override
    pub fn resolved_api_base(&self) -> String {
        std::env::var(API_BASE_ENV)
            .ok()
            .filter(|base| !base.trim().is_empty())
            .unwrap_or_else(|| self.api_base.clone())
    }

    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// Tool settings (`writerops.toml` in the data directory)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub classifier: ClassifierSettings,
}

impl Settings {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }
}
