use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_BAZAAR_URL: &str = "https://mutual-fund-api-bkwg.onrender.com";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BazaarProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub bazaar: Option<BazaarProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            bazaar: Some(BazaarProviderConfig {
                base_url: DEFAULT_BAZAAR_URL.to_string(),
            }),
        }
    }
}

fn default_nav_currency() -> String {
    "PKR".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default = "default_nav_currency")]
    pub nav_currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            providers: ProvidersConfig::default(),
            nav_currency: default_nav_currency(),
        }
    }
}

impl AppConfig {
    /// Loads the default config file, or built-in defaults when it does not exist yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("pk", "bazaar", "fundbazaar")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn bazaar_base_url(&self) -> &str {
        self.providers
            .bazaar
            .as_ref()
            .map_or(DEFAULT_BAZAAR_URL, |p| &p.base_url)
    }
}
