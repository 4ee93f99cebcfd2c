use crate::core::config::AppConfig;
use anyhow::{Context, Result, bail};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

const EXAMPLE_CONFIG: &str = include_str!("../../docs/example_config.yaml");

/// Writes the example configuration to the default location and returns its path.
pub fn setup() -> Result<PathBuf> {
    let path = AppConfig::default_config_path()?;
    write_example_config(&path)?;
    println!("Created configuration at {}", path.display());
    Ok(path)
}

/// Writes the example configuration to `path`. An existing file is never touched.
pub fn write_example_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            bail!("Configuration file already exists at {}", path.display())
        }
        Err(e) => {
            let message = format!("Failed to create config file at {}", path.display());
            return Err(e).context(message);
        }
    };
    file.write_all(EXAMPLE_CONFIG.as_bytes())
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!(path = %path.display(), "Wrote example configuration");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_BAZAAR_URL;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_writes_config_into_missing_directory() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.yaml");

        write_example_config(&config_path)?;

        let content = fs::read_to_string(&config_path)?;
        assert_eq!(content, EXAMPLE_CONFIG);
        assert!(content.starts_with("# Example configuration file"));

        let written = AppConfig::load_from_path(&config_path)?;
        assert_eq!(written.bazaar_base_url(), DEFAULT_BAZAAR_URL);
        Ok(())
    }

    #[test]
    fn test_existing_config_is_kept() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "nav_currency: USD\n")?;

        let err = write_example_config(&config_path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&config_path)?, "nav_currency: USD\n");
        Ok(())
    }

    #[test]
    fn test_example_config_matches_defaults() -> Result<()> {
        let config: AppConfig = serde_yaml::from_str(EXAMPLE_CONFIG)
            .context("Failed to parse example config as YAML")?;
        assert_eq!(config.bazaar_base_url(), DEFAULT_BAZAAR_URL);
        assert_eq!(config.nav_currency, "PKR");
        Ok(())
    }
}
