use crate::models::ClientConfig;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Configuration manager for loading and saving the YAML settings file.
///
/// Manages a single file, `Pokedex Config.yaml`, holding the catalog
/// endpoint and request settings. Missing file means defaults; a present
/// but invalid file is an error rather than a silent fallback.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a ConfigManager rooted at the given directory, creating the
    /// directory if needed.
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            config_path: config_dir.join("Pokedex Config.yaml"),
            config_dir,
        })
    }

    /// Load the client configuration, falling back to defaults when the
    /// file does not exist.
    pub fn load(&self) -> Result<ClientConfig> {
        if !self.config_path.exists() {
            tracing::warn!(
                "Config file not found at {}, using defaults",
                self.config_path
            );
            return Ok(ClientConfig::default());
        }

        let file_contents = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config: {}", self.config_path))?;

        let config: ClientConfig = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse config: {}", self.config_path))?;

        tracing::info!("Loaded config from {}", self.config_path);
        Ok(config)
    }

    /// Save the client configuration.
    pub fn save(&self, config: &ClientConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize config to YAML")?;

        fs::write(&self.config_path, yaml_string)
            .with_context(|| format!("Failed to write config: {}", self.config_path))?;

        tracing::info!("Saved config to {}", self.config_path);
        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config_manager() -> (ConfigManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let manager = ConfigManager::new(&config_path).unwrap();
        (manager, temp_dir)
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let (manager, _temp_dir) = create_test_config_manager();

        let config = manager.load().unwrap();
        assert_eq!(config.catalog_settings.base_url, "https://pokeapi.co/api/v2");
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (manager, _temp_dir) = create_test_config_manager();

        let mut config = ClientConfig::default();
        config.catalog_settings.base_url = "http://localhost:9000".to_string();
        config.catalog_settings.list_limit = 20;
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.catalog_settings.base_url, "http://localhost:9000");
        assert_eq!(loaded.catalog_settings.list_limit, 20);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let (manager, _temp_dir) = create_test_config_manager();

        fs::write(
            manager.config_dir().join("Pokedex Config.yaml"),
            "Catalog_Settings: [not, a, mapping]",
        )
        .unwrap();

        assert!(manager.load().is_err());
    }
}
