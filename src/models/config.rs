use serde::{Deserialize, Serialize};

/// Client configuration from Pokedex Config.yaml
///
/// Contains the catalog service endpoint and request settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(rename = "Catalog_Settings")]
    pub catalog_settings: CatalogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(rename = "Base URL", default = "default_base_url")]
    pub base_url: String,

    /// Number of catalog entries requested by the list operation.
    /// The service pages by default; the client requests a single bounded
    /// page instead since it does not paginate.
    #[serde(rename = "List Limit", default = "default_list_limit")]
    pub list_limit: u32,

    #[serde(rename = "Request Timeout", default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(rename = "User Agent", default = "default_user_agent")]
    pub user_agent: String,

    #[serde(rename = "Debug Mode", default)]
    pub debug_mode: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            list_limit: default_list_limit(),
            request_timeout_secs: default_request_timeout(),
            user_agent: default_user_agent(),
            debug_mode: false,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            catalog_settings: CatalogSettings::default(),
        }
    }
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_list_limit() -> u32 {
    151
}

fn default_request_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("{}/{}", crate::APP_NAME, crate::VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_settings_defaults() {
        let settings = CatalogSettings::default();
        assert_eq!(settings.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(settings.list_limit, 151);
        assert_eq!(settings.request_timeout_secs, 30);
        assert!(!settings.debug_mode);
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.catalog_settings.list_limit, 151);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "Catalog_Settings:\n  Base URL: http://localhost:8080\n";
        let config: ClientConfig = serde_yaml_ng::from_str(yaml).unwrap();

        assert_eq!(config.catalog_settings.base_url, "http://localhost:8080");
        assert_eq!(config.catalog_settings.list_limit, 151);
        assert_eq!(config.catalog_settings.request_timeout_secs, 30);
    }
}
