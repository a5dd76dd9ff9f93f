use super::entity::{PokemonDto, PokemonListResponse};
use crate::models::CatalogSettings;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by the transport layer.
///
/// Callers above the repository never see these; the repository collapses
/// them into emptiness or absence per its contract.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),
}

/// Transport seam for the remote catalog service.
///
/// Two operations, both stateless per call: fetch the list envelope and
/// fetch one detail payload by name. Implementations own the actual
/// network I/O; everything above this trait is synchronous transformation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_pokemon(&self) -> Result<PokemonListResponse, ApiError>;

    async fn get_pokemon(&self, name: &str) -> Result<PokemonDto, ApiError>;
}

/// HTTP implementation of [`CatalogApi`] backed by reqwest.
///
/// The base URL is configurable so tests can point the client at a mock
/// server. Timeouts are enforced by the underlying client; there are no
/// retries at this layer.
pub struct HttpCatalogClient {
    http: Client,
    base_url: String,
    list_limit: u32,
}

impl HttpCatalogClient {
    /// Create a client from catalog settings.
    pub fn new(settings: &CatalogSettings) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(settings.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            list_limit: settings.list_limit,
        })
    }

    /// Create a client against a custom base URL with default settings
    /// (for testing with a mock server).
    pub fn with_base_url(base_url: String) -> Result<Self, ApiError> {
        let settings = CatalogSettings {
            base_url,
            ..CatalogSettings::default()
        };
        Self::new(&settings)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn list_pokemon(&self) -> Result<PokemonListResponse, ApiError> {
        let url = format!("{}/pokemon?limit={}", self.base_url, self.list_limit);
        let response = self.http.get(&url).send().await?;

        check_response_status(&response)?;
        Ok(response.json::<PokemonListResponse>().await?)
    }

    async fn get_pokemon(&self, name: &str) -> Result<PokemonDto, ApiError> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        let response = self.http.get(&url).send().await?;

        check_response_status(&response)?;
        Ok(response.json::<PokemonDto>().await?)
    }
}

/// Map any non-2xx status to an error with no body.
fn check_response_status(response: &reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}
