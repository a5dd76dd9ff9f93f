use crate::api::CatalogApi;
use crate::models::PokemonDetail;
use std::sync::Arc;

/// Normalization layer between the transport seam and the state layer.
///
/// The repository owns no state; each call delegates to [`CatalogApi`] and
/// collapses the outcome into a plain domain value:
///
/// - a failed or empty list fetch becomes an empty list. Callers cannot
///   distinguish an empty catalog from a failed fetch; the failure is
///   recorded in the log instead of the return value.
/// - a failed detail fetch becomes `None`, whether the entry is unknown,
///   the transport errored, or the payload did not decode.
///
/// No error value crosses this boundary, and there are no retries.
#[derive(Clone)]
pub struct CatalogRepository {
    api: Arc<dyn CatalogApi>,
}

impl CatalogRepository {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    /// Fetch the catalog names, in service order.
    ///
    /// Duplicates pass through unchanged; an upstream failure yields an
    /// empty vector.
    pub async fn pokemon_names(&self) -> Vec<String> {
        match self.api.list_pokemon().await {
            Ok(envelope) => envelope
                .results
                .into_iter()
                .map(|entry| entry.name)
                .collect(),
            Err(err) => {
                tracing::warn!("catalog list fetch failed, returning empty list: {err}");
                Vec::new()
            }
        }
    }

    /// Fetch and normalize the detail record for one name.
    ///
    /// Returns `None` on any failure.
    pub async fn pokemon_detail(&self, name: &str) -> Option<PokemonDetail> {
        match self.api.get_pokemon(name).await {
            Ok(dto) => Some(dto.into()),
            Err(err) => {
                tracing::warn!("detail fetch for {name} failed: {err}");
                None
            }
        }
    }
}
