// Pokedex - asynchronous client core for a remote Pokemon catalog service
//
// This is the library crate containing the load pipeline: transport seam,
// repository normalization, and observable load state. The binary crate
// (main.rs) provides a thin terminal consumer.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use api::{ApiError, CatalogApi, HttpCatalogClient};
pub use config::ConfigManager;
pub use models::{ClientConfig, LoadState, PokemonDetail};
pub use services::CatalogRepository;
pub use state::StateManager;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
