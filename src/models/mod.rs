//! Data models for the catalog client.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`LoadState`]: The three-variant lifecycle wrapper around one asynchronous load
//! - [`PokemonDetail`]: The immutable detail record for one catalog entry
//! - [`ClientConfig`]: Endpoint and request settings loaded from `Pokedex Config.yaml`
//!
//! # Architecture Note
//!
//! The models are designed to be:
//! - **Cloneable**: state values are published through `tokio::sync::watch`
//!   slots, which hand out clones of the current value on read
//! - **Immutable**: a [`PokemonDetail`] is constructed whole from a successful
//!   response or not at all
//! - **Serializable**: the config structs derive `Serialize`/`Deserialize`
//!   for YAML persistence

pub mod config;
pub mod load_state;
pub mod pokemon;

pub use config::{CatalogSettings, ClientConfig};
pub use load_state::LoadState;
pub use pokemon::{PokemonDetail, StatValue};
