//! Transport layer for the remote catalog service.
//!
//! [`CatalogApi`] is the seam the rest of the crate depends on;
//! [`HttpCatalogClient`] is the reqwest-backed implementation used in
//! production. Wire shapes live in [`entity`].

pub mod client;
pub mod entity;

pub use client::{ApiError, CatalogApi, HttpCatalogClient};
pub use entity::{PokemonDto, PokemonListResponse};
