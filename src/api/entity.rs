//! Wire shapes for the remote catalog service.
//!
//! These structs mirror the service's JSON responses exactly; flattening
//! into domain types happens at the repository boundary, not here.

use serde::Deserialize;

/// A `{name, url}` reference as the service embeds it throughout responses.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Envelope returned by the list operation.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonListResponse {
    #[serde(default)]
    pub count: u32,
    pub results: Vec<NamedResource>,
}

/// Detail payload returned by the per-entry operation.
///
/// Height is in decimeters and weight in hectograms, as the service
/// defines them. Sequence fields keep the order the service sent.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonDto {
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}
