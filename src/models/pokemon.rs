use crate::api::entity::PokemonDto;

/// Fully resolved detail record for one catalog entry.
///
/// Values are kept exactly as the upstream service reports them: height in
/// decimeters, weight in hectograms, types and stats in upstream order.
/// A `PokemonDetail` is either constructed whole from a successful response
/// or not at all; there is no partially populated form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PokemonDetail {
    pub name: String,

    /// Height in decimeters, as reported by the service.
    pub height: u32,

    /// Weight in hectograms, as reported by the service.
    pub weight: u32,

    /// Type names in upstream slot order. May be empty.
    pub types: Vec<String>,

    /// Base stat values in upstream order. May be empty.
    pub stats: Vec<StatValue>,

    /// Default sprite URL, when the service provides one.
    pub sprite_url: Option<String>,
}

/// One named base stat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatValue {
    pub name: String,
    pub base: u32,
}

impl From<PokemonDto> for PokemonDetail {
    /// Flatten the wire shape into the domain record, preserving order.
    fn from(dto: PokemonDto) -> Self {
        Self {
            name: dto.name,
            height: dto.height,
            weight: dto.weight,
            types: dto
                .types
                .into_iter()
                .map(|slot| slot.type_ref.name)
                .collect(),
            stats: dto
                .stats
                .into_iter()
                .map(|slot| StatValue {
                    name: slot.stat.name,
                    base: slot.base_stat,
                })
                .collect(),
            sprite_url: dto.sprites.front_default,
        }
    }
}
