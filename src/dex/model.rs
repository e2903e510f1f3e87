/// Wire records deserialized from PokeAPI JSON responses.
///
/// Only the fields the report formatter selects are declared; everything
/// else in the response is ignored. Records are request-scoped — fetched,
/// formatted, discarded.
use serde::Deserialize;

/// A `{name, url}` reference to another resource. Only the name is used.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    /// Resource name (e.g., "pikachu", "static", "thunderbolt").
    pub name: String,
}

/// One `/pokemon/{target}/` response.
#[derive(Debug, Deserialize)]
pub struct Pokemon {
    pub name: String,
    pub id: u32,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    pub stats: Vec<StatSlot>,
    /// Type slots in slot order.
    pub types: Vec<TypeSlot>,
    /// Abilities, including hidden ones.
    pub abilities: Vec<AbilitySlot>,
    /// Learnable moves.
    pub moves: Vec<MoveSlot>,
}

/// One entry of a pokemon's `stats` array.
#[derive(Debug, Deserialize)]
pub struct StatSlot {
    /// Base value of the stat for this pokemon.
    pub base_stat: u32,
    /// The stat the value belongs to.
    pub stat: NamedResource,
}

/// One entry of a pokemon's `types` array.
#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// One entry of a pokemon's `abilities` array.
#[derive(Debug, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    /// Whether this is a hidden ability.
    pub is_hidden: bool,
}

/// One entry of a pokemon's `moves` array.
#[derive(Debug, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_: NamedResource,
    /// Per version-group learn details; the first entry's level is reported.
    pub version_group_details: Vec<VersionGroupDetail>,
}

/// Learn details for one move in one version group.
#[derive(Debug, Deserialize)]
pub struct VersionGroupDetail {
    /// Level the move is learned at (0 for machine and tutor moves).
    pub level_learned_at: u32,
}

/// One `/ability/{target}/` response.
#[derive(Debug, Deserialize)]
pub struct Ability {
    pub name: String,
    pub id: u32,
    /// Generation the ability was introduced in.
    pub generation: NamedResource,
    /// Effect texts, one entry per language.
    pub effect_entries: Vec<EffectEntry>,
    /// Pokemon that can have this ability.
    pub pokemon: Vec<AbilityPokemon>,
}

/// One entry of an ability's `pokemon` array.
#[derive(Debug, Deserialize)]
pub struct AbilityPokemon {
    pub pokemon: NamedResource,
}

/// One `/move/{target}/` response.
#[derive(Debug, Deserialize)]
pub struct Move {
    pub name: String,
    pub id: u32,
    /// Generation the move was introduced in.
    pub generation: NamedResource,
    /// Accuracy percentage; null for moves that never miss.
    pub accuracy: Option<u32>,
    /// Power points; null for a handful of special moves.
    pub pp: Option<u32>,
    /// Base power; null for status moves.
    pub power: Option<u32>,
    #[serde(rename = "type")]
    pub kind: NamedResource,
    /// Damage class: physical, special, or status.
    pub damage_class: NamedResource,
    /// Effect texts, one entry per language.
    pub effect_entries: Vec<EffectEntry>,
}

/// One localized effect text entry.
#[derive(Debug, Clone, Deserialize)]
pub struct EffectEntry {
    /// Full effect text.
    pub effect: String,
    /// Short effect text.
    pub short_effect: String,
    /// Language of this entry.
    pub language: NamedResource,
}

/// Pick the English effect entry, falling back to the first one present.
///
/// The API interleaves languages in `effect_entries` with no fixed order.
#[must_use]
pub fn preferred_effect(entries: &[EffectEntry]) -> Option<&EffectEntry> {
    entries
        .iter()
        .find(|entry| entry.language.name == "en")
        .or_else(|| entries.first())
}
