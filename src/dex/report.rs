/// Render fetched records into plain-text report blocks.
use crate::api::ApiError;

use super::model::{Ability, Move, Pokemon, preferred_effect};

/// Separator line printed after every report block.
pub const SEPARATOR: &str = "------------------------------";

/// Render one pokemon block.
///
/// The unexpanded block carries name, id, height, weight, and types. The
/// expanded block appends stats, abilities, and moves, so it is a strict
/// superset of the unexpanded text for the same pokemon.
#[must_use]
pub fn pokemon_block(pokemon: &Pokemon, expanded: bool) -> String {
    let types: Vec<&str> = pokemon
        .types
        .iter()
        .map(|slot| slot.kind.name.as_str())
        .collect();

    let mut block = format!(
        "Name: {}\nID: {}\nHeight: {}\nWeight: {}\n\nTypes:\n{}",
        pokemon.name,
        pokemon.id,
        pokemon.height,
        pokemon.weight,
        types.join("\n")
    );

    if expanded {
        let stats: Vec<String> = pokemon
            .stats
            .iter()
            .map(|slot| format!("{} - {}", slot.stat.name, slot.base_stat))
            .collect();
        let abilities: Vec<String> = pokemon
            .abilities
            .iter()
            .map(|slot| {
                if slot.is_hidden {
                    format!("{} (hidden)", slot.ability.name)
                } else {
                    slot.ability.name.clone()
                }
            })
            .collect();
        let moves: Vec<String> = pokemon
            .moves
            .iter()
            .map(|slot| {
                let level = slot
                    .version_group_details
                    .first()
                    .map_or(0, |detail| detail.level_learned_at);
                format!("{} - {}", slot.move_.name, level)
            })
            .collect();

        block.push_str(&format!(
            "\n\nStats:\n{}\n\nAbilities:\n{}\n\nMoves:\n{}",
            stats.join("\n"),
            abilities.join("\n"),
            moves.join("\n")
        ));
    }

    block
}

/// Render one ability block. `--expanded` has no effect here.
#[must_use]
pub fn ability_block(ability: &Ability) -> String {
    let (effect, short) = preferred_effect(&ability.effect_entries)
        .map_or(("-", "-"), |entry| {
            (entry.effect.as_str(), entry.short_effect.as_str())
        });
    let pokemon: Vec<&str> = ability
        .pokemon
        .iter()
        .map(|entry| entry.pokemon.name.as_str())
        .collect();

    format!(
        "Name: {}\nID: {}\nGeneration: {}\nEffect: {}\nEffect (Short): {}\nPokemon:\n{}",
        ability.name,
        ability.id,
        ability.generation.name,
        effect,
        short,
        pokemon.join("\n")
    )
}

/// Render one move block. `--expanded` has no effect here.
#[must_use]
pub fn move_block(mv: &Move) -> String {
    let short = preferred_effect(&mv.effect_entries).map_or("-", |entry| entry.short_effect.as_str());

    format!(
        "Name: {}\nID: {}\nGeneration: {}\nAccuracy: {}\nPP: {}\nPower: {}\nType: {}\nDamage Type: {}\nEffect (Short): {}",
        mv.name,
        mv.id,
        mv.generation.name,
        number_or_dash(mv.accuracy),
        number_or_dash(mv.pp),
        number_or_dash(mv.power),
        mv.kind.name,
        mv.damage_class.name,
        short
    )
}

/// Render the inline block for one failed lookup.
///
/// Takes the failed identifier's position in the report; sibling
/// identifiers are unaffected.
#[must_use]
pub fn failure_block(target: &str, err: &ApiError) -> String {
    format!("lookup failed for '{target}': {err}")
}

/// Concatenate blocks in input order, each followed by a separator line.
#[must_use]
pub fn assemble(blocks: &[String]) -> String {
    let mut report = String::new();
    for block in blocks {
        report.push_str(block);
        report.push('\n');
        report.push_str(SEPARATOR);
        report.push('\n');
    }
    report
}

/// Render a nullable numeric API field.
fn number_or_dash(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_owned(), |n| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dex::model::{
        AbilityPokemon, AbilitySlot, EffectEntry, MoveSlot, NamedResource, StatSlot, TypeSlot,
        VersionGroupDetail,
    };

    fn named(name: &str) -> NamedResource {
        NamedResource {
            name: name.to_owned(),
        }
    }

    fn english(effect: &str, short: &str) -> EffectEntry {
        EffectEntry {
            effect: effect.to_owned(),
            short_effect: short.to_owned(),
            language: named("en"),
        }
    }

    fn pikachu() -> Pokemon {
        Pokemon {
            name: "pikachu".to_owned(),
            id: 25,
            height: 4,
            weight: 60,
            stats: vec![
                StatSlot {
                    base_stat: 35,
                    stat: named("hp"),
                },
                StatSlot {
                    base_stat: 90,
                    stat: named("speed"),
                },
            ],
            types: vec![TypeSlot {
                kind: named("electric"),
            }],
            abilities: vec![
                AbilitySlot {
                    ability: named("static"),
                    is_hidden: false,
                },
                AbilitySlot {
                    ability: named("lightning-rod"),
                    is_hidden: true,
                },
            ],
            moves: vec![MoveSlot {
                move_: named("thunder-shock"),
                version_group_details: vec![VersionGroupDetail { level_learned_at: 1 }],
            }],
        }
    }

    #[test]
    fn test_pokemon_block_unexpanded() {
        let block = pokemon_block(&pikachu(), false);
        assert!(block.contains("Name: pikachu"));
        assert!(block.contains("ID: 25"));
        assert!(block.contains("Types:\nelectric"));
        assert!(!block.contains("Stats:"));
        assert!(!block.contains("Abilities:"));
        assert!(!block.contains("Moves:"));
    }

    #[test]
    fn test_pokemon_block_expanded_is_superset() {
        let plain = pokemon_block(&pikachu(), false);
        let expanded = pokemon_block(&pikachu(), true);
        assert!(expanded.starts_with(&plain));
        assert!(expanded.contains("Stats:\nhp - 35\nspeed - 90"));
        assert!(expanded.contains("Abilities:\nstatic\nlightning-rod (hidden)"));
        assert!(expanded.contains("Moves:\nthunder-shock - 1"));
    }

    #[test]
    fn test_ability_block() {
        let ability = Ability {
            name: "static".to_owned(),
            id: 9,
            generation: named("generation-iii"),
            effect_entries: vec![english(
                "Contact may paralyze the attacker.",
                "May paralyze on contact.",
            )],
            pokemon: vec![
                AbilityPokemon {
                    pokemon: named("pikachu"),
                },
                AbilityPokemon {
                    pokemon: named("voltorb"),
                },
            ],
        };
        let block = ability_block(&ability);
        assert!(block.contains("Name: static"));
        assert!(block.contains("Generation: generation-iii"));
        assert!(block.contains("Effect (Short): May paralyze on contact."));
        assert!(block.contains("Pokemon:\npikachu\nvoltorb"));
    }

    #[test]
    fn test_move_block_renders_null_as_dash() {
        let mv = Move {
            name: "swords-dance".to_owned(),
            id: 14,
            generation: named("generation-i"),
            accuracy: None,
            pp: Some(20),
            power: None,
            kind: named("normal"),
            damage_class: named("status"),
            effect_entries: vec![english(
                "Raises the user's Attack by two stages.",
                "Raises the user's Attack by two stages.",
            )],
        };
        let block = move_block(&mv);
        assert!(block.contains("Accuracy: -"));
        assert!(block.contains("PP: 20"));
        assert!(block.contains("Power: -"));
        assert!(block.contains("Damage Type: status"));
    }

    #[test]
    fn test_failure_block_names_target() {
        let err = ApiError::Status {
            url: "https://pokeapi.co/api/v2/pokemon/mewthree/".to_owned(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        let block = failure_block("mewthree", &err);
        assert!(block.starts_with("lookup failed for 'mewthree':"));
        assert!(block.contains("404"));
    }

    #[test]
    fn test_assemble_preserves_order_and_separators() {
        let blocks = vec!["first".to_owned(), "second".to_owned()];
        let report = assemble(&blocks);
        assert_eq!(
            report,
            format!("first\n{SEPARATOR}\nsecond\n{SEPARATOR}\n")
        );
        let first = report.find("first").unwrap();
        let second = report.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_assemble_empty_is_empty() {
        assert!(assemble(&[]).is_empty());
    }
}
