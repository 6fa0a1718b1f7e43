use crate::pokemon_types::PokemonType;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Species {
    Venusaur,
    Charizard,
    Blastoise,
}

/// Per-species base stat block. Gen 1 has a single Special stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub special: u8,
    pub speed: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesData {
    pub pokedex_number: u16,
    pub name: &'static str,
    pub pokemon_type: PokemonType,
    pub base_stats: BaseStats,
}

impl Species {
    /// Static species data table (Gen-1 base stats).
    pub const fn data(self) -> SpeciesData {
        match self {
            Species::Venusaur => SpeciesData {
                pokedex_number: 3,
                name: "Venusaur",
                pokemon_type: PokemonType::Grass,
                base_stats: BaseStats {
                    hp: 80,
                    attack: 82,
                    defense: 83,
                    special: 100,
                    speed: 80,
                },
            },
            Species::Charizard => SpeciesData {
                pokedex_number: 6,
                name: "Charizard",
                pokemon_type: PokemonType::Fire,
                base_stats: BaseStats {
                    hp: 78,
                    attack: 84,
                    defense: 78,
                    special: 85,
                    speed: 100,
                },
            },
            Species::Blastoise => SpeciesData {
                pokedex_number: 9,
                name: "Blastoise",
                pokemon_type: PokemonType::Water,
                base_stats: BaseStats {
                    hp: 79,
                    attack: 83,
                    defense: 100,
                    special: 78,
                    speed: 85,
                },
            },
        }
    }

    pub fn name(self) -> &'static str {
        self.data().name
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
