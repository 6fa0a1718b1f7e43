use crate::pokemon_types::PokemonType;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Move {
    // Fire
    Flamethrower,
    FirePunch,
    HeatWave,

    // Water
    HydroPump,
    Surf,

    // Grass
    SolarBeam,
    RazorLeaf,

    // Normal
    Tackle,
    Bite,
    Sludge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
}

/// Immutable definition of a move: display name, elemental type,
/// damage category and base power.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveData {
    pub name: &'static str,
    pub move_type: PokemonType,
    pub category: MoveCategory,
    pub power: u8,
}

impl Move {
    /// Static move data table. Categories follow the Gen-1 split:
    /// elemental moves are special, Normal-type contact moves are physical.
    pub const fn data(self) -> MoveData {
        use MoveCategory::*;
        use PokemonType::*;

        match self {
            Move::Flamethrower => MoveData {
                name: "Flamethrower",
                move_type: Fire,
                category: Special,
                power: 95,
            },
            Move::FirePunch => MoveData {
                name: "Fire Punch",
                move_type: Fire,
                category: Special,
                power: 75,
            },
            Move::HeatWave => MoveData {
                name: "Heat Wave",
                move_type: Fire,
                category: Special,
                power: 95,
            },
            Move::HydroPump => MoveData {
                name: "Hydro Pump",
                move_type: Water,
                category: Special,
                power: 120,
            },
            Move::Surf => MoveData {
                name: "Surf",
                move_type: Water,
                category: Special,
                power: 90,
            },
            Move::SolarBeam => MoveData {
                name: "Solar Beam",
                move_type: Grass,
                category: Special,
                power: 120,
            },
            Move::RazorLeaf => MoveData {
                name: "Razor Leaf",
                move_type: Grass,
                category: Special,
                power: 55,
            },
            Move::Tackle => MoveData {
                name: "Tackle",
                move_type: Normal,
                category: Physical,
                power: 35,
            },
            Move::Bite => MoveData {
                name: "Bite",
                move_type: Normal,
                category: Physical,
                power: 60,
            },
            Move::Sludge => MoveData {
                name: "Sludge",
                move_type: Normal,
                category: Physical,
                power: 65,
            },
        }
    }

    pub fn name(self) -> &'static str {
        self.data().name
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
