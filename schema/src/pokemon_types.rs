use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, EnumIter)]
pub enum PokemonType {
    Fire,
    Water,
    Grass,
    Normal,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl PokemonType {
    /// Calculate type effectiveness multiplier for attacking type vs defending type.
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective.
    ///
    /// The chart is the simplified starter triangle: each type has exactly one
    /// advantageous pairing and its inverse is the disadvantageous one.
    pub fn type_effectiveness(attacking: PokemonType, defending: PokemonType) -> f64 {
        use PokemonType::*;

        match (attacking, defending) {
            (Fire, Grass) | (Water, Fire) | (Grass, Water) => 2.0,
            (Fire, Water) | (Water, Grass) | (Grass, Fire) => 0.5,
            _ => 1.0,
        }
    }
}
