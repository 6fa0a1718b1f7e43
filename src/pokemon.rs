use crate::battle::stats::{hp_from_base, stat_from_base};
use schema::{BaseStats, Move, PokemonType, Species};
use serde::{Deserialize, Serialize};

/// Level-scaled combat stats, derived once at construction and immutable
/// for the rest of the battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub max_hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special: u16,
    pub speed: u16,
}

impl CombatStats {
    /// Derive the full stat block from base stats at a given level.
    pub fn derive(base: &BaseStats, level: u8) -> Self {
        CombatStats {
            max_hp: hp_from_base(base.hp, level),
            attack: stat_from_base(base.attack, level),
            defense: stat_from_base(base.defense, level),
            special: stat_from_base(base.special, level),
            speed: stat_from_base(base.speed, level),
        }
    }
}

/// A single combatant in a battle.
///
/// Only current HP and the alive flag mutate after construction; both are
/// private so every mutation goes through [`take_damage`](Self::take_damage)
/// or [`set_hp`](Self::set_hp), which maintain the invariant
/// `alive == (current HP > 0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonInst {
    pub name: String,
    pub species: Species,
    pub pokemon_type: PokemonType,
    pub level: u8,
    pub stats: CombatStats,
    pub moves: [Move; 4],
    cur_hp: u16,
    alive: bool,
}

impl PokemonInst {
    /// Create a combatant from species data at the given level, starting at
    /// full health.
    pub fn new(species: Species, level: u8, moves: [Move; 4]) -> Self {
        let data = species.data();
        let stats = CombatStats::derive(&data.base_stats, level);

        PokemonInst {
            name: data.name.to_string(),
            species,
            pokemon_type: data.pokemon_type,
            level,
            stats,
            moves,
            cur_hp: stats.max_hp,
            alive: true,
        }
    }

    pub fn current_hp(&self) -> u16 {
        self.cur_hp
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.max_hp
    }

    pub fn is_fainted(&self) -> bool {
        !self.alive
    }

    /// Apply damage, flooring current HP at zero. Returns true when this hit
    /// caused the faint.
    pub fn take_damage(&mut self, amount: u16) -> bool {
        self.cur_hp = self.cur_hp.saturating_sub(amount);
        if self.cur_hp == 0 && self.alive {
            self.alive = false;
            return true;
        }
        false
    }

    /// Set current HP directly, clamped to max HP. The alive flag follows.
    pub fn set_hp(&mut self, hp: u16) {
        self.cur_hp = hp.min(self.stats.max_hp);
        self.alive = self.cur_hp > 0;
    }
}
