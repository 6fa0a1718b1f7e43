use crate::pokemon::PokemonInst;
use schema::{Move, MoveCategory, PokemonType};

/// Smallest damage roll the formula accepts.
pub const DAMAGE_ROLL_MIN: u8 = 217;
/// Largest damage roll the formula accepts.
pub const DAMAGE_ROLL_MAX: u8 = 255;

/// Derive a non-HP combat stat: `floor(base * 2 * level / 100) + 5`.
pub fn stat_from_base(base: u8, level: u8) -> u16 {
    (base as u16 * 2 * level as u16) / 100 + 5
}

/// Derive max HP: `floor(base * 2 * level / 100) + level + 10`.
pub fn hp_from_base(base: u8, level: u8) -> u16 {
    (base as u16 * 2 * level as u16) / 100 + level as u16 + 10
}

/// Effectiveness multiplier of a move's type against the target's type.
pub fn type_effectiveness(move_type: PokemonType, target_type: PokemonType) -> f64 {
    PokemonType::type_effectiveness(move_type, target_type)
}

/// Same-type attack bonus: 1.5 when a combatant uses a move of its own type.
pub fn stab_multiplier(move_type: PokemonType, attacker_type: PokemonType) -> f64 {
    if move_type == attacker_type {
        1.5
    } else {
        1.0
    }
}

/// Select attacking and defending stats for a move by its category.
fn offense_pair(
    attacker: &PokemonInst,
    defender: &PokemonInst,
    category: MoveCategory,
) -> (u16, u16) {
    match category {
        MoveCategory::Physical => (attacker.stats.attack, defender.stats.defense),
        MoveCategory::Special => (attacker.stats.special, defender.stats.special),
    }
}

/// Gen-1 damage formula, without critical hits:
///
/// `base = floor(floor((2 * level / 5 + 2) * power * A / D) / 50) + 2`
/// `damage = floor(base * stab * effectiveness * roll / 255)`, minimum 1.
///
/// Truncating integer division happens at each step, in exactly this order.
/// `roll` is an integer in [`DAMAGE_ROLL_MIN`, `DAMAGE_ROLL_MAX`] drawn from
/// the turn's RNG oracle; no entropy is consumed here.
pub fn compute_damage(
    attacker: &PokemonInst,
    defender: &PokemonInst,
    move_: Move,
    roll: u8,
) -> u16 {
    let data = move_.data();
    let (attack, defense) = offense_pair(attacker, defender, data.category);

    // Defender stats are positive by construction; zero here means a
    // collaborator handed us a combatant that never went through derivation.
    assert!(defense > 0, "defending stat must be positive");
    debug_assert!(
        (DAMAGE_ROLL_MIN..=DAMAGE_ROLL_MAX).contains(&roll),
        "damage roll {} outside [{}, {}]",
        roll,
        DAMAGE_ROLL_MIN,
        DAMAGE_ROLL_MAX
    );

    let level_term = (2 * attacker.level as u32) / 5 + 2;
    let base = level_term * data.power as u32 * attack as u32 / defense as u32;
    let base = base / 50 + 2;

    let modifier = stab_multiplier(data.move_type, attacker.pokemon_type)
        * type_effectiveness(data.move_type, defender.pokemon_type)
        * roll as f64
        / 255.0;

    ((base as f64 * modifier) as u16).max(1)
}
