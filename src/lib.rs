//! Kanto Clash Battle Engine
//!
//! A two-player, turn-based battle simulator with simplified Generation 1
//! mechanics: level-derived stats, type effectiveness, same-type attack
//! bonus, and a speed-ordered round loop over fixed three-member rosters.
//!
//! The engine is I/O-free. It consumes validated [`PlayerAction`]s, draws
//! entropy only from an injected [`TurnRng`], and reports everything that
//! happened as structured [`BattleEvent`]s for a presentation layer to
//! render.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod errors;
pub mod player;
pub mod pokemon;
pub mod teams;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{BaseStats, Move, MoveCategory, MoveData, PokemonType, Species, SpeciesData};

// Core battle engine functions and state.
pub use battle::engine::{
    determine_action_order, get_valid_actions, players_to_act, ready_for_turn_resolution,
    resolve_turn,
};
pub use battle::runner::{ActionProvider, BattleRunner, ScriptedProvider};
pub use battle::state::{
    ActionFailureReason, BattleEvent, BattleState, EventBus, GameState, TurnRng,
};
pub use battle::stats::{
    compute_damage, hp_from_base, stab_multiplier, stat_from_base, type_effectiveness,
};

// Core runtime types for a battle.
pub use player::{BattlePlayer, PlayerAction, TEAM_SIZE};
pub use pokemon::{CombatStats, PokemonInst};

// Roster construction.
pub use teams::{default_moves, get_prefab_teams, PrefabPokemon, PrefabTeam, PREFAB_LEVEL};

// Crate-specific error and result types.
pub use errors::{ActionError, BattleEngineError, BattleResult, BattleStateError, RosterError};
