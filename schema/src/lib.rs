// Kanto Clash Schema - Shared type definitions
// This crate contains the closed data tables the battle engine runs on:
// the elemental type set, the move roster and the species roster.

// Re-export the main types
pub use moves::*;
pub use pokemon_types::*;
pub use species::*;

pub mod moves;
pub mod pokemon_types;
pub mod species;
