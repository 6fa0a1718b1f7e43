use crate::battle::state::BattleState;
use crate::player::{BattlePlayer, TEAM_SIZE};
use crate::pokemon::PokemonInst;
use crate::teams::{default_moves, PREFAB_LEVEL};
use schema::{Move, Species};

/// A builder for creating test combatants with common defaults.
///
/// # Example
/// ```rust,ignore
/// let pokemon = TestPokemonBuilder::new(Species::Charizard, 50)
///     .with_hp(1)
///     .build();
/// ```
pub struct TestPokemonBuilder {
    species: Species,
    level: u8,
    moves: Option<[Move; 4]>,
    current_hp: Option<u16>,
}

impl TestPokemonBuilder {
    pub fn new(species: Species, level: u8) -> Self {
        Self {
            species,
            level,
            moves: None,
            current_hp: None,
        }
    }

    /// Sets the moves for the combatant; defaults to the species loadout.
    #[allow(dead_code)]
    pub fn with_moves(mut self, moves: [Move; 4]) -> Self {
        self.moves = Some(moves);
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn build(self) -> PokemonInst {
        let moves = self.moves.unwrap_or_else(|| default_moves(self.species));
        let mut pokemon = PokemonInst::new(self.species, self.level, moves);

        if let Some(hp) = self.current_hp {
            pokemon.set_hp(hp);
        }

        pokemon
    }
}

/// Creates a test player with the default starter roster at level 50.
pub fn create_test_player(id: &str, name: &str) -> BattlePlayer {
    let team: [PokemonInst; TEAM_SIZE] = [
        TestPokemonBuilder::new(Species::Charizard, PREFAB_LEVEL).build(),
        TestPokemonBuilder::new(Species::Blastoise, PREFAB_LEVEL).build(),
        TestPokemonBuilder::new(Species::Venusaur, PREFAB_LEVEL).build(),
    ];
    BattlePlayer::new(id.to_string(), name.to_string(), team)
}

/// Creates the standard mirror-match battle state for testing.
pub fn create_test_battle() -> BattleState {
    BattleState::new(
        "test".to_string(),
        create_test_player("p1", "Player 1"),
        create_test_player("p2", "Player 2"),
    )
}
