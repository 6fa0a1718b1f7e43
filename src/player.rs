use crate::errors::ActionError;
use crate::pokemon::PokemonInst;
use serde::{Deserialize, Serialize};

/// Every roster fields exactly this many combatants.
pub const TEAM_SIZE: usize = 3;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    // The index refers to the move's position (0-3) in the active combatant's move list.
    UseMove { move_index: usize },

    // The index refers to the combatant's position (0-2) in the player's team.
    SwitchPokemon { team_index: usize },
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BattlePlayer {
    // A unique identifier, e.g. "p1" for the first seat at the console.
    pub player_id: String,
    pub player_name: String,

    pub team: [PokemonInst; TEAM_SIZE],

    // The index (0-2) of the combatant in `team` that is currently active.
    pub active_pokemon_index: usize,
}

impl BattlePlayer {
    pub fn new(player_id: String, player_name: String, team: [PokemonInst; TEAM_SIZE]) -> Self {
        BattlePlayer {
            player_id,
            player_name,
            team,
            active_pokemon_index: 0,
        }
    }

    pub fn active_pokemon(&self) -> &PokemonInst {
        &self.team[self.active_pokemon_index]
    }

    pub fn active_pokemon_mut(&mut self) -> &mut PokemonInst {
        &mut self.team[self.active_pokemon_index]
    }

    /// Switch the active combatant. Rejects out-of-range indices and fainted
    /// targets; callers are expected to have validated both already.
    pub fn switch_pokemon(&mut self, new_index: usize) -> Result<(), ActionError> {
        if new_index >= TEAM_SIZE {
            return Err(ActionError::InvalidPokemonIndex(new_index));
        }
        if self.team[new_index].is_fainted() {
            return Err(ActionError::InvalidAction(
                "cannot switch to a fainted combatant".to_string(),
            ));
        }

        self.active_pokemon_index = new_index;
        Ok(())
    }

    /// True while at least one team member can still battle. A roster is
    /// defeated exactly when this returns false.
    pub fn has_usable_pokemon(&self) -> bool {
        self.team.iter().any(|pokemon| !pokemon.is_fainted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teams::{default_moves, PREFAB_LEVEL};
    use schema::Species;

    fn test_player() -> BattlePlayer {
        let team = [
            PokemonInst::new(
                Species::Charizard,
                PREFAB_LEVEL,
                default_moves(Species::Charizard),
            ),
            PokemonInst::new(
                Species::Blastoise,
                PREFAB_LEVEL,
                default_moves(Species::Blastoise),
            ),
            PokemonInst::new(
                Species::Venusaur,
                PREFAB_LEVEL,
                default_moves(Species::Venusaur),
            ),
        ];
        BattlePlayer::new("p1".to_string(), "Player 1".to_string(), team)
    }

    #[test]
    fn switch_rejects_fainted_and_out_of_range_targets() {
        let mut player = test_player();
        player.team[1].set_hp(0);

        assert!(matches!(
            player.switch_pokemon(1),
            Err(ActionError::InvalidAction(_))
        ));
        assert!(matches!(
            player.switch_pokemon(7),
            Err(ActionError::InvalidPokemonIndex(7))
        ));
        assert_eq!(player.active_pokemon_index, 0);

        player.switch_pokemon(2).unwrap();
        assert_eq!(player.active_pokemon().species, Species::Venusaur);
    }

    #[test]
    fn roster_defeated_iff_every_member_fainted() {
        let mut player = test_player();
        assert!(player.has_usable_pokemon());

        for index in 0..TEAM_SIZE {
            player.team[index].set_hp(0);
            let expect_defeated = index == TEAM_SIZE - 1;
            assert_eq!(player.has_usable_pokemon(), !expect_defeated);
        }
    }
}
