use crate::errors::RosterError;
use crate::player::{BattlePlayer, TEAM_SIZE};
use crate::pokemon::PokemonInst;
use schema::{Move, Species};
use serde::{Deserialize, Serialize};

/// Level the standard roster battles at.
pub const PREFAB_LEVEL: u8 = 50;

/// A predefined team configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefabTeam {
    pub id: String,
    pub name: String,
    pub description: String,
    pub pokemon: Vec<PrefabPokemon>,
}

/// A predefined combatant configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefabPokemon {
    pub species: Species,
    pub level: u8,
    pub moves: Vec<Move>,
}

/// The stock move loadout for a species.
pub fn default_moves(species: Species) -> [Move; 4] {
    match species {
        Species::Charizard => [
            Move::Flamethrower,
            Move::FirePunch,
            Move::Tackle,
            Move::HeatWave,
        ],
        Species::Blastoise => [Move::HydroPump, Move::Surf, Move::Tackle, Move::Bite],
        Species::Venusaur => [Move::SolarBeam, Move::RazorLeaf, Move::Tackle, Move::Sludge],
    }
}

/// Get all available prefab teams. The standard battle is a mirror match:
/// both players field the same three Kanto starters.
pub fn get_prefab_teams() -> Vec<PrefabTeam> {
    vec![PrefabTeam {
        id: "kanto_starters".to_string(),
        name: "Kanto Starters".to_string(),
        description: "Charizard, Blastoise and Venusaur at level 50".to_string(),
        pokemon: vec![
            PrefabPokemon {
                species: Species::Charizard,
                level: PREFAB_LEVEL,
                moves: default_moves(Species::Charizard).to_vec(),
            },
            PrefabPokemon {
                species: Species::Blastoise,
                level: PREFAB_LEVEL,
                moves: default_moves(Species::Blastoise).to_vec(),
            },
            PrefabPokemon {
                species: Species::Venusaur,
                level: PREFAB_LEVEL,
                moves: default_moves(Species::Venusaur).to_vec(),
            },
        ],
    }]
}

impl PrefabTeam {
    /// Parse a team definition from RON text.
    pub fn from_ron(text: &str) -> Result<PrefabTeam, RosterError> {
        ron::from_str(text).map_err(|err| RosterError::Parse(err.to_string()))
    }

    /// Build a battle-ready player from this team definition.
    pub fn build_player(&self, player_id: &str, player_name: &str) -> Result<BattlePlayer, RosterError> {
        if self.pokemon.len() != TEAM_SIZE {
            return Err(RosterError::WrongTeamSize(self.pokemon.len()));
        }

        let mut members = Vec::with_capacity(TEAM_SIZE);
        for entry in &self.pokemon {
            let moves: [Move; 4] =
                entry
                    .moves
                    .as_slice()
                    .try_into()
                    .map_err(|_| RosterError::WrongMoveCount {
                        species: entry.species,
                        count: entry.moves.len(),
                    })?;
            members.push(PokemonInst::new(entry.species, entry.level, moves));
        }

        let team: [PokemonInst; TEAM_SIZE] = members
            .try_into()
            .expect("team length was validated above");
        Ok(BattlePlayer::new(
            player_id.to_string(),
            player_name.to_string(),
            team,
        ))
    }
}
