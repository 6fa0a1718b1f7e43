use crate::battle::state::{BattleEvent, BattleState, EventBus, GameState};
use crate::player::TEAM_SIZE;

/// Player target for commands - provides type safety over raw indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerTarget {
    Player1,
    Player2,
}

impl PlayerTarget {
    pub fn to_index(self) -> usize {
        match self {
            PlayerTarget::Player1 => 0,
            PlayerTarget::Player2 => 1,
        }
    }

    pub fn opponent(self) -> PlayerTarget {
        match self {
            PlayerTarget::Player1 => PlayerTarget::Player2,
            PlayerTarget::Player2 => PlayerTarget::Player1,
        }
    }

    pub fn from_index(index: usize) -> PlayerTarget {
        match index {
            0 => PlayerTarget::Player1,
            1 => PlayerTarget::Player2,
            _ => panic!("Invalid player index: {}", index),
        }
    }
}

/// Atomic commands representing final state changes. All mutation of a
/// [`BattleState`] during turn resolution goes through these.
#[derive(Debug, Clone)]
pub enum BattleCommand {
    SetGameState(GameState),
    IncrementTurnNumber,
    ClearActionQueue,
    DealDamage {
        target: PlayerTarget,
        amount: u16,
    },
    SwitchPokemon {
        target: PlayerTarget,
        new_pokemon_index: usize,
    },
    EmitEvent(BattleEvent),
}

/// Error types for command execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    InvalidPokemonIndex,
    StateValidationError(String),
}

pub fn execute_command(
    command: BattleCommand,
    state: &mut BattleState,
    bus: &mut EventBus,
) -> Result<(), ExecutionError> {
    match command {
        BattleCommand::SetGameState(game_state) => {
            state.game_state = game_state;
            Ok(())
        }
        BattleCommand::IncrementTurnNumber => {
            state.turn_number += 1;
            Ok(())
        }
        BattleCommand::ClearActionQueue => {
            state.action_queue = [None, None];
            Ok(())
        }
        BattleCommand::DealDamage { target, amount } => {
            execute_deal_damage(target, amount, state, bus)
        }
        BattleCommand::SwitchPokemon {
            target,
            new_pokemon_index,
        } => execute_switch(target, new_pokemon_index, state, bus),
        BattleCommand::EmitEvent(event) => {
            bus.push(event);
            Ok(())
        }
    }
}

pub fn execute_command_batch(
    commands: Vec<BattleCommand>,
    state: &mut BattleState,
    bus: &mut EventBus,
) -> Result<(), ExecutionError> {
    for command in commands {
        execute_command(command, state, bus)?;
    }
    Ok(())
}

/// Apply damage to the target's active combatant, emitting the damage event
/// and, when the hit drops it to zero, the faint event.
fn execute_deal_damage(
    target: PlayerTarget,
    amount: u16,
    state: &mut BattleState,
    bus: &mut EventBus,
) -> Result<(), ExecutionError> {
    let player_index = target.to_index();
    let pokemon = state.players[player_index].active_pokemon_mut();

    let did_faint = pokemon.take_damage(amount);
    bus.push(BattleEvent::DamageDealt {
        target: pokemon.species,
        damage: amount,
        remaining_hp: pokemon.current_hp(),
    });

    if did_faint {
        bus.push(BattleEvent::PokemonFainted {
            player_index,
            pokemon: pokemon.species,
        });
    }

    Ok(())
}

fn execute_switch(
    target: PlayerTarget,
    new_pokemon_index: usize,
    state: &mut BattleState,
    bus: &mut EventBus,
) -> Result<(), ExecutionError> {
    if new_pokemon_index >= TEAM_SIZE {
        return Err(ExecutionError::InvalidPokemonIndex);
    }

    let player_index = target.to_index();
    let player = &mut state.players[player_index];
    let old_pokemon = player.active_pokemon().species;

    player
        .switch_pokemon(new_pokemon_index)
        .map_err(|err| ExecutionError::StateValidationError(err.to_string()))?;

    bus.push(BattleEvent::PokemonSwitched {
        player_index,
        old_pokemon,
        new_pokemon: player.active_pokemon().species,
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teams::get_prefab_teams;
    use pretty_assertions::assert_eq;
    use schema::Species;

    fn create_test_state() -> BattleState {
        let prefab = &get_prefab_teams()[0];
        BattleState::new(
            "test".to_string(),
            prefab.build_player("p1", "Player 1").unwrap(),
            prefab.build_player("p2", "Player 2").unwrap(),
        )
    }

    #[test]
    fn deal_damage_emits_damage_event_with_remaining_hp() {
        let mut state = create_test_state();
        let mut bus = EventBus::new();

        execute_command(
            BattleCommand::DealDamage {
                target: PlayerTarget::Player2,
                amount: 40,
            },
            &mut state,
            &mut bus,
        )
        .unwrap();

        assert_eq!(
            bus.events(),
            &[BattleEvent::DamageDealt {
                target: Species::Charizard,
                damage: 40,
                remaining_hp: 98,
            }]
        );
    }

    #[test]
    fn lethal_damage_also_emits_the_faint_event() {
        let mut state = create_test_state();
        let mut bus = EventBus::new();
        state.players[1].active_pokemon_mut().set_hp(25);

        execute_command(
            BattleCommand::DealDamage {
                target: PlayerTarget::Player2,
                amount: 60,
            },
            &mut state,
            &mut bus,
        )
        .unwrap();

        assert_eq!(
            bus.events(),
            &[
                BattleEvent::DamageDealt {
                    target: Species::Charizard,
                    damage: 60,
                    remaining_hp: 0,
                },
                BattleEvent::PokemonFainted {
                    player_index: 1,
                    pokemon: Species::Charizard,
                },
            ]
        );
        assert!(state.players[1].active_pokemon().is_fainted());
    }

    #[test]
    fn switch_to_a_fainted_target_is_rejected() {
        let mut state = create_test_state();
        let mut bus = EventBus::new();
        state.players[0].team[1].set_hp(0);

        let result = execute_command(
            BattleCommand::SwitchPokemon {
                target: PlayerTarget::Player1,
                new_pokemon_index: 1,
            },
            &mut state,
            &mut bus,
        );

        assert!(matches!(
            result,
            Err(ExecutionError::StateValidationError(_))
        ));
        assert_eq!(state.players[0].active_pokemon_index, 0);
        assert!(bus.is_empty());
    }

    #[test]
    fn player_target_round_trips_and_flips() {
        assert_eq!(PlayerTarget::from_index(0), PlayerTarget::Player1);
        assert_eq!(PlayerTarget::Player1.opponent().to_index(), 1);
        assert_eq!(PlayerTarget::Player2.opponent(), PlayerTarget::Player1);
    }
}
