use crate::battle::calculators::calculate_attack_outcome;
use crate::battle::commands::{execute_command, execute_command_batch, BattleCommand, PlayerTarget};
use crate::battle::state::{
    ActionFailureReason, BattleEvent, BattleState, EventBus, GameState, TurnRng,
};
use crate::player::PlayerAction;

/// Which players owe an action in the current state.
pub fn players_to_act(state: &BattleState) -> Vec<usize> {
    match state.game_state {
        GameState::WaitingForActions | GameState::WaitingForBothReplacements => vec![0, 1],
        GameState::WaitingForPlayer1Replacement => vec![0],
        GameState::WaitingForPlayer2Replacement => vec![1],
        _ => Vec::new(),
    }
}

/// The typed option set for a player in the current state. The boundary
/// presents exactly these; the engine never sees anything outside them.
pub fn get_valid_actions(state: &BattleState, player_index: usize) -> Vec<PlayerAction> {
    let player = &state.players[player_index];
    let mut actions = Vec::new();

    let is_replacement_phase = match state.game_state {
        GameState::WaitingForPlayer1Replacement => player_index == 0,
        GameState::WaitingForPlayer2Replacement => player_index == 1,
        GameState::WaitingForBothReplacements => true,
        _ => false,
    };

    if is_replacement_phase {
        // Sending out a replacement is the only legal answer to a faint.
        for (team_index, pokemon) in player.team.iter().enumerate() {
            if team_index != player.active_pokemon_index && !pokemon.is_fainted() {
                actions.push(PlayerAction::SwitchPokemon { team_index });
            }
        }
        return actions;
    }

    if !player.active_pokemon().is_fainted() {
        for move_index in 0..player.active_pokemon().moves.len() {
            actions.push(PlayerAction::UseMove { move_index });
        }
    }
    for (team_index, pokemon) in player.team.iter().enumerate() {
        if team_index != player.active_pokemon_index && !pokemon.is_fainted() {
            actions.push(PlayerAction::SwitchPokemon { team_index });
        }
    }

    actions
}

/// Check if the battle is ready for turn resolution (every pending action submitted).
pub fn ready_for_turn_resolution(state: &BattleState) -> bool {
    let pending = players_to_act(state);
    if pending.is_empty() {
        return false;
    }
    pending
        .into_iter()
        .all(|player_index| state.action_queue[player_index].is_some())
}

/// Round order: the faster active combatant acts first; player 1 wins ties.
/// Order is decided once, from the combatants active when the round starts;
/// a switch does not re-sort the remaining actions.
pub fn determine_action_order(
    state: &BattleState,
    actions: &[(usize, PlayerAction)],
) -> Vec<(usize, PlayerAction)> {
    let mut ordered = actions.to_vec();
    ordered.sort_by(|a, b| {
        let speed_a = state.players[a.0].active_pokemon().stats.speed;
        let speed_b = state.players[b.0].active_pokemon().stats.speed;
        speed_b.cmp(&speed_a).then(a.0.cmp(&b.0))
    });
    ordered
}

/// Main entry point for turn resolution. Takes queued player actions and the
/// RNG oracle, executes one complete round (or one replacement phase), and
/// returns the events that occurred.
pub fn resolve_turn(state: &mut BattleState, mut rng: TurnRng) -> EventBus {
    let mut bus = EventBus::new();

    let is_replacement_phase = matches!(
        state.game_state,
        GameState::WaitingForPlayer1Replacement
            | GameState::WaitingForPlayer2Replacement
            | GameState::WaitingForBothReplacements
    );

    if is_replacement_phase {
        resolve_replacement_phase(state, &mut bus);
        return bus;
    }

    initialize_turn(state, &mut bus);

    let queued: Vec<(usize, PlayerAction)> = (0..2)
        .filter_map(|player_index| {
            state.action_queue[player_index].map(|action| (player_index, action))
        })
        .collect();

    for (player_index, action) in determine_action_order(state, &queued) {
        execute_player_action(player_index, action, state, &mut bus, &mut rng);

        // The round terminates as soon as a roster is fully defeated.
        if !state.players[0].has_usable_pokemon() || !state.players[1].has_usable_pokemon() {
            break;
        }
    }

    finalize_turn(state, &mut bus);
    bus
}

/// Execute one player's action for the round. Invoked symmetrically for both
/// seats; `player_index` is the actor, the opponent is the other seat.
fn execute_player_action(
    player_index: usize,
    action: PlayerAction,
    state: &mut BattleState,
    bus: &mut EventBus,
    rng: &mut TurnRng,
) {
    // A combatant that fainted earlier in the round forfeits its action;
    // the replacement arrives only after the round ends.
    if state.players[player_index].active_pokemon().is_fainted() {
        bus.push(BattleEvent::ActionFailed {
            reason: ActionFailureReason::PokemonFainted,
        });
        return;
    }

    match action {
        PlayerAction::SwitchPokemon { team_index } => {
            execute_command(
                BattleCommand::SwitchPokemon {
                    target: PlayerTarget::from_index(player_index),
                    new_pokemon_index: team_index,
                },
                state,
                bus,
            )
            .expect("switch targets are validated at the boundary");
        }
        PlayerAction::UseMove { move_index } => {
            let move_used = state.players[player_index].active_pokemon().moves[move_index];
            let commands =
                calculate_attack_outcome(state, player_index, 1 - player_index, move_used, rng);
            execute_command_batch(commands, state, bus)
                .expect("attack commands only touch live combatants");
        }
    }
}

/// Handle the forced replacement phase without turn progression.
fn resolve_replacement_phase(state: &mut BattleState, bus: &mut EventBus) {
    for player_index in players_to_act(state) {
        if let Some(action) = state.action_queue[player_index] {
            match action {
                PlayerAction::SwitchPokemon { team_index } => {
                    execute_command(
                        BattleCommand::SwitchPokemon {
                            target: PlayerTarget::from_index(player_index),
                            new_pokemon_index: team_index,
                        },
                        state,
                        bus,
                    )
                    .expect("replacement selections are validated at the boundary");
                }
                PlayerAction::UseMove { .. } => {
                    // Only a switch can answer a replacement request.
                    bus.push(BattleEvent::ActionFailed {
                        reason: ActionFailureReason::PokemonFainted,
                    });
                }
            }
        }
    }

    check_win_conditions(state, bus);

    if !state.game_state.is_terminal() {
        execute_command(
            BattleCommand::SetGameState(GameState::WaitingForActions),
            state,
            bus,
        )
        .expect("SetGameState command should always succeed");
        // If a replacement request went unanswered the phase stays pending.
        check_for_pending_replacements(state, bus);
    }

    execute_command(BattleCommand::ClearActionQueue, state, bus)
        .expect("ClearActionQueue command should always succeed");
}

fn initialize_turn(state: &mut BattleState, bus: &mut EventBus) {
    execute_command(
        BattleCommand::SetGameState(GameState::TurnInProgress),
        state,
        bus,
    )
    .expect("SetGameState command should always succeed");
    bus.push(BattleEvent::TurnStarted {
        turn_number: state.turn_number,
    });
}

fn finalize_turn(state: &mut BattleState, bus: &mut EventBus) {
    // Win conditions override everything else.
    check_win_conditions(state, bus);

    if state.game_state == GameState::TurnInProgress {
        execute_command_batch(
            vec![
                BattleCommand::IncrementTurnNumber,
                BattleCommand::SetGameState(GameState::WaitingForActions),
            ],
            state,
            bus,
        )
        .expect("turn bookkeeping commands should always succeed");
        check_for_pending_replacements(state, bus);
    }

    execute_command(BattleCommand::ClearActionQueue, state, bus)
        .expect("ClearActionQueue command should always succeed");
    bus.push(BattleEvent::TurnEnded);
}

/// Declare a winner once a roster is fully defeated. Both rosters going down
/// in the same round is unreachable under sequential single-target damage,
/// but resolves deterministically: player 1 wins ties.
fn check_win_conditions(state: &mut BattleState, bus: &mut EventBus) {
    let p1_usable = state.players[0].has_usable_pokemon();
    let p2_usable = state.players[1].has_usable_pokemon();

    let (new_state, defeated, winner) = match (p1_usable, p2_usable) {
        (true, true) => return,
        (false, true) => (GameState::Player2Win, vec![0], 1),
        (true, false) => (GameState::Player1Win, vec![1], 0),
        (false, false) => (GameState::Player1Win, vec![0, 1], 0),
    };

    execute_command(BattleCommand::SetGameState(new_state), state, bus)
        .expect("SetGameState command should always succeed");
    for player_index in defeated {
        bus.push(BattleEvent::PlayerDefeated { player_index });
    }
    bus.push(BattleEvent::BattleEnded { winner });
}

/// After a round, a side whose active combatant went down must pick a
/// replacement before the next round starts.
fn check_for_pending_replacements(state: &mut BattleState, bus: &mut EventBus) {
    let p1_down = state.players[0].active_pokemon().is_fainted();
    let p2_down = state.players[1].active_pokemon().is_fainted();

    let next_state = match (p1_down, p2_down) {
        (true, true) => Some(GameState::WaitingForBothReplacements),
        (true, false) => Some(GameState::WaitingForPlayer1Replacement),
        (false, true) => Some(GameState::WaitingForPlayer2Replacement),
        (false, false) => None,
    };

    if let Some(next_state) = next_state {
        execute_command(BattleCommand::SetGameState(next_state), state, bus)
            .expect("SetGameState command should always succeed");
    }
}
