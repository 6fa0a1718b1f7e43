use crate::battle::engine::{get_valid_actions, resolve_turn};
use crate::battle::state::{ActionFailureReason, BattleEvent, GameState, TurnRng};
use crate::battle::tests::common::create_test_battle;
use crate::player::PlayerAction;
use pretty_assertions::assert_eq;
use schema::Species;

#[test]
fn faint_at_exactly_zero_hp_requests_a_replacement() {
    let mut state = create_test_battle();
    // Flamethrower deals exactly 64 in the mirror match at max roll.
    state.players[1].active_pokemon_mut().set_hp(64);
    state.action_queue = [
        Some(PlayerAction::UseMove { move_index: 0 }),
        Some(PlayerAction::UseMove { move_index: 0 }),
    ];

    let bus = resolve_turn(&mut state, TurnRng::new_for_test(vec![255, 255]));

    assert!(state.players[1].active_pokemon().is_fainted());
    assert_eq!(state.players[1].active_pokemon().current_hp(), 0);
    assert!(bus.events().contains(&BattleEvent::PokemonFainted {
        player_index: 1,
        pokemon: Species::Charizard,
    }));
    assert_eq!(state.game_state, GameState::WaitingForPlayer2Replacement);
}

#[test]
fn fainted_actor_forfeits_its_queued_action() {
    let mut state = create_test_battle();
    state.players[1].active_pokemon_mut().set_hp(1);
    state.action_queue = [
        Some(PlayerAction::UseMove { move_index: 0 }),
        Some(PlayerAction::UseMove { move_index: 0 }),
    ];

    let bus = resolve_turn(&mut state, TurnRng::new_for_test(vec![255, 255]));

    // Player 2's combatant went down before its action came up, so only one
    // move resolves and the skip is recorded.
    let moves_used = bus
        .events()
        .iter()
        .filter(|event| matches!(event, BattleEvent::MoveUsed { .. }))
        .count();
    assert_eq!(moves_used, 1);
    assert!(bus.events().contains(&BattleEvent::ActionFailed {
        reason: ActionFailureReason::PokemonFainted,
    }));
    assert_eq!(state.players[0].active_pokemon().current_hp(), 138);
}

#[test]
fn replacement_phase_offers_only_live_teammates() {
    let mut state = create_test_battle();
    state.players[1].active_pokemon_mut().set_hp(1);
    state.players[1].team[2].set_hp(0); // Venusaur is already down
    state.action_queue = [
        Some(PlayerAction::UseMove { move_index: 0 }),
        Some(PlayerAction::UseMove { move_index: 0 }),
    ];
    resolve_turn(&mut state, TurnRng::new_for_test(vec![255, 255]));

    assert_eq!(state.game_state, GameState::WaitingForPlayer2Replacement);
    assert_eq!(
        get_valid_actions(&state, 1),
        vec![PlayerAction::SwitchPokemon { team_index: 1 }]
    );
    // The waiting side keeps its full option set for the next round.
    assert_eq!(get_valid_actions(&state, 0).len(), 6);
}

#[test]
fn replacement_selection_restores_the_round_loop() {
    let mut state = create_test_battle();
    state.players[1].active_pokemon_mut().set_hp(1);
    state.action_queue = [
        Some(PlayerAction::UseMove { move_index: 0 }),
        Some(PlayerAction::UseMove { move_index: 0 }),
    ];
    resolve_turn(&mut state, TurnRng::new_for_test(vec![255, 255]));
    assert_eq!(state.game_state, GameState::WaitingForPlayer2Replacement);
    let turn_before = state.turn_number;

    state.action_queue[1] = Some(PlayerAction::SwitchPokemon { team_index: 1 });
    let bus = resolve_turn(&mut state, TurnRng::new_for_test(vec![]));

    assert!(bus.events().contains(&BattleEvent::PokemonSwitched {
        player_index: 1,
        old_pokemon: Species::Charizard,
        new_pokemon: Species::Blastoise,
    }));
    assert_eq!(state.players[1].active_pokemon().species, Species::Blastoise);
    assert_eq!(state.game_state, GameState::WaitingForActions);
    // A replacement phase is not a battle round.
    assert_eq!(state.turn_number, turn_before);
}

#[test]
fn defeating_the_last_combatant_ends_the_battle() {
    let mut state = create_test_battle();
    state.players[1].active_pokemon_mut().set_hp(1);
    state.players[1].team[1].set_hp(0);
    state.players[1].team[2].set_hp(0);
    state.action_queue = [
        Some(PlayerAction::UseMove { move_index: 0 }),
        Some(PlayerAction::UseMove { move_index: 0 }),
    ];

    let bus = resolve_turn(&mut state, TurnRng::new_for_test(vec![255, 255]));

    assert_eq!(state.game_state, GameState::Player1Win);
    assert!(!state.players[1].has_usable_pokemon());
    assert!(bus
        .events()
        .contains(&BattleEvent::PlayerDefeated { player_index: 1 }));
    assert!(bus
        .events()
        .contains(&BattleEvent::BattleEnded { winner: 0 }));
    // The round terminated before the defeated side's action came up.
    let moves_used = bus
        .events()
        .iter()
        .filter(|event| matches!(event, BattleEvent::MoveUsed { .. }))
        .count();
    assert_eq!(moves_used, 1);
}
