use crate::battle::engine::get_valid_actions;
use crate::battle::runner::BattleRunner;
use crate::battle::state::{GameState, TurnRng};
use crate::battle::tests::common::{create_test_battle, create_test_player};
use crate::errors::{ActionError, BattleEngineError, BattleStateError};
use crate::player::PlayerAction;
use pretty_assertions::assert_eq;

#[test]
fn valid_actions_cover_every_move_and_live_bench_slot() {
    let state = create_test_battle();

    let actions = get_valid_actions(&state, 0);

    assert_eq!(
        actions,
        vec![
            PlayerAction::UseMove { move_index: 0 },
            PlayerAction::UseMove { move_index: 1 },
            PlayerAction::UseMove { move_index: 2 },
            PlayerAction::UseMove { move_index: 3 },
            PlayerAction::SwitchPokemon { team_index: 1 },
            PlayerAction::SwitchPokemon { team_index: 2 },
        ]
    );
}

#[test]
fn fainted_bench_slots_are_not_offered() {
    let mut state = create_test_battle();
    state.players[0].team[1].set_hp(0);

    let actions = get_valid_actions(&state, 0);

    assert!(!actions.contains(&PlayerAction::SwitchPokemon { team_index: 1 }));
    assert!(actions.contains(&PlayerAction::SwitchPokemon { team_index: 2 }));
}

#[test]
fn runner_rejects_out_of_set_and_double_submissions() {
    let mut runner = BattleRunner::new(
        "test".to_string(),
        create_test_player("p1", "Player 1"),
        create_test_player("p2", "Player 2"),
    );

    // Switching to the slot that is already active is not in the valid set.
    assert!(matches!(
        runner.submit_action(0, PlayerAction::SwitchPokemon { team_index: 0 }),
        Err(BattleEngineError::Action(ActionError::InvalidAction(_)))
    ));
    assert!(matches!(
        runner.submit_action(5, PlayerAction::UseMove { move_index: 0 }),
        Err(BattleEngineError::BattleState(
            BattleStateError::InvalidPlayerIndex(5)
        ))
    ));

    runner
        .submit_action(0, PlayerAction::UseMove { move_index: 0 })
        .unwrap();
    assert!(matches!(
        runner.submit_action(0, PlayerAction::UseMove { move_index: 1 }),
        Err(BattleEngineError::Action(ActionError::InvalidAction(_)))
    ));
}

#[test]
fn runner_refuses_to_resolve_an_incomplete_turn() {
    let mut runner = BattleRunner::new(
        "test".to_string(),
        create_test_player("p1", "Player 1"),
        create_test_player("p2", "Player 2"),
    );
    runner
        .submit_action(0, PlayerAction::UseMove { move_index: 0 })
        .unwrap();

    assert!(matches!(
        runner.resolve(TurnRng::new_for_test(vec![255, 255])),
        Err(BattleEngineError::BattleState(BattleStateError::TurnNotReady))
    ));

    runner
        .submit_action(1, PlayerAction::UseMove { move_index: 0 })
        .unwrap();
    let bus = runner.resolve(TurnRng::new_for_test(vec![255, 255])).unwrap();
    assert!(!bus.is_empty());
    assert_eq!(runner.state().game_state, GameState::WaitingForActions);
}
