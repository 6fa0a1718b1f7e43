use crate::battle::engine::{
    get_valid_actions, players_to_act, ready_for_turn_resolution, resolve_turn,
};
use crate::battle::state::{BattleEvent, BattleState, EventBus, TurnRng};
use crate::errors::{ActionError, BattleResult, BattleStateError};
use crate::player::{BattlePlayer, PlayerAction, TEAM_SIZE};

/// A trait for any system that can decide on a battle action.
///
/// The controller hands over the state and the valid option set and expects
/// one element of that set back. The console front-end prompts a human;
/// [`ScriptedProvider`] replays a fixed sequence for tests.
pub trait ActionProvider {
    fn choose_action(
        &mut self,
        state: &BattleState,
        player_index: usize,
        valid_actions: &[PlayerAction],
    ) -> PlayerAction;
}

/// Replays a fixed sequence of choices. Panics when the script runs dry so a
/// miscounted test fails loudly.
pub struct ScriptedProvider {
    actions: Vec<PlayerAction>,
    index: usize,
}

impl ScriptedProvider {
    pub fn new(actions: Vec<PlayerAction>) -> Self {
        Self { actions, index: 0 }
    }
}

impl ActionProvider for ScriptedProvider {
    fn choose_action(
        &mut self,
        _state: &BattleState,
        player_index: usize,
        _valid_actions: &[PlayerAction],
    ) -> PlayerAction {
        let action = self.actions.get(self.index).copied().unwrap_or_else(|| {
            panic!("ScriptedProvider exhausted for player {}", player_index)
        });
        self.index += 1;
        action
    }
}

/// High-level battle driver. Owns the state, validates submissions against
/// the engine's valid-action sets, and resolves turns; both seats go through
/// exactly the same code path.
#[derive(Debug)]
pub struct BattleRunner {
    battle_state: BattleState,
}

impl BattleRunner {
    pub fn new(battle_id: String, player1: BattlePlayer, player2: BattlePlayer) -> Self {
        Self {
            battle_state: BattleState::new(battle_id, player1, player2),
        }
    }

    pub fn state(&self) -> &BattleState {
        &self.battle_state
    }

    pub fn is_battle_ended(&self) -> bool {
        self.battle_state.game_state.is_terminal()
    }

    pub fn winner(&self) -> Option<usize> {
        self.battle_state.game_state.winner()
    }

    /// Queue an action for a player. Rejects actions outside the valid set
    /// for the current state, double submissions, and bad player indices.
    pub fn submit_action(&mut self, player_index: usize, action: PlayerAction) -> BattleResult<()> {
        if player_index >= 2 {
            return Err(BattleStateError::InvalidPlayerIndex(player_index).into());
        }
        match action {
            PlayerAction::UseMove { move_index } if move_index >= 4 => {
                return Err(ActionError::InvalidMoveIndex(move_index).into());
            }
            PlayerAction::SwitchPokemon { team_index } if team_index >= TEAM_SIZE => {
                return Err(ActionError::InvalidPokemonIndex(team_index).into());
            }
            _ => {}
        }
        if !players_to_act(&self.battle_state).contains(&player_index) {
            return Err(ActionError::InvalidAction(
                "player has no pending decision in this state".to_string(),
            )
            .into());
        }
        if self.battle_state.action_queue[player_index].is_some() {
            return Err(ActionError::InvalidAction(
                "an action was already submitted for this turn".to_string(),
            )
            .into());
        }
        if !get_valid_actions(&self.battle_state, player_index).contains(&action) {
            return Err(ActionError::InvalidAction(
                "action is not in the valid set for this state".to_string(),
            )
            .into());
        }

        self.battle_state.action_queue[player_index] = Some(action);
        Ok(())
    }

    /// Resolve the queued turn with the supplied entropy source.
    pub fn resolve(&mut self, rng: TurnRng) -> BattleResult<EventBus> {
        if !ready_for_turn_resolution(&self.battle_state) {
            return Err(BattleStateError::TurnNotReady.into());
        }
        Ok(resolve_turn(&mut self.battle_state, rng))
    }

    /// Drive the battle to its terminal state: poll each provider exactly
    /// when the state machine needs its decision, resolve, repeat. Returns
    /// the winning seat and the full event log.
    pub fn run_to_completion(
        &mut self,
        providers: &mut [&mut dyn ActionProvider; 2],
        mut next_rng: impl FnMut() -> TurnRng,
    ) -> (usize, Vec<BattleEvent>) {
        let mut events = Vec::new();

        while !self.is_battle_ended() {
            for player_index in players_to_act(&self.battle_state) {
                if self.battle_state.action_queue[player_index].is_some() {
                    continue;
                }
                let valid_actions = get_valid_actions(&self.battle_state, player_index);
                let action = providers[player_index].choose_action(
                    &self.battle_state,
                    player_index,
                    &valid_actions,
                );
                self.submit_action(player_index, action)
                    .expect("provider returned an action outside the valid set");
            }

            let bus = self
                .resolve(next_rng())
                .expect("every pending action was just submitted");
            events.extend(bus.events().iter().cloned());
        }

        let winner = self.winner().expect("terminal state names a winner");
        (winner, events)
    }
}
