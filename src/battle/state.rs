use crate::battle::stats::{DAMAGE_ROLL_MAX, DAMAGE_ROLL_MIN};
use crate::player::{BattlePlayer, PlayerAction};
use schema::{Move, Species};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    WaitingForActions,
    TurnInProgress,
    WaitingForPlayer1Replacement, // Player 1 needs to send out a new combatant after a faint
    WaitingForPlayer2Replacement, // Player 2 needs to send out a new combatant after a faint
    WaitingForBothReplacements,
    Player1Win,
    Player2Win,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Player1Win | GameState::Player2Win)
    }

    pub fn winner(self) -> Option<usize> {
        match self {
            GameState::Player1Win => Some(0),
            GameState::Player2Win => Some(1),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionFailureReason {
    // The acting combatant fainted earlier in the round; its action is skipped.
    PokemonFainted,
    // The defender is already down when the attack comes up. Defensive only:
    // sequential single-target resolution never reaches this.
    NoEnemyPresent,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Turn Management
    TurnStarted {
        turn_number: u32,
    },
    TurnEnded,

    // Combatant Actions
    PokemonSwitched {
        player_index: usize,
        old_pokemon: Species,
        new_pokemon: Species,
    },
    MoveUsed {
        player_index: usize,
        pokemon: Species,
        move_used: Move,
    },
    AttackTypeEffectiveness {
        multiplier: f64,
    },
    DamageDealt {
        target: Species,
        damage: u16,
        remaining_hp: u16,
    },
    PokemonFainted {
        player_index: usize,
        pokemon: Species,
    },
    ActionFailed {
        reason: ActionFailureReason,
    },

    // Battle End
    PlayerDefeated {
        player_index: usize,
    },
    BattleEnded {
        winner: usize,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string using battle context.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self, battle_state: &BattleState) -> Option<String> {
        match self {
            BattleEvent::TurnStarted { turn_number } => {
                Some(format!("=== Turn {} ===", turn_number))
            }
            BattleEvent::TurnEnded => None,

            BattleEvent::PokemonSwitched {
                player_index,
                old_pokemon,
                new_pokemon,
            } => {
                let player_name = &battle_state.players[*player_index].player_name;
                Some(format!(
                    "{} recalled {} and sent out {}!",
                    player_name,
                    old_pokemon.name(),
                    new_pokemon.name()
                ))
            }

            BattleEvent::MoveUsed {
                player_index,
                pokemon,
                move_used,
            } => {
                let player_name = &battle_state.players[*player_index].player_name;
                Some(format!(
                    "{}'s {} used {}!",
                    player_name,
                    pokemon.name(),
                    move_used.name()
                ))
            }

            BattleEvent::AttackTypeEffectiveness { multiplier } => match *multiplier {
                m if m > 1.0 => Some("It's super effective!".to_string()),
                m if m < 1.0 => Some("It's not very effective...".to_string()),
                _ => None, // Normal effectiveness, no message
            },

            BattleEvent::DamageDealt { target, damage, .. } => {
                Some(format!("{} took {} damage!", target.name(), damage))
            }

            BattleEvent::PokemonFainted { pokemon, .. } => {
                Some(format!("{} fainted!", pokemon.name()))
            }

            BattleEvent::ActionFailed { reason } => match reason {
                ActionFailureReason::PokemonFainted => None, // The faint was already announced
                ActionFailureReason::NoEnemyPresent => Some("But there was no target!".to_string()),
            },

            BattleEvent::PlayerDefeated { player_index } => {
                let player_name = &battle_state.players[*player_index].player_name;
                Some(format!("{} is out of usable Pokemon!", player_name))
            }

            BattleEvent::BattleEnded { winner } => Some(format!(
                "{} has won the battle!",
                battle_state.players[*winner].player_name
            )),
        }
    }
}

/// Event bus for collecting battle events during turn resolution. The
/// presentation layer renders them afterwards; the engine never prints.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Print every event that formats to text, indented, in order.
    pub fn print_formatted(&self, battle_state: &BattleState) {
        for event in &self.events {
            if let Some(formatted) = event.format(battle_state) {
                println!("  {}", formatted);
            }
        }
    }
}

impl std::fmt::Display for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// Oracle of pre-drawn damage rolls for one turn. Battles consume entropy only
/// through this type, so tests can script every roll.
#[derive(Debug, Clone)]
pub struct TurnRng {
    rolls: Vec<u8>,
    index: usize,
}

impl TurnRng {
    pub fn new_for_test(rolls: Vec<u8>) -> Self {
        Self { rolls, index: 0 }
    }

    pub fn new_random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        // At most two attacks resolve per turn; eight rolls is comfortable.
        let rolls: Vec<u8> = (0..8)
            .map(|_| rng.random_range(DAMAGE_ROLL_MIN..=DAMAGE_ROLL_MAX))
            .collect();
        Self { rolls, index: 0 }
    }

    /// Consume the next roll. Panics with the reason when the script runs dry
    /// so a miscounted test fails loudly instead of reusing values.
    pub fn next_roll(&mut self, reason: &str) -> u8 {
        if self.index >= self.rolls.len() {
            panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more rolls.",
                reason
            );
        }
        let roll = self.rolls[self.index];
        self.index += 1;
        roll
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BattleState {
    pub battle_id: String,
    pub players: [BattlePlayer; 2],
    pub turn_number: u32,
    pub game_state: GameState,
    pub action_queue: [Option<PlayerAction>; 2],
}

impl BattleState {
    pub fn new(id: String, player1: BattlePlayer, player2: BattlePlayer) -> Self {
        Self {
            battle_id: id,
            players: [player1, player2],
            turn_number: 1,
            game_state: GameState::WaitingForActions,
            action_queue: [None, None],
        }
    }
}
