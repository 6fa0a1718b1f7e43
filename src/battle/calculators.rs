use crate::battle::commands::{BattleCommand, PlayerTarget};
use crate::battle::state::{ActionFailureReason, BattleEvent, BattleState, TurnRng};
use crate::battle::stats::{compute_damage, type_effectiveness};
use schema::Move;

/// Calculate the outcome of one attack as a list of commands to apply.
///
/// Reads the battle state but never mutates it; the only side effect is
/// consuming one damage roll from the supplied oracle.
pub fn calculate_attack_outcome(
    state: &BattleState,
    attacker_index: usize,
    defender_index: usize,
    move_used: Move,
    rng: &mut TurnRng,
) -> Vec<BattleCommand> {
    let attacker = state.players[attacker_index].active_pokemon();
    let defender = state.players[defender_index].active_pokemon();

    if defender.is_fainted() {
        // Sequential single-target resolution never attacks a downed target;
        // reject rather than trust the caller.
        return vec![BattleCommand::EmitEvent(BattleEvent::ActionFailed {
            reason: ActionFailureReason::NoEnemyPresent,
        })];
    }

    let mut commands = vec![BattleCommand::EmitEvent(BattleEvent::MoveUsed {
        player_index: attacker_index,
        pokemon: attacker.species,
        move_used,
    })];

    let multiplier = type_effectiveness(move_used.data().move_type, defender.pokemon_type);
    commands.push(BattleCommand::EmitEvent(
        BattleEvent::AttackTypeEffectiveness { multiplier },
    ));

    let roll = rng.next_roll(move_used.name());
    let damage = compute_damage(attacker, defender, move_used, roll);
    commands.push(BattleCommand::DealDamage {
        target: PlayerTarget::from_index(defender_index),
        amount: damage,
    });

    commands
}
