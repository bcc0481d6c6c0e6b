//! Combat resolution.

use tracing::debug;

use crate::core::{Color, GameState, ObjectId};
use crate::engine::{board, turn};
use crate::error::GameError;
use crate::hex::Hex;
use crate::interpreter::{ChoiceStream, ExecStatus};
use crate::triggers::{self, EventKind, GameEvent};

/// Resolve an attack from the robot at `from` against the enemy object
/// at `to`.
///
/// A non-adjacent defender is reached by charging: the attacker first
/// moves to the nearest reachable hex adjacent to the defender, chosen
/// deterministically. Damage is simultaneous; a defender with no attack
/// deals 0 back. Deaths are independent, and when only the defender
/// dies the attacker follows through onto its hex.
pub fn attack(
    state: &mut GameState,
    player: Color,
    from: Hex,
    to: Hex,
    choices: &mut ChoiceStream,
) -> Result<ExecStatus, GameError> {
    turn::require_turn(state, player)?;
    let attacker = state.players[player]
        .object_at(from)
        .ok_or_else(|| GameError::illegal(format!("no friendly object at {from}")))?;
    if !board::can_attack(attacker) {
        return Err(GameError::illegal(format!(
            "{} cannot attack right now",
            attacker.card.name
        )));
    }
    let attacker_id = attacker.id;
    let atk_power = attacker.stats.attack.unwrap_or(0);

    let defender = state.players[player.opponent()]
        .object_at(to)
        .ok_or_else(|| GameError::illegal(format!("no enemy object at {to}")))?;
    let defender_id = defender.id;
    let def_power = defender.stats.attack.unwrap_or(0);

    let attacker_hex = if from.is_adjacent(to) {
        from
    } else {
        charge(state, player, from, to)?
    };

    debug!(attacker = %attacker_id, defender = %defender_id, "resolving combat");

    // Simultaneous damage, then triggers for the defender before the
    // attacker, then independent removal.
    apply_damage(state, defender_id, atk_power);
    apply_damage(state, attacker_id, def_power);

    for (id, amount) in [(defender_id, atk_power), (attacker_id, def_power)] {
        if amount > 0 && state.find_object(id).is_some() {
            let event = GameEvent::new(EventKind::AfterDamageReceived)
                .with_object(id)
                .with_amount(amount);
            if triggers::dispatch(state, &event, choices) == ExecStatus::Suspended {
                return Ok(ExecStatus::Suspended);
            }
        }
    }

    let defender_died = object_health(state, defender_id).is_some_and(|h| h <= 0);
    let attacker_died = object_health(state, attacker_id).is_some_and(|h| h <= 0);

    if defender_died {
        state.remove_object(player.opponent(), to);
    }
    if attacker_died {
        if let Some((owner, hex)) = state.find_object(attacker_id) {
            state.remove_object(owner, hex);
        }
    }

    // Melee follow-through: the victor advances into the vacated hex.
    if defender_died && !attacker_died {
        if let Some(obj) = state.players[player].objects_on_board.remove(&attacker_hex) {
            state.players[player].objects_on_board.insert(to, obj);
        }
    }

    if let Some((owner, hex)) = state.find_object(attacker_id) {
        if let Some(obj) = state.players[owner].objects_on_board.get_mut(&hex) {
            obj.has_attacked = true;
        }
    }

    Ok(ExecStatus::Complete)
}

/// Move the attacker onto the nearest reachable hex adjacent to the
/// defender. Ties break on `(q, r)` so replays pick the same hex.
fn charge(state: &mut GameState, player: Color, from: Hex, to: Hex) -> Result<Hex, GameError> {
    let range = match state.players[player].object_at(from) {
        Some(obj) if board::can_move(obj) => obj.moves_remaining() as u32,
        _ => 0,
    };
    let reachable = board::reachable_hexes(state, from, range);

    let mut candidates: Vec<(u32, Hex)> = to
        .neighbors()
        .into_iter()
        .filter_map(|n| reachable.get(&n).map(|&d| (d, n)))
        .collect();
    candidates.sort_by_key(|&(d, hex)| (d, hex.q, hex.r));

    let Some(&(distance, intermediate)) = candidates.first() else {
        return Err(GameError::illegal(format!("{to} is out of attack range")));
    };

    if intermediate != from {
        if let Some(mut obj) = state.players[player].objects_on_board.remove(&from) {
            obj.moves_used += distance as i32;
            obj.has_moved = true;
            state.players[player].objects_on_board.insert(intermediate, obj);
        }
    }
    Ok(intermediate)
}

fn apply_damage(state: &mut GameState, id: ObjectId, amount: i32) {
    if amount <= 0 {
        return;
    }
    if let Some((owner, hex)) = state.find_object(id) {
        if let Some(obj) = state.players[owner].objects_on_board.get_mut(&hex) {
            obj.stats.health -= amount;
        }
    }
}

fn object_health(state: &GameState, id: ObjectId) -> Option<i32> {
    let (owner, hex) = state.find_object(id)?;
    state.players[owner].object_at(hex).map(|o| o.stats.health)
}
