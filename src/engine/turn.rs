//! Action handlers: card play, movement, activation, and turn flow.

use tracing::debug;

use crate::core::{CardKind, Color, GameState, ObjectId};
use crate::engine::board;
use crate::error::GameError;
use crate::hex::Hex;
use crate::interpreter::{run_program, ChoiceStream, ExecStatus};
use crate::triggers::{self, EventKind, GameEvent};

pub(super) fn require_turn(state: &GameState, player: Color) -> Result<(), GameError> {
    if state.current_player != player {
        return Err(GameError::illegal(format!("it is not {player}'s turn")));
    }
    Ok(())
}

/// Select a card in hand. The first selection only marks the card;
/// selecting an already-selected affordable event plays it, and
/// re-selecting anything else deselects it.
pub fn select_card(
    state: &mut GameState,
    player: Color,
    index: usize,
    choices: &mut ChoiceStream,
) -> Result<ExecStatus, GameError> {
    require_turn(state, player)?;
    let card = state.players[player]
        .hand
        .get(index)
        .cloned()
        .ok_or_else(|| GameError::illegal(format!("no card at hand index {index}")))?;

    if state.players[player].selected_card == Some(index) {
        if card.kind == CardKind::Event && state.players[player].energy.can_afford(card.cost) {
            return play_event(state, player, index, choices);
        }
        state.players[player].selected_card = None;
        state.selected_tile = None;
        return Ok(ExecStatus::Complete);
    }

    state.players[player].selected_card = Some(index);
    state.selected_tile = None;
    if !state.players[player].energy.can_afford(card.cost) {
        state.status = Some(format!("Not enough energy to play {}.", card.name));
    }
    Ok(ExecStatus::Complete)
}

fn play_event(
    state: &mut GameState,
    player: Color,
    index: usize,
    choices: &mut ChoiceStream,
) -> Result<ExecStatus, GameError> {
    let card = state.players[player].hand[index].clone();
    debug!(card = %card.name, %player, "playing event");
    state.players[player].energy.spend(card.cost);
    state.players[player].selected_card = None;

    for program in &card.programs {
        if run_program(state, program, player, None, choices) == ExecStatus::Suspended {
            return Ok(ExecStatus::Suspended);
        }
    }

    // The card leaves the hand only once its programs have finished.
    let pos = state.players[player].hand.iter().position(|c| c.id == card.id);
    if let Some(played) = pos.and_then(|pos| state.players[player].remove_from_hand(pos)) {
        state.players[player].discard_pile.push_back(played);
    }

    let event = GameEvent::new(EventKind::AfterCardPlay)
        .with_player(player)
        .with_card_kind(CardKind::Event);
    Ok(triggers::dispatch(state, &event, choices))
}

/// Place a robot or structure from hand onto the board.
pub fn place_card(
    state: &mut GameState,
    player: Color,
    card_index: usize,
    hex: Hex,
    choices: &mut ChoiceStream,
) -> Result<ExecStatus, GameError> {
    require_turn(state, player)?;
    let card = state.players[player]
        .hand
        .get(card_index)
        .cloned()
        .ok_or_else(|| GameError::illegal(format!("no card at hand index {card_index}")))?;
    if !card.kind.is_placeable() {
        return Err(GameError::illegal(format!(
            "{} is not a placeable card",
            card.name
        )));
    }
    if !state.players[player].energy.can_afford(card.cost) {
        return Err(GameError::illegal(format!(
            "not enough energy to place {}",
            card.name
        )));
    }
    if !board::valid_placement_hexes(state, player).contains(&hex) {
        return Err(GameError::illegal(format!("cannot place onto {hex}")));
    }

    debug!(card = %card.name, %player, %hex, "placing card");
    state.players[player].energy.spend(card.cost);
    let id = state.spawn_object(player, hex, card.clone());
    state.players[player].selected_card = None;
    state.selected_tile = None;

    for program in &card.programs {
        if run_program(state, program, player, Some(id), choices) == ExecStatus::Suspended {
            return Ok(ExecStatus::Suspended);
        }
    }

    let played = GameEvent::new(EventKind::AfterPlayed)
        .with_object(id)
        .with_player(player);
    if triggers::dispatch(state, &played, choices) == ExecStatus::Suspended {
        return Ok(ExecStatus::Suspended);
    }

    // The just-played window closes once the play effects resolved.
    if let Some((owner, at)) = state.find_object(id) {
        if let Some(obj) = state.players[owner].objects_on_board.get_mut(&at) {
            obj.just_played = false;
        }
    }

    if let Some(pos) = state.players[player].hand.iter().position(|c| c.id == card.id) {
        state.players[player].remove_from_hand(pos);
    }

    let card_play = GameEvent::new(EventKind::AfterCardPlay)
        .with_player(player)
        .with_card_kind(card.kind);
    Ok(triggers::dispatch(state, &card_play, choices))
}

/// Move a robot along the board. Partial moves are allowed until its
/// speed is spent.
pub fn move_robot(
    state: &mut GameState,
    player: Color,
    from: Hex,
    to: Hex,
) -> Result<ExecStatus, GameError> {
    require_turn(state, player)?;
    let obj = state.players[player]
        .object_at(from)
        .ok_or_else(|| GameError::illegal(format!("no friendly object at {from}")))?;
    if !board::can_move(obj) {
        return Err(GameError::illegal(format!(
            "{} cannot move right now",
            obj.card.name
        )));
    }
    let range = obj.moves_remaining() as u32;
    let distances = board::reachable_hexes(state, from, range);
    let Some(&distance) = distances.get(&to).filter(|_| to != from) else {
        return Err(GameError::illegal(format!("cannot reach {to}")));
    };

    debug!(%player, %from, %to, distance, "moving robot");
    if let Some(mut obj) = state.players[player].objects_on_board.remove(&from) {
        obj.moves_used += distance as i32;
        obj.has_moved = true;
        state.players[player].objects_on_board.insert(to, obj);
    }
    state.selected_tile = Some(to);
    Ok(ExecStatus::Complete)
}

/// Run one of an object's activated abilities. Each object activates at
/// most once per turn.
pub fn activate_ability(
    state: &mut GameState,
    player: Color,
    hex: Hex,
    index: usize,
    choices: &mut ChoiceStream,
) -> Result<ExecStatus, GameError> {
    require_turn(state, player)?;
    let obj = state.players[player]
        .object_at(hex)
        .ok_or_else(|| GameError::illegal(format!("no friendly object at {hex}")))?;
    if obj.cant_activate {
        return Err(GameError::illegal(format!(
            "{} cannot activate right now",
            obj.card.name
        )));
    }
    let id = obj.id;
    let program = obj
        .abilities
        .get(index)
        .cloned()
        .ok_or_else(|| GameError::illegal(format!("no ability at index {index}")))?;

    debug!(object = %id, index, "activating ability");
    if run_program(state, &program, player, Some(id), choices) == ExecStatus::Suspended {
        return Ok(ExecStatus::Suspended);
    }

    mark_activated(state, id);
    Ok(ExecStatus::Complete)
}

fn mark_activated(state: &mut GameState, id: ObjectId) {
    if let Some((owner, hex)) = state.find_object(id) {
        if let Some(obj) = state.players[owner].objects_on_board.get_mut(&hex) {
            obj.cant_activate = true;
        }
    }
}

/// End the turn: end-of-turn triggers, hand over, replenish, refresh,
/// draw, beginning-of-turn triggers.
pub fn end_turn(
    state: &mut GameState,
    player: Color,
    choices: &mut ChoiceStream,
) -> Result<ExecStatus, GameError> {
    require_turn(state, player)?;

    let ending = GameEvent::new(EventKind::EndOfTurn).with_player(player);
    if triggers::dispatch(state, &ending, choices) == ExecStatus::Suspended {
        return Ok(ExecStatus::Suspended);
    }

    let incoming = player.opponent();
    state.current_player = incoming;
    state.selected_tile = None;
    state.players[player].selected_card = None;

    let cap = state.config.max_energy;
    state.players[incoming].energy.replenish(cap);

    let hexes = state.players[incoming].occupied_hexes();
    for hex in hexes {
        if let Some(obj) = state.players[incoming].objects_on_board.get_mut(&hex) {
            obj.reset_for_turn();
        }
    }

    let draw = state.config.cards_drawn_per_turn;
    state.players[incoming].draw(draw);

    debug!(%incoming, "turn started");
    let beginning = GameEvent::new(EventKind::BeginningOfTurn).with_player(incoming);
    Ok(triggers::dispatch(state, &beginning, choices))
}

/// Tile selection: a context-sensitive dispatcher over placement,
/// movement, attacking, and plain selection.
pub fn select_tile(
    state: &mut GameState,
    player: Color,
    hex: Hex,
    choices: &mut ChoiceStream,
) -> Result<ExecStatus, GameError> {
    require_turn(state, player)?;

    if let Some(card_index) = state.players[player].selected_card {
        let placeable = state.players[player]
            .hand
            .get(card_index)
            .is_some_and(|c| c.kind.is_placeable());
        if placeable && board::valid_placement_hexes(state, player).contains(&hex) {
            return place_card(state, player, card_index, hex, choices);
        }
    }

    if let Some(from) = state.selected_tile {
        if board::valid_movement_hexes(state, player, from).contains(&hex) {
            return move_robot(state, player, from, hex);
        }
        if board::valid_attack_hexes(state, player, from).contains(&hex) {
            return crate::engine::combat::attack(state, player, from, hex, choices);
        }
    }

    if state.players[player].object_at(hex).is_some() {
        state.selected_tile = Some(hex);
        state.players[player].selected_card = None;
    } else {
        state.selected_tile = None;
    }
    Ok(ExecStatus::Complete)
}
