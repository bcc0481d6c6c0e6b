//! The turn/action state machine.
//!
//! [`apply`] is the single entry point. Every action runs speculatively
//! on a clone of the state: if an ability suspends for targeting,
//! nothing of the attempt survives except the target request and the
//! stored action to resume, so resuming or cancelling is always
//! idempotent.

mod action;
pub mod board;
mod combat;
mod setup;
mod turn;

pub use action::PlayerAction;
pub use setup::{starter_deck, MatchBuilder};

use tracing::debug;

use crate::core::{ChosenEntity, GameState, TargetRequest};
use crate::error::GameError;
use crate::interpreter::ChoiceStream;
use crate::victory;

/// Apply an action to a state, producing the next state.
///
/// Returns `Err` when the action's preconditions fail; the input state
/// is never modified either way.
pub fn apply(base: &GameState, action: &PlayerAction) -> Result<GameState, GameError> {
    if base.game_over {
        return Err(GameError::illegal("the game is over"));
    }

    if base
        .pending_target
        .as_ref()
        .is_some_and(|pending| pending.choosing)
    {
        return apply_while_choosing(base, action);
    }

    speculate(base, action)
}

/// Handle an action arriving while a target request is open. A pick
/// from the possible sets resumes the stored action with the pick
/// appended; anything else cancels the pending state first.
fn apply_while_choosing(base: &GameState, action: &PlayerAction) -> Result<GameState, GameError> {
    // Guarded by the caller.
    let Some(pending) = base.pending_target.clone() else {
        return speculate(base, action);
    };

    let pick = match action {
        PlayerAction::SelectTile { player, hex } if *player == base.current_player => {
            Some(ChosenEntity::Hex(*hex))
        }
        // While a card choice is open, the index points into the
        // request's candidate list, not the chooser's own hand.
        PlayerAction::SelectCard { player, index } if *player == base.current_player => {
            pending.possible_cards.get(*index).copied().map(ChosenEntity::Card)
        }
        _ => None,
    };

    if let (Some(entity), Some(resume)) = (pick.filter(|e| pending.allows(*e)), &base.resume_action)
    {
        let resume = resume.clone();
        let mut staged = base.clone();
        if let Some(request) = &mut staged.pending_target {
            request.chosen.get_or_insert_with(Vec::new).push(entity);
        }
        debug!(?entity, "resuming suspended action");
        return speculate(&staged, &resume);
    }

    // Not a valid pick: drop the pending state, then let the action
    // proceed against the clean state. Nothing of the suspended action
    // was ever applied, so cancellation is just clearing fields.
    let mut cleared = base.clone();
    cleared.pending_target = None;
    cleared.resume_action = None;
    if matches!(action, PlayerAction::Cancel { .. }) {
        cleared.status = Some("Targeting cancelled.".into());
        return Ok(cleared);
    }
    speculate(&cleared, action)
}

/// Run an action on a scratch clone. Commit the scratch unless the
/// action suspended for targeting, in which case the base state comes
/// back with only the target request and resume action set.
fn speculate(base: &GameState, action: &PlayerAction) -> Result<GameState, GameError> {
    let mut scratch = base.clone();
    scratch.status = None;

    let supplied = scratch
        .pending_target
        .take()
        .and_then(|request| request.chosen)
        .unwrap_or_default();
    scratch.resume_action = None;
    let mut choices = ChoiceStream::new(supplied);

    perform(&mut scratch, action, &mut choices)?;

    if scratch
        .pending_target
        .as_ref()
        .is_some_and(|request| request.choosing)
    {
        let mut suspended = base.clone();
        suspended.pending_target = scratch.pending_target.take();
        suspended.resume_action = Some(action.clone());
        suspended.status = Some("Choose a target.".into());
        return Ok(suspended);
    }

    scratch.pending_target = None;
    scratch.resume_action = None;
    victory::check(&mut scratch);
    Ok(scratch)
}

fn perform(
    state: &mut GameState,
    action: &PlayerAction,
    choices: &mut ChoiceStream,
) -> Result<(), GameError> {
    match action {
        PlayerAction::SelectCard { player, index } => {
            turn::select_card(state, *player, *index, choices)?;
        }
        PlayerAction::SelectTile { player, hex } => {
            turn::select_tile(state, *player, *hex, choices)?;
        }
        PlayerAction::PlaceCard {
            player,
            card_index,
            hex,
        } => {
            turn::place_card(state, *player, *card_index, *hex, choices)?;
        }
        PlayerAction::MoveRobot { player, from, to } => {
            turn::move_robot(state, *player, *from, *to)?;
        }
        PlayerAction::Attack { player, from, to } => {
            combat::attack(state, *player, *from, *to, choices)?;
        }
        PlayerAction::ActivateAbility { player, hex, index } => {
            turn::activate_ability(state, *player, *hex, *index, choices)?;
        }
        PlayerAction::EndTurn { player } => {
            turn::end_turn(state, *player, choices)?;
        }
        PlayerAction::Cancel { player } => {
            state.selected_tile = None;
            state.players[*player].selected_card = None;
        }
    }
    Ok(())
}

/// An open target request on a state, if any.
#[must_use]
pub fn pending_request(state: &GameState) -> Option<&TargetRequest> {
    state
        .pending_target
        .as_ref()
        .filter(|request| request.choosing)
}
