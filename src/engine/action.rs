//! Player actions.

use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::hex::Hex;

/// Every input a player can submit.
///
/// Actions are plain data so a suspended action can be stored on the
/// state and re-dispatched once its targets arrive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlayerAction {
    /// Select a card in hand; affordable events play immediately.
    SelectCard { player: Color, index: usize },
    /// Select a board tile; doubles as the pick for a pending hex choice.
    SelectTile { player: Color, hex: Hex },
    PlaceCard {
        player: Color,
        card_index: usize,
        hex: Hex,
    },
    MoveRobot { player: Color, from: Hex, to: Hex },
    Attack { player: Color, from: Hex, to: Hex },
    ActivateAbility {
        player: Color,
        hex: Hex,
        index: usize,
    },
    EndTurn { player: Color },
    /// Clear selections and any pending target request.
    Cancel { player: Color },
}

impl PlayerAction {
    /// The player submitting the action.
    #[must_use]
    pub fn player(&self) -> Color {
        match *self {
            PlayerAction::SelectCard { player, .. }
            | PlayerAction::SelectTile { player, .. }
            | PlayerAction::PlaceCard { player, .. }
            | PlayerAction::MoveRobot { player, .. }
            | PlayerAction::Attack { player, .. }
            | PlayerAction::ActivateAbility { player, .. }
            | PlayerAction::EndTurn { player }
            | PlayerAction::Cancel { player } => player,
        }
    }
}
