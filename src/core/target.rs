//! Pending target requests for deferred ability targeting.

use serde::{Deserialize, Serialize};

use crate::core::CardId;
use crate::hex::Hex;

/// One entity a player has picked for a `Choose` target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChosenEntity {
    Hex(Hex),
    Card(CardId),
}

/// An open request for the acting player to pick a target.
///
/// While `choosing` is set, the executing ability is suspended and the
/// only legal inputs are a pick from one of the possible sets or a
/// cancellation. `chosen` carries the picks accumulated so far across
/// re-suspensions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetRequest {
    pub choosing: bool,
    pub possible_hexes: Vec<Hex>,
    pub possible_cards: Vec<CardId>,
    pub chosen: Option<Vec<ChosenEntity>>,
}

impl TargetRequest {
    /// A request awaiting one pick from the given candidate sets.
    #[must_use]
    pub fn open(
        possible_hexes: Vec<Hex>,
        possible_cards: Vec<CardId>,
        chosen: Vec<ChosenEntity>,
    ) -> Self {
        Self {
            choosing: true,
            possible_hexes,
            possible_cards,
            chosen: Some(chosen),
        }
    }

    /// Whether an entity is a member of the candidate sets.
    #[must_use]
    pub fn allows(&self, entity: ChosenEntity) -> bool {
        match entity {
            ChosenEntity::Hex(hex) => self.possible_hexes.contains(&hex),
            ChosenEntity::Card(id) => self.possible_cards.contains(&id),
        }
    }
}
