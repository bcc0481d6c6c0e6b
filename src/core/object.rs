//! On-board object instances.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::abilities::Program;
use crate::core::{Attribute, Card, Stats};
use crate::triggers::TriggerBinding;

/// Identifier of an on-board object instance.
///
/// Allocated monotonically at spawn time, which makes id order the
/// stable dispatch order for triggered abilities.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obj#{}", self.0)
    }
}

/// A robot, structure, or core on the board.
///
/// Holds a private copy of its card's stats; the card itself stays
/// immutable so damaged-ness can be judged against printed values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Object {
    pub id: ObjectId,
    pub card: Card,
    pub stats: Stats,
    pub abilities: Vec<Program>,
    pub triggers: Vec<TriggerBinding>,
    pub moves_used: i32,
    pub has_moved: bool,
    pub has_attacked: bool,
    pub cant_move: bool,
    pub cant_attack: bool,
    pub cant_activate: bool,
    pub just_played: bool,
}

impl Object {
    /// Instantiate a card onto the board.
    ///
    /// Freshly played objects enter exhausted: they cannot move, attack,
    /// or activate until their controller's next turn, and are excluded
    /// from ability targeting while `just_played` is set.
    #[must_use]
    pub fn from_card(id: ObjectId, card: Card) -> Self {
        let stats = card.stats.unwrap_or(Stats::building(0));
        Self {
            id,
            card,
            stats,
            abilities: Vec::new(),
            triggers: Vec::new(),
            moves_used: 0,
            has_moved: false,
            has_attacked: false,
            cant_move: true,
            cant_attack: true,
            cant_activate: true,
            just_played: true,
        }
    }

    /// Current value of an attribute.
    #[must_use]
    pub fn attribute(&self, attribute: Attribute) -> i32 {
        self.stats.get(attribute)
    }

    /// Whether current health is below the printed value.
    #[must_use]
    pub fn is_damaged(&self) -> bool {
        match self.card.stats {
            Some(printed) => self.stats.health < printed.health,
            None => self.stats.health < 0,
        }
    }

    /// Movement still available this turn.
    #[must_use]
    pub fn moves_remaining(&self) -> i32 {
        (self.stats.speed.unwrap_or(0) - self.moves_used).max(0)
    }

    /// Clear per-turn flags at the start of the controller's turn.
    pub fn reset_for_turn(&mut self) {
        self.moves_used = 0;
        self.has_moved = false;
        self.has_attacked = false;
        self.cant_move = false;
        self.cant_attack = false;
        self.cant_activate = false;
        self.just_played = false;
    }
}
