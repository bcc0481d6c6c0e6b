//! Game events that triggered abilities listen for.

use serde::{Deserialize, Serialize};

use crate::core::{CardKind, Color, ObjectId};

/// The kinds of event a trigger can bind to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    /// An object finished entering the board.
    AfterPlayed,
    /// An object took damage (from combat or an ability).
    AfterDamageReceived,
    /// Any card finished being played.
    AfterCardPlay,
    BeginningOfTurn,
    EndOfTurn,
}

/// A concrete event instance, with whatever context applies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    pub kind: EventKind,
    /// The object the event is about, when there is one.
    pub object: Option<ObjectId>,
    /// The player the event is about (card player, turn owner).
    pub player: Option<Color>,
    /// Kind of the card involved, for `AfterCardPlay`.
    pub card_kind: Option<CardKind>,
    /// Damage amount, for `AfterDamageReceived`.
    pub amount: Option<i32>,
}

impl GameEvent {
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            object: None,
            player: None,
            card_kind: None,
            amount: None,
        }
    }

    #[must_use]
    pub fn with_object(mut self, object: ObjectId) -> Self {
        self.object = Some(object);
        self
    }

    #[must_use]
    pub fn with_player(mut self, player: Color) -> Self {
        self.player = Some(player);
        self
    }

    #[must_use]
    pub fn with_card_kind(mut self, kind: CardKind) -> Self {
        self.card_kind = Some(kind);
        self
    }

    #[must_use]
    pub fn with_amount(mut self, amount: i32) -> Self {
        self.amount = Some(amount);
        self
    }
}
