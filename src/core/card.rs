//! Card definitions: the printed, immutable side of every piece.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::abilities::Program;

/// Identifier of a card definition.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card#{}", self.0)
    }
}

/// What a card becomes when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    /// Mobile combatant placed on the board.
    Robot,
    /// Immobile object placed on the board.
    Structure,
    /// One-shot program, never enters the board.
    Event,
    /// The per-player objective piece. Never appears in decks.
    Core,
}

impl CardKind {
    /// Whether this card is played by placing it onto a board hex.
    #[must_use]
    pub const fn is_placeable(self) -> bool {
        matches!(self, CardKind::Robot | CardKind::Structure)
    }
}

/// The mutable numeric attributes of an on-board object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Attack,
    Health,
    Speed,
}

/// Attribute block. Robots carry all three; structures and cores only
/// health, with attack and speed absent rather than zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub health: i32,
    pub attack: Option<i32>,
    pub speed: Option<i32>,
}

impl Stats {
    #[must_use]
    pub const fn robot(attack: i32, health: i32, speed: i32) -> Self {
        Self {
            health,
            attack: Some(attack),
            speed: Some(speed),
        }
    }

    #[must_use]
    pub const fn building(health: i32) -> Self {
        Self {
            health,
            attack: None,
            speed: None,
        }
    }

    /// Read an attribute; absent attributes read as 0.
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Health => self.health,
            Attribute::Attack => self.attack.unwrap_or(0),
            Attribute::Speed => self.speed.unwrap_or(0),
        }
    }

    /// Write an attribute. Writing an absent attribute materializes it.
    pub fn set(&mut self, attribute: Attribute, value: i32) {
        match attribute {
            Attribute::Health => self.health = value,
            Attribute::Attack => self.attack = Some(value),
            Attribute::Speed => self.speed = Some(value),
        }
    }
}

/// A card definition. Shared between hand, deck, and discard pile; the
/// on-board mutable copy lives in [`crate::core::Object`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub kind: CardKind,
    pub cost: i32,
    pub stats: Option<Stats>,
    pub programs: Vec<Program>,
    pub text: String,
}

impl Card {
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, kind: CardKind, cost: i32) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            cost,
            stats: None,
            programs: Vec::new(),
            text: String::new(),
        }
    }

    #[must_use]
    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    #[must_use]
    pub fn with_program(mut self, program: Program) -> Self {
        self.programs.push(program);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_placeable() {
        assert!(CardKind::Robot.is_placeable());
        assert!(CardKind::Structure.is_placeable());
        assert!(!CardKind::Core.is_placeable());
        assert!(!CardKind::Event.is_placeable());
    }

    #[test]
    fn test_stats_get_set() {
        let mut stats = Stats::building(5);
        assert_eq!(stats.get(Attribute::Health), 5);
        assert_eq!(stats.get(Attribute::Attack), 0);
        assert_eq!(stats.get(Attribute::Speed), 0);

        stats.set(Attribute::Attack, 2);
        assert_eq!(stats.attack, Some(2));

        let robot = Stats::robot(3, 4, 2);
        assert_eq!(robot.get(Attribute::Attack), 3);
        assert_eq!(robot.get(Attribute::Health), 4);
        assert_eq!(robot.get(Attribute::Speed), 2);
    }

    #[test]
    fn test_card_builder() {
        let card = Card::new(CardId(1), "Scout", CardKind::Robot, 2)
            .with_stats(Stats::robot(1, 2, 3))
            .with_text("A fast scout.");

        assert_eq!(card.name, "Scout");
        assert_eq!(card.cost, 2);
        assert_eq!(card.stats.unwrap().speed, Some(3));
        assert!(card.programs.is_empty());
    }
}
