//! Expression types evaluated by the interpreter.
//!
//! Expressions are data, not code: a card's behavior is a tree of these
//! variants, serialized with the card and evaluated against the live
//! game state each time the program runs.

use serde::{Deserialize, Serialize};

use crate::core::{Attribute, CardKind};

/// Who or what an operation applies to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TargetExpr {
    /// The controller of the executing program.
    Self_,
    /// The controller's opponent.
    Opponent,
    /// Both players.
    AllPlayers,
    /// The object the executing program is attached to.
    ThisObject,
    /// Every member of a collection.
    All(CollectionExpr),
    /// One member of a collection, picked by the acting player.
    ///
    /// Evaluating this with no queued choice suspends execution.
    Choose(CollectionExpr),
}

/// A player-valued expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerExpr {
    Self_,
    Opponent,
    AllPlayers,
}

/// A filter over objects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ConditionExpr {
    ControlledBy(PlayerExpr),
    AdjacentTo(TargetExpr),
    WithinDistanceOf {
        distance: u32,
        target: Box<TargetExpr>,
    },
    AttributeComparison {
        attribute: Attribute,
        comparison: Comparison,
        value: Box<NumberExpr>,
    },
    HasProperty(ObjectProperty),
}

/// Boolean properties of an on-board object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectProperty {
    IsDamaged,
    MovedThisTurn,
    AttackedThisTurn,
}

/// Numeric comparison operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    Equal,
    NotEqual,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
}

impl Comparison {
    #[must_use]
    pub fn evaluate(self, lhs: i32, rhs: i32) -> bool {
        match self {
            Comparison::Equal => lhs == rhs,
            Comparison::NotEqual => lhs != rhs,
            Comparison::LessThan => lhs < rhs,
            Comparison::LessOrEqual => lhs <= rhs,
            Comparison::GreaterThan => lhs > rhs,
            Comparison::GreaterOrEqual => lhs >= rhs,
        }
    }
}

/// A set of objects or cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CollectionExpr {
    /// Objects on the board matching a kind filter and all conditions.
    ObjectsMatching {
        kind: Option<CardKind>,
        conditions: Vec<ConditionExpr>,
    },
    /// Every object on the board.
    AllObjectsOnBoard,
    /// Cards in a player's hand.
    CardsInHand(PlayerExpr),
}

/// An integer-valued expression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum NumberExpr {
    Const(i32),
    /// An attribute read from a resolved target. Reads over multiple
    /// targets sum.
    AttributeOf {
        target: Box<TargetExpr>,
        attribute: Attribute,
    },
    Count(CollectionExpr),
}

impl NumberExpr {
    /// A constant.
    #[must_use]
    pub const fn constant(n: i32) -> Self {
        NumberExpr::Const(n)
    }
}
