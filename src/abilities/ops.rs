//! The operations a card program can perform.

use serde::{Deserialize, Serialize};

use crate::abilities::{NumberExpr, PlayerExpr, Program, TargetExpr};
use crate::core::Attribute;
use crate::triggers::{EventKind, TriggerCondition};

/// How an attribute modification combines with the current value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttributeOp {
    Add(NumberExpr),
    Subtract(NumberExpr),
    Multiply(NumberExpr),
    Set(NumberExpr),
}

/// One step of a card program.
///
/// Operations apply to every entity their target expression resolves
/// to. Targets referring to players resolve to that player's core when
/// the operation needs an object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Op {
    DealDamage {
        targets: TargetExpr,
        amount: NumberExpr,
    },
    Destroy {
        targets: TargetExpr,
    },
    Draw {
        players: PlayerExpr,
        count: NumberExpr,
    },
    ModifyAttribute {
        targets: TargetExpr,
        attribute: Attribute,
        op: AttributeOp,
    },
    SetAttribute {
        targets: TargetExpr,
        attribute: Attribute,
        value: NumberExpr,
    },
    ModifyEnergy {
        players: PlayerExpr,
        op: AttributeOp,
    },
    /// Refresh a robot's movement allowance this turn.
    CanMoveAgain {
        targets: TargetExpr,
    },
    /// Attach a triggered ability to the targets.
    AttachTrigger {
        targets: TargetExpr,
        event: EventKind,
        condition: Option<TriggerCondition>,
        program: Program,
    },
    /// Attach an activated ability to the targets.
    AttachAbility {
        targets: TargetExpr,
        program: Program,
    },
}

impl Op {
    /// Deal a flat amount of damage.
    #[must_use]
    pub fn deal_damage(targets: TargetExpr, amount: i32) -> Self {
        Op::DealDamage {
            targets,
            amount: NumberExpr::constant(amount),
        }
    }

    /// Draw a flat number of cards.
    #[must_use]
    pub fn draw(players: PlayerExpr, count: i32) -> Self {
        Op::Draw {
            players,
            count: NumberExpr::constant(count),
        }
    }

    /// Add a flat amount to an attribute.
    #[must_use]
    pub fn buff(targets: TargetExpr, attribute: Attribute, amount: i32) -> Self {
        Op::ModifyAttribute {
            targets,
            attribute,
            op: AttributeOp::Add(NumberExpr::constant(amount)),
        }
    }

    /// Gain a flat amount of energy.
    #[must_use]
    pub fn gain_energy(players: PlayerExpr, amount: i32) -> Self {
        Op::ModifyEnergy {
            players,
            op: AttributeOp::Add(NumberExpr::constant(amount)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_helpers() {
        let op = Op::deal_damage(TargetExpr::Opponent, 3);
        assert_eq!(
            op,
            Op::DealDamage {
                targets: TargetExpr::Opponent,
                amount: NumberExpr::Const(3),
            }
        );

        let buff = Op::buff(TargetExpr::ThisObject, Attribute::Attack, 2);
        match buff {
            Op::ModifyAttribute { attribute, .. } => assert_eq!(attribute, Attribute::Attack),
            other => panic!("unexpected op: {other:?}"),
        }
    }

    #[test]
    fn test_op_serde_round_trip() {
        let op = Op::AttachTrigger {
            targets: TargetExpr::ThisObject,
            event: EventKind::EndOfTurn,
            condition: None,
            program: Program::new(vec![Op::draw(PlayerExpr::Self_, 1)]),
        };

        let json = serde_json::to_string(&op).unwrap();
        let back: Op = serde_json::from_str(&json).unwrap();
        assert_eq!(back, op);
    }
}
