//! Card behavior as data: programs, operations, and expressions.

mod expr;
mod ops;
mod program;

pub use expr::{
    CollectionExpr, Comparison, ConditionExpr, NumberExpr, ObjectProperty, PlayerExpr, TargetExpr,
};
pub use ops::{AttributeOp, Op};
pub use program::Program;
