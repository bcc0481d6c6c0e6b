//! Card programs.

use serde::{Deserialize, Serialize};

use crate::abilities::Op;

/// An ordered list of operations, executed sequentially.
///
/// Events carry one program run on play; objects carry programs as
/// play effects, activated abilities, or trigger bodies.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    #[must_use]
    pub fn new(ops: Vec<Op>) -> Self {
        Self { ops }
    }

    #[must_use]
    pub fn single(op: Op) -> Self {
        Self { ops: vec![op] }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
