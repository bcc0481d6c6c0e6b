//! Execution context and choice plumbing.

use crate::core::ChosenEntity;

/// Outcome of running a program or dispatching triggers.
///
/// `Suspended` means a `Choose` target ran out of supplied choices and
/// a `TargetRequest` was written into the state; the caller abandons
/// the rest of its work and the whole action re-runs on resume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecStatus {
    Complete,
    Suspended,
}

/// The ordered choices supplied for one top-level action.
///
/// A single stream spans the entire action, every program it runs plus
/// any trigger cascades, so re-execution consumes choices in the same
/// deterministic order they were requested in.
#[derive(Debug, Default)]
pub struct ChoiceStream {
    supplied: Vec<ChosenEntity>,
    cursor: usize,
}

impl ChoiceStream {
    #[must_use]
    pub fn new(supplied: Vec<ChosenEntity>) -> Self {
        Self { supplied, cursor: 0 }
    }

    /// Consume the next supplied choice, if any remain.
    pub fn next(&mut self) -> Option<ChosenEntity> {
        let entity = self.supplied.get(self.cursor).copied();
        if entity.is_some() {
            self.cursor += 1;
        }
        entity
    }

    /// The full supplied list, preserved across re-suspensions.
    #[must_use]
    pub fn supplied(&self) -> &[ChosenEntity] {
        &self.supplied
    }
}
