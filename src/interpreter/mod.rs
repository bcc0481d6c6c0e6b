//! The ability interpreter: explicit-context execution with deferred
//! targeting via suspension.

mod context;
mod exec;

pub use context::{ChoiceStream, ExecStatus};
pub use exec::{run_program, ExecutionContext};
