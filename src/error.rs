//! Error taxonomy.
//!
//! An `Err` from [`crate::engine::apply`] always means the caller's
//! state is untouched. Targeting suspension is not an error: it is an
//! `Ok` state whose `pending_target.choosing` flag is set.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// An action whose preconditions were not met.
    #[error("illegal action: {0}")]
    IllegalAction(String),

    #[error(transparent)]
    InvalidHexId(#[from] crate::hex::InvalidHexId),

    #[error(transparent)]
    CompileFailure(#[from] crate::compiler::CompileError),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl GameError {
    pub(crate) fn illegal(message: impl Into<String>) -> Self {
        GameError::IllegalAction(message.into())
    }
}
