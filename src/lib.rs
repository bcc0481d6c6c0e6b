//! # hexbots
//!
//! A deterministic hex-grid card battle engine.
//!
//! ## Design Principles
//!
//! 1. **Pure Transformations**: [`engine::apply`] takes a state and an
//!    action and returns the next state. An `Err` means the caller's
//!    state is untouched.
//!
//! 2. **Speculative Execution**: Actions run on a scratch clone. When
//!    an ability needs a target mid-execution the attempt is discarded
//!    wholesale, leaving only a `TargetRequest` and the stored action to
//!    resume, so targeting is idempotent by construction.
//!
//! 3. **Determinism**: Same state, same action, same supplied choices,
//!    same result. Randomness lives in one serializable ChaCha8 stream.
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs` makes the
//!   clone-per-action protocol cheap.
//!
//! ## Modules
//!
//! - `hex`: Cube-coordinate grid math, pixel layout, board shapes
//! - `core`: Cards, objects, players, match configuration, game state
//! - `abilities`: Card behavior as data (programs, ops, expressions)
//! - `interpreter`: Program execution with deferred targeting
//! - `triggers`: Event-driven triggered abilities
//! - `engine`: The action state machine, combat, and match setup
//! - `victory`: End-of-game detection
//! - `view`: Rendering projections
//! - `compiler`: The card-text-to-program contract

pub mod abilities;
pub mod compiler;
pub mod core;
pub mod engine;
pub mod error;
pub mod hex;
pub mod interpreter;
pub mod triggers;
pub mod victory;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Attribute, Card, CardId, CardKind, ChosenEntity, Color, GameRng, GameRngState, GameState,
    MatchConfig, Object, ObjectId, PerPlayer, PlayerState, Stats, TargetRequest,
};

pub use crate::abilities::{
    AttributeOp, CollectionExpr, Comparison, ConditionExpr, NumberExpr, Op, PlayerExpr, Program,
    TargetExpr,
};

pub use crate::engine::{apply, MatchBuilder, PlayerAction};

pub use crate::error::GameError;

pub use crate::hex::Hex;

pub use crate::interpreter::{ChoiceStream, ExecStatus};

pub use crate::triggers::{EventKind, GameEvent, TriggerBinding, TriggerCondition};
