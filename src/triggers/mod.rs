//! Triggered abilities: events, bindings, and dispatch.

mod binding;
mod dispatch;
mod event;

pub use binding::{TriggerBinding, TriggerCondition};
pub use dispatch::dispatch;
pub use event::{EventKind, GameEvent};
