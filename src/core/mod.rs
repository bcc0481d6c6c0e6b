//! Core game model: cards, objects, players, and the full game state.

mod card;
mod color;
mod config;
mod object;
mod player;
mod rng;
mod state;
mod target;

pub use card::{Attribute, Card, CardId, CardKind, Stats};
pub use color::{Color, PerPlayer};
pub use config::MatchConfig;
pub use object::{Object, ObjectId};
pub use player::{Energy, PlayerState};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
pub use target::{ChosenEntity, TargetRequest};
