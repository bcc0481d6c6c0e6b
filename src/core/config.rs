//! Match rule parameters.

use serde::{Deserialize, Serialize};

/// Tunable rule constants for a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Hexagonal board radius; radius 3 gives 37 cells.
    pub board_radius: i32,
    pub starting_energy: i32,
    /// Ceiling for the per-turn energy maximum.
    pub max_energy: i32,
    pub cards_drawn_per_turn: usize,
    pub starting_hand_size: usize,
    /// Upper clamp for every attribute write.
    pub attribute_cap: i32,
    pub core_health: i32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_radius: 3,
            starting_energy: 1,
            max_energy: 10,
            cards_drawn_per_turn: 1,
            starting_hand_size: 3,
            attribute_cap: 99,
            core_health: 20,
        }
    }
}
