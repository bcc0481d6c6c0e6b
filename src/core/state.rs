//! The complete game state.

use serde::{Deserialize, Serialize};

use crate::core::{
    Card, Color, GameRng, MatchConfig, Object, ObjectId, PerPlayer, PlayerState, TargetRequest,
};
use crate::engine::PlayerAction;
use crate::error::GameError;
use crate::hex::Hex;

/// Everything a match is: both players, whose turn it is, any suspended
/// targeting, and the deterministic RNG.
///
/// Cloning is cheap (persistent collections under the hood), which is
/// what makes speculative execution of actions practical.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub current_player: Color,
    pub players: PerPlayer<PlayerState>,
    /// Hex highlighted by the current player's last selection.
    pub selected_tile: Option<Hex>,
    /// Open targeting request, set while an ability is suspended.
    pub pending_target: Option<TargetRequest>,
    /// The action to re-dispatch once targets are supplied.
    pub resume_action: Option<PlayerAction>,
    pub game_over: bool,
    /// Winner when the game is over; `None` with `game_over` set is a draw.
    pub winner: Option<Color>,
    /// Human-readable note about the last rejected or odd input.
    pub status: Option<String>,
    pub config: MatchConfig,
    pub rng: GameRng,
    next_object_id: u32,
}

impl GameState {
    #[must_use]
    pub fn new(config: MatchConfig, seed: u64) -> Self {
        Self {
            current_player: Color::Blue,
            players: PerPlayer::new(|c| PlayerState::new(c, config.starting_energy)),
            selected_tile: None,
            pending_target: None,
            resume_action: None,
            game_over: false,
            winner: None,
            status: None,
            config,
            rng: GameRng::new(seed),
            next_object_id: 0,
        }
    }

    /// Allocate the next object id. Allocation order is the stable
    /// dispatch order for triggered abilities.
    pub fn alloc_object_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_object_id);
        self.next_object_id += 1;
        id
    }

    /// The object occupying a hex, if any, with its controller.
    #[must_use]
    pub fn object_at(&self, hex: Hex) -> Option<(Color, &Object)> {
        for color in Color::both() {
            if let Some(obj) = self.players[color].object_at(hex) {
                return Some((color, obj));
            }
        }
        None
    }

    /// Locate an object by id.
    #[must_use]
    pub fn find_object(&self, id: ObjectId) -> Option<(Color, Hex)> {
        for color in Color::both() {
            for (hex, obj) in self.players[color].objects_on_board.iter() {
                if obj.id == id {
                    return Some((color, *hex));
                }
            }
        }
        None
    }

    /// Whether any object occupies the hex.
    #[must_use]
    pub fn is_occupied(&self, hex: Hex) -> bool {
        self.object_at(hex).is_some()
    }

    /// Place a freshly instantiated card on the board for `owner`.
    ///
    /// The hex must be empty; occupancy is exclusive across both players.
    pub fn spawn_object(&mut self, owner: Color, hex: Hex, card: Card) -> ObjectId {
        debug_assert!(!self.is_occupied(hex), "spawn onto occupied hex");
        let id = self.alloc_object_id();
        let object = Object::from_card(id, card);
        self.players[owner].objects_on_board.insert(hex, object);
        id
    }

    /// Remove an object from the board, moving its card to its owner's
    /// discard pile. Returns the removed object.
    pub fn remove_object(&mut self, owner: Color, hex: Hex) -> Option<Object> {
        let object = self.players[owner].objects_on_board.remove(&hex)?;
        self.players[owner].discard_pile.push_back(object.card.clone());
        Some(object)
    }

    /// Occupancy is exclusive: no hex may hold objects of both players.
    #[must_use]
    pub fn occupancy_is_exclusive(&self) -> bool {
        self.players[Color::Blue]
            .objects_on_board
            .keys()
            .all(|hex| !self.players[Color::Orange].objects_on_board.contains_key(hex))
    }

    /// All occupied hexes across both players, sorted.
    #[must_use]
    pub fn occupied_hexes(&self) -> Vec<Hex> {
        let mut hexes = Vec::new();
        for color in Color::both() {
            hexes.extend(self.players[color].occupied_hexes());
        }
        hexes.sort();
        hexes
    }

    /// Serialize to a compact binary checkpoint.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        bincode::serialize(self).map_err(|e| GameError::Serialization(e.to_string()))
    }

    /// Restore from a binary checkpoint.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        bincode::deserialize(bytes).map_err(|e| GameError::Serialization(e.to_string()))
    }
}
