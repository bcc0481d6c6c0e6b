//! Per-player state: energy, zones, and board occupancy.

use im::{HashMap, Vector};
use serde::{Deserialize, Serialize};

use crate::core::{Card, Color, Object};
use crate::hex::Hex;

/// A player's energy pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Energy {
    pub available: i32,
    pub max: i32,
}

impl Energy {
    #[must_use]
    pub const fn new(amount: i32) -> Self {
        Self {
            available: amount,
            max: amount,
        }
    }

    #[must_use]
    pub fn can_afford(&self, cost: i32) -> bool {
        self.available >= cost
    }

    /// Spend energy. Callers check affordability first; spending below
    /// zero is a caller bug.
    pub fn spend(&mut self, amount: i32) {
        debug_assert!(self.available >= amount);
        self.available -= amount;
    }

    /// Gain available energy, clamped at the current maximum.
    pub fn gain(&mut self, amount: i32) {
        self.available = (self.available + amount).min(self.max);
    }

    pub fn set_available(&mut self, amount: i32) {
        self.available = amount.min(self.max).max(0);
    }

    /// Start-of-turn replenishment: grow the maximum by one up to `cap`
    /// and refill to it.
    pub fn replenish(&mut self, cap: i32) {
        self.max = (self.max + 1).min(cap);
        self.available = self.max;
    }
}

/// Everything owned by one player.
///
/// Zones use `im` persistent collections so cloning a whole game state
/// for speculative execution stays O(1) per structure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: Color,
    pub energy: Energy,
    pub hand: Vector<Card>,
    pub deck: Vector<Card>,
    pub discard_pile: Vector<Card>,
    pub objects_on_board: HashMap<Hex, Object>,
    pub selected_card: Option<usize>,
}

impl PlayerState {
    #[must_use]
    pub fn new(name: Color, starting_energy: i32) -> Self {
        Self {
            name,
            energy: Energy::new(starting_energy),
            hand: Vector::new(),
            deck: Vector::new(),
            discard_pile: Vector::new(),
            objects_on_board: HashMap::new(),
            selected_card: None,
        }
    }

    /// Draw from the top of the deck into the hand. Drawing from an
    /// empty deck does nothing.
    pub fn draw(&mut self, count: usize) {
        for _ in 0..count {
            match self.deck.pop_front() {
                Some(card) => self.hand.push_back(card),
                None => break,
            }
        }
    }

    /// Remove a card from the hand by index.
    pub fn remove_from_hand(&mut self, index: usize) -> Option<Card> {
        if index < self.hand.len() {
            Some(self.hand.remove(index))
        } else {
            None
        }
    }

    #[must_use]
    pub fn object_at(&self, hex: Hex) -> Option<&Object> {
        self.objects_on_board.get(&hex)
    }

    /// Occupied hexes in sorted order, for deterministic iteration.
    #[must_use]
    pub fn occupied_hexes(&self) -> Vec<Hex> {
        let mut hexes: Vec<Hex> = self.objects_on_board.keys().copied().collect();
        hexes.sort();
        hexes
    }
}
