//! Board queries: placement, movement, and attack ranges.

use rustc_hash::FxHashMap;

use crate::core::{CardKind, Color, GameState, Object};
use crate::hex::{shapes, Hex};

/// Hexes where `player` may place a new object: unoccupied, in bounds,
/// and adjacent to their core. Sorted for determinism.
#[must_use]
pub fn valid_placement_hexes(state: &GameState, player: Color) -> Vec<Hex> {
    let Some(core_hex) = core_hex(state, player) else {
        return Vec::new();
    };
    let mut hexes: Vec<Hex> = core_hex
        .neighbors()
        .into_iter()
        .filter(|&h| shapes::in_bounds(h, state.config.board_radius) && !state.is_occupied(h))
        .collect();
    hexes.sort();
    hexes
}

/// Flood fill of hexes reachable from `from` within `range` steps.
/// Occupied hexes block both entry and passage. The origin maps to
/// distance 0.
#[must_use]
pub fn reachable_hexes(state: &GameState, from: Hex, range: u32) -> FxHashMap<Hex, u32> {
    let mut distances = FxHashMap::default();
    distances.insert(from, 0);
    let mut frontier = vec![from];

    for depth in 1..=range {
        let mut next = Vec::new();
        for hex in frontier {
            for neighbor in hex.neighbors() {
                if distances.contains_key(&neighbor) {
                    continue;
                }
                if !shapes::in_bounds(neighbor, state.config.board_radius) {
                    continue;
                }
                if state.is_occupied(neighbor) {
                    continue;
                }
                distances.insert(neighbor, depth);
                next.push(neighbor);
            }
        }
        frontier = next;
    }

    distances
}

/// Destinations the robot at `hex` can move to this turn. Empty when
/// the occupant cannot move at all.
#[must_use]
pub fn valid_movement_hexes(state: &GameState, player: Color, hex: Hex) -> Vec<Hex> {
    let Some(obj) = state.players[player].object_at(hex) else {
        return Vec::new();
    };
    if !can_move(obj) {
        return Vec::new();
    }
    let mut hexes: Vec<Hex> = reachable_hexes(state, hex, obj.moves_remaining() as u32)
        .into_keys()
        .filter(|&h| h != hex)
        .collect();
    hexes.sort();
    hexes
}

/// Enemy-occupied hexes the robot at `hex` can attack this turn,
/// either directly or by charging into adjacency first.
#[must_use]
pub fn valid_attack_hexes(state: &GameState, player: Color, hex: Hex) -> Vec<Hex> {
    let Some(obj) = state.players[player].object_at(hex) else {
        return Vec::new();
    };
    if !can_attack(obj) {
        return Vec::new();
    }
    let range = if can_move(obj) {
        obj.moves_remaining() as u32
    } else {
        0
    };
    let reachable = reachable_hexes(state, hex, range);

    let mut hexes: Vec<Hex> = state.players[player.opponent()]
        .occupied_hexes()
        .into_iter()
        .filter(|target| {
            target
                .neighbors()
                .into_iter()
                .any(|n| reachable.contains_key(&n))
        })
        .collect();
    hexes.sort();
    hexes
}

pub(crate) fn can_move(obj: &Object) -> bool {
    obj.card.kind == CardKind::Robot
        && !obj.cant_move
        && !obj.has_attacked
        && obj.moves_remaining() > 0
}

pub(crate) fn can_attack(obj: &Object) -> bool {
    obj.card.kind == CardKind::Robot
        && obj.stats.attack.is_some()
        && !obj.cant_attack
        && !obj.has_attacked
}

pub(crate) fn core_hex(state: &GameState, player: Color) -> Option<Hex> {
    state.players[player]
        .objects_on_board
        .iter()
        .find(|(_, obj)| obj.card.kind == CardKind::Core)
        .map(|(hex, _)| *hex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, CardId, MatchConfig, Stats};

    fn base_state() -> GameState {
        let mut state = GameState::new(MatchConfig::default(), 0);
        state.spawn_object(
            Color::Blue,
            Hex::new(-3, 0),
            Card::new(CardId(0), "Core", CardKind::Core, 0).with_stats(Stats::building(20)),
        );
        state
    }

    fn ready_robot(state: &mut GameState, player: Color, hex: Hex, speed: i32) {
        let card = Card::new(CardId(10), "Bot", CardKind::Robot, 1)
            .with_stats(Stats::robot(2, 2, speed));
        state.spawn_object(player, hex, card);
        if let Some(obj) = state.players[player].objects_on_board.get_mut(&hex) {
            obj.reset_for_turn();
        }
    }

    #[test]
    fn test_placement_adjacent_to_core() {
        let state = base_state();
        let hexes = valid_placement_hexes(&state, Color::Blue);

        // The core sits on the board edge; only in-bounds neighbors count.
        assert!(!hexes.is_empty());
        for hex in &hexes {
            assert!(hex.is_adjacent(Hex::new(-3, 0)));
            assert!(shapes::in_bounds(*hex, 3));
        }
    }

    #[test]
    fn test_placement_excludes_occupied() {
        let mut state = base_state();
        let hexes = valid_placement_hexes(&state, Color::Blue);
        let taken = hexes[0];
        ready_robot(&mut state, Color::Blue, taken, 1);

        assert!(!valid_placement_hexes(&state, Color::Blue).contains(&taken));
    }

    #[test]
    fn test_movement_respects_speed_and_blockers() {
        let mut state = base_state();
        ready_robot(&mut state, Color::Blue, Hex::new(0, 0), 2);
        // Blocker straight east.
        ready_robot(&mut state, Color::Orange, Hex::new(1, 0), 1);

        let hexes = valid_movement_hexes(&state, Color::Blue, Hex::new(0, 0));
        assert!(!hexes.contains(&Hex::new(1, 0)));
        // Two east is reachable by going around the blocker.
        assert!(hexes.contains(&Hex::new(2, -1)));
        assert!(!hexes.contains(&Hex::new(0, 0)));
        for hex in &hexes {
            assert!(Hex::new(0, 0).distance(*hex) <= 2);
        }
    }

    #[test]
    fn test_attack_includes_charge_range() {
        let mut state = base_state();
        ready_robot(&mut state, Color::Blue, Hex::new(0, 0), 2);
        // Enemy three away: reachable hexes within 2 include one adjacent.
        ready_robot(&mut state, Color::Orange, Hex::new(3, 0), 1);

        let hexes = valid_attack_hexes(&state, Color::Blue, Hex::new(0, 0));
        assert!(hexes.contains(&Hex::new(3, 0)));
    }

    #[test]
    fn test_exhausted_robot_cannot_act() {
        let mut state = base_state();
        ready_robot(&mut state, Color::Blue, Hex::new(0, 0), 2);
        if let Some(obj) = state.players[Color::Blue]
            .objects_on_board
            .get_mut(&Hex::new(0, 0))
        {
            obj.has_attacked = true;
        }

        assert!(valid_movement_hexes(&state, Color::Blue, Hex::new(0, 0)).is_empty());
        assert!(valid_attack_hexes(&state, Color::Blue, Hex::new(0, 0)).is_empty());
    }
}
