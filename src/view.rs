//! Read-only projections of the state for rendering layers.

use serde::Serialize;

use crate::core::{CardId, CardKind, Color, GameState, Stats};
use crate::engine::board;
use crate::hex::Hex;

/// One occupied hex, with everything a renderer needs to draw it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HexView {
    pub hex: Hex,
    pub owner: Color,
    pub name: String,
    pub kind: CardKind,
    pub stats: Stats,
    pub can_move: bool,
    pub can_attack: bool,
}

/// All occupied hexes, sorted by hex.
#[must_use]
pub fn board_view(state: &GameState) -> Vec<HexView> {
    let mut views: Vec<HexView> = Vec::new();
    for color in Color::both() {
        for (hex, obj) in state.players[color].objects_on_board.iter() {
            views.push(HexView {
                hex: *hex,
                owner: color,
                name: obj.card.name.clone(),
                kind: obj.card.kind,
                stats: obj.stats,
                can_move: color == state.current_player && board::can_move(obj),
                can_attack: color == state.current_player && board::can_attack(obj),
            });
        }
    }
    views.sort_by_key(|v| v.hex);
    views
}

/// What the UI should highlight right now.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Highlights {
    /// Candidate hexes of an open target request.
    pub choice_hexes: Vec<Hex>,
    /// Candidate cards of an open target request.
    pub choice_cards: Vec<CardId>,
    /// Legal placement hexes for the selected card.
    pub placement: Vec<Hex>,
    /// Legal destinations for the selected robot.
    pub movement: Vec<Hex>,
    /// Legal attack targets for the selected robot.
    pub attack: Vec<Hex>,
}

/// Highlights for the current selection or pending choice. A pending
/// target request overrides everything else.
#[must_use]
pub fn highlights(state: &GameState) -> Highlights {
    if let Some(pending) = crate::engine::pending_request(state) {
        return Highlights {
            choice_hexes: pending.possible_hexes.clone(),
            choice_cards: pending.possible_cards.clone(),
            ..Highlights::default()
        };
    }

    let player = state.current_player;
    let mut out = Highlights::default();

    if let Some(index) = state.players[player].selected_card {
        let placeable = state.players[player]
            .hand
            .get(index)
            .is_some_and(|c| c.kind.is_placeable());
        if placeable {
            out.placement = board::valid_placement_hexes(state, player);
        }
    }

    if let Some(hex) = state.selected_tile {
        out.movement = board::valid_movement_hexes(state, player, hex);
        out.attack = board::valid_attack_hexes(state, player, hex);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, MatchConfig};

    #[test]
    fn test_board_view_is_sorted_and_complete() {
        let state = crate::engine::MatchBuilder::new().build();
        let views = board_view(&state);

        assert_eq!(views.len(), 2);
        assert!(views.windows(2).all(|w| w[0].hex < w[1].hex));
        assert!(views.iter().all(|v| v.kind == CardKind::Core));
    }

    #[test]
    fn test_highlights_for_selected_card() {
        let mut state = crate::engine::MatchBuilder::new().build();
        state.players[Color::Blue].hand.push_back(
            Card::new(CardId(999), "Bot", CardKind::Robot, 1)
                .with_stats(Stats::robot(1, 1, 1)),
        );
        let index = state.players[Color::Blue].hand.len() - 1;
        state.players[Color::Blue].selected_card = Some(index);

        let h = highlights(&state);
        assert!(!h.placement.is_empty());
        assert!(h.choice_hexes.is_empty());
    }

    #[test]
    fn test_pending_choice_overrides_selection() {
        let mut state = GameState::new(MatchConfig::default(), 0);
        state.pending_target = Some(crate::core::TargetRequest::open(
            vec![Hex::new(1, 0)],
            Vec::new(),
            Vec::new(),
        ));

        let h = highlights(&state);
        assert_eq!(h.choice_hexes, vec![Hex::new(1, 0)]);
        assert!(h.placement.is_empty());
    }
}
