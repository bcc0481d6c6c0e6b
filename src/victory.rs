//! Victory checking.

use tracing::info;

use crate::core::{CardKind, Color, GameState};

/// Mark the game over if either core is gone or dead. Losing both at
/// once is a draw. Runs after every committed action; once set,
/// `game_over` freezes the state machine.
pub fn check(state: &mut GameState) {
    if state.game_over {
        return;
    }

    let mut losers = Vec::new();
    for color in Color::both() {
        let core_alive = state.players[color]
            .objects_on_board
            .values()
            .any(|obj| obj.card.kind == CardKind::Core && obj.stats.health > 0);
        if !core_alive {
            losers.push(color);
        }
    }

    match losers.as_slice() {
        [] => {}
        [loser] => {
            state.game_over = true;
            state.winner = Some(loser.opponent());
            info!(winner = %loser.opponent(), "game over");
        }
        _ => {
            state.game_over = true;
            state.winner = None;
            info!("game over: draw");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, CardId, MatchConfig, Stats};
    use crate::hex::Hex;

    fn state_with_cores() -> GameState {
        let mut state = GameState::new(MatchConfig::default(), 0);
        for (color, hex) in [(Color::Blue, Hex::new(-3, 0)), (Color::Orange, Hex::new(3, 0))] {
            state.spawn_object(
                color,
                hex,
                Card::new(CardId(0), "Core", CardKind::Core, 0).with_stats(Stats::building(20)),
            );
        }
        state
    }

    #[test]
    fn test_both_cores_alive_no_winner() {
        let mut state = state_with_cores();
        check(&mut state);
        assert!(!state.game_over);
        assert_eq!(state.winner, None);
    }

    #[test]
    fn test_dead_core_loses() {
        let mut state = state_with_cores();
        if let Some(core) = state.players[Color::Orange]
            .objects_on_board
            .get_mut(&Hex::new(3, 0))
        {
            core.stats.health = 0;
        }

        check(&mut state);
        assert!(state.game_over);
        assert_eq!(state.winner, Some(Color::Blue));
    }

    #[test]
    fn test_missing_core_loses() {
        let mut state = state_with_cores();
        state.players[Color::Blue]
            .objects_on_board
            .remove(&Hex::new(-3, 0));

        check(&mut state);
        assert!(state.game_over);
        assert_eq!(state.winner, Some(Color::Orange));
    }

    #[test]
    fn test_simultaneous_loss_is_a_draw() {
        let mut state = state_with_cores();
        for color in Color::both() {
            let hexes = state.players[color].occupied_hexes();
            for hex in hexes {
                if let Some(core) = state.players[color].objects_on_board.get_mut(&hex) {
                    core.stats.health = 0;
                }
            }
        }

        check(&mut state);
        assert!(state.game_over);
        assert_eq!(state.winner, None);
    }
}
