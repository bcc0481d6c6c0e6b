//! End-to-end combat and placement scenarios through `engine::apply`.

use hexbots::core::{Card, CardId, CardKind, Color, GameState, MatchConfig, Stats};
use hexbots::engine::{apply, PlayerAction};
use hexbots::hex::Hex;
use hexbots::GameError;

fn base_state() -> GameState {
    let mut state = GameState::new(MatchConfig::default(), 0);
    for (color, hex) in [(Color::Blue, Hex::new(-3, 0)), (Color::Orange, Hex::new(3, 0))] {
        spawn_ready(
            &mut state,
            color,
            hex,
            Card::new(CardId(0), "Core", CardKind::Core, 0).with_stats(Stats::building(20)),
        );
    }
    state
}

fn spawn_ready(state: &mut GameState, color: Color, hex: Hex, card: Card) {
    state.spawn_object(color, hex, card);
    if let Some(obj) = state.players[color].objects_on_board.get_mut(&hex) {
        obj.reset_for_turn();
    }
}

fn robot(attack: i32, health: i32, speed: i32) -> Card {
    Card::new(CardId(42), "Robot", CardKind::Robot, 1).with_stats(Stats::robot(
        attack, health, speed,
    ))
}

#[test]
fn attacker_survives_and_takes_the_hex() {
    let mut base = base_state();
    spawn_ready(&mut base, Color::Blue, Hex::new(0, 0), robot(3, 5, 1));
    spawn_ready(&mut base, Color::Orange, Hex::new(1, 0), robot(2, 2, 1));

    let next = apply(
        &base,
        &PlayerAction::Attack {
            player: Color::Blue,
            from: Hex::new(0, 0),
            to: Hex::new(1, 0),
        },
    )
    .unwrap();

    assert!(next.players[Color::Orange]
        .object_at(Hex::new(1, 0))
        .is_none());
    let attacker = next.players[Color::Blue].object_at(Hex::new(1, 0)).unwrap();
    assert_eq!(attacker.stats.health, 3);
    assert!(attacker.has_attacked);
    // The defeated robot's card went to its owner's discard pile.
    assert_eq!(next.players[Color::Orange].discard_pile.len(), 1);
}

#[test]
fn mutual_destruction_leaves_both_hexes_empty() {
    let mut base = base_state();
    spawn_ready(&mut base, Color::Blue, Hex::new(0, 0), robot(5, 2, 1));
    spawn_ready(&mut base, Color::Orange, Hex::new(1, 0), robot(4, 3, 1));

    let next = apply(
        &base,
        &PlayerAction::Attack {
            player: Color::Blue,
            from: Hex::new(0, 0),
            to: Hex::new(1, 0),
        },
    )
    .unwrap();

    assert!(next.object_at(Hex::new(0, 0)).is_none());
    assert!(next.object_at(Hex::new(1, 0)).is_none());
}

#[test]
fn placement_with_insufficient_energy_is_rejected() {
    let mut base = base_state();
    base.players[Color::Blue].hand.push_back(
        Card::new(CardId(1), "Brute", CardKind::Robot, 3).with_stats(Stats::robot(3, 3, 1)),
    );
    base.players[Color::Blue].energy.set_available(2);

    let result = apply(
        &base,
        &PlayerAction::PlaceCard {
            player: Color::Blue,
            card_index: 0,
            hex: Hex::new(-2, 0),
        },
    );

    assert!(matches!(result, Err(GameError::IllegalAction(_))));
    // The caller's state is untouched either way.
    assert_eq!(base.players[Color::Blue].hand.len(), 1);
    assert_eq!(base.players[Color::Blue].energy.available, 2);
    assert!(base.players[Color::Blue].object_at(Hex::new(-2, 0)).is_none());
}

#[test]
fn movement_spends_speed_across_the_turn() {
    let mut base = base_state();
    spawn_ready(&mut base, Color::Blue, Hex::new(0, 0), robot(1, 1, 2));

    let s1 = apply(
        &base,
        &PlayerAction::MoveRobot {
            player: Color::Blue,
            from: Hex::new(0, 0),
            to: Hex::new(1, 0),
        },
    )
    .unwrap();
    let s2 = apply(
        &s1,
        &PlayerAction::MoveRobot {
            player: Color::Blue,
            from: Hex::new(1, 0),
            to: Hex::new(2, 0),
        },
    )
    .unwrap();

    let exhausted = apply(
        &s2,
        &PlayerAction::MoveRobot {
            player: Color::Blue,
            from: Hex::new(2, 0),
            to: Hex::new(2, -1),
        },
    );
    assert!(matches!(exhausted, Err(GameError::IllegalAction(_))));
}

#[test]
fn killing_the_core_wins_the_game() {
    let mut base = base_state();
    spawn_ready(&mut base, Color::Blue, Hex::new(2, 0), robot(25, 10, 1));

    let next = apply(
        &base,
        &PlayerAction::Attack {
            player: Color::Blue,
            from: Hex::new(2, 0),
            to: Hex::new(3, 0),
        },
    )
    .unwrap();

    assert!(next.game_over);
    assert_eq!(next.winner, Some(Color::Blue));

    // A finished game rejects every further action.
    let after = apply(&next, &PlayerAction::EndTurn { player: Color::Blue });
    assert!(matches!(after, Err(GameError::IllegalAction(_))));
}

#[test]
fn charge_attack_closes_the_distance() {
    let mut base = base_state();
    spawn_ready(&mut base, Color::Blue, Hex::new(0, 0), robot(2, 4, 2));
    spawn_ready(&mut base, Color::Orange, Hex::new(2, 1), robot(1, 5, 1));

    let next = apply(
        &base,
        &PlayerAction::Attack {
            player: Color::Blue,
            from: Hex::new(0, 0),
            to: Hex::new(2, 1),
        },
    )
    .unwrap();

    let defender = next.players[Color::Orange].object_at(Hex::new(2, 1)).unwrap();
    assert_eq!(defender.stats.health, 3);

    // The attacker ended adjacent to its target.
    let attacker_hex = next.players[Color::Blue]
        .occupied_hexes()
        .into_iter()
        .find(|h| *h != Hex::new(-3, 0))
        .unwrap();
    assert!(attacker_hex.is_adjacent(Hex::new(2, 1)));
}
