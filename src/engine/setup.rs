//! Match setup.

use crate::abilities::{
    AttributeOp, CollectionExpr, ConditionExpr, NumberExpr, Op, PlayerExpr, Program, TargetExpr,
};
use crate::core::{
    Attribute, Card, CardId, CardKind, Color, GameState, MatchConfig, PerPlayer, Stats,
};
use crate::hex::Hex;
use crate::triggers::EventKind;

/// Builds an initial game state: cores on opposite corners, shuffled
/// decks, and opening hands.
///
/// ## Example
///
/// ```
/// use hexbots::engine::MatchBuilder;
///
/// let state = MatchBuilder::new().with_seed(42).build();
/// assert!(!state.game_over);
/// ```
pub struct MatchBuilder {
    config: MatchConfig,
    seed: u64,
    decks: Option<PerPlayer<Vec<Card>>>,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: MatchConfig::default(),
            seed: 0,
            decks: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use explicit decks instead of the starter set. Card ids must be
    /// unique across both decks; hand targeting relies on it.
    #[must_use]
    pub fn with_decks(mut self, decks: PerPlayer<Vec<Card>>) -> Self {
        self.decks = Some(decks);
        self
    }

    #[must_use]
    pub fn build(self) -> GameState {
        let config = self.config;
        let mut state = GameState::new(config, self.seed);

        let radius = config.board_radius;
        let core_hexes = PerPlayer {
            blue: Hex::cube(-radius, 0, radius),
            orange: Hex::cube(radius, 0, -radius),
        };
        for color in Color::both() {
            let core = Card::new(
                CardId(u32::from(color == Color::Orange)),
                format!("{color} core"),
                CardKind::Core,
                0,
            )
            .with_stats(Stats::building(config.core_health));
            let hex = *core_hexes.get(color);
            state.spawn_object(color, hex, core);
            if let Some(obj) = state.players[color].objects_on_board.get_mut(&hex) {
                obj.reset_for_turn();
            }
        }

        let decks = self.decks.unwrap_or_else(|| {
            let mut next_id = 100;
            PerPlayer::new(|_| starter_deck(&mut next_id))
        });
        for color in Color::both() {
            let mut deck = decks.get(color).clone();
            state.rng.shuffle(&mut deck);
            state.players[color].deck = deck.into_iter().collect();
            state.players[color].draw(config.starting_hand_size);
        }

        state
    }
}

fn next_card_id(counter: &mut u32) -> CardId {
    let id = CardId(*counter);
    *counter += 1;
    id
}

/// The built-in starter deck. Between them these cards exercise the
/// whole operation vocabulary.
pub fn starter_deck(next_id: &mut u32) -> Vec<Card> {
    let mut deck = Vec::new();

    for _ in 0..3 {
        deck.push(
            Card::new(next_card_id(next_id), "Scout", CardKind::Robot, 1)
                .with_stats(Stats::robot(1, 2, 2))
                .with_text("A fast, fragile skirmisher."),
        );
    }
    for _ in 0..3 {
        deck.push(
            Card::new(next_card_id(next_id), "Guardsman", CardKind::Robot, 2)
                .with_stats(Stats::robot(2, 3, 1)),
        );
    }
    for _ in 0..2 {
        deck.push(
            Card::new(next_card_id(next_id), "Zap", CardKind::Event, 1)
                .with_program(Program::single(Op::deal_damage(
                    TargetExpr::Choose(CollectionExpr::AllObjectsOnBoard),
                    2,
                )))
                .with_text("Deal 2 damage to a chosen object."),
        );
    }
    for _ in 0..2 {
        deck.push(
            Card::new(next_card_id(next_id), "Supply Drop", CardKind::Event, 1)
                .with_program(Program::single(Op::draw(PlayerExpr::Self_, 2)))
                .with_text("Draw two cards."),
        );
    }
    deck.push(
        Card::new(next_card_id(next_id), "Power Surge", CardKind::Event, 0)
            .with_program(Program::single(Op::gain_energy(PlayerExpr::Self_, 2)))
            .with_text("Gain 2 energy."),
    );
    deck.push(
        Card::new(next_card_id(next_id), "Recharge", CardKind::Event, 1)
            .with_program(Program::single(Op::CanMoveAgain {
                targets: TargetExpr::Choose(CollectionExpr::ObjectsMatching {
                    kind: Some(CardKind::Robot),
                    conditions: vec![ConditionExpr::ControlledBy(PlayerExpr::Self_)],
                }),
            }))
            .with_text("A chosen friendly robot can move again."),
    );
    deck.push(
        Card::new(next_card_id(next_id), "Disarm", CardKind::Event, 1)
            .with_program(Program::single(Op::SetAttribute {
                targets: TargetExpr::Choose(CollectionExpr::ObjectsMatching {
                    kind: Some(CardKind::Robot),
                    conditions: Vec::new(),
                }),
                attribute: Attribute::Attack,
                value: NumberExpr::Const(0),
            }))
            .with_text("Set a chosen robot's attack to 0."),
    );
    deck.push(
        Card::new(next_card_id(next_id), "Demolish", CardKind::Event, 3)
            .with_program(Program::single(Op::Destroy {
                targets: TargetExpr::Choose(CollectionExpr::ObjectsMatching {
                    kind: Some(CardKind::Structure),
                    conditions: Vec::new(),
                }),
            }))
            .with_text("Destroy a chosen structure."),
    );
    deck.push(
        Card::new(next_card_id(next_id), "Mind Probe", CardKind::Event, 1)
            .with_program(Program::single(Op::Destroy {
                targets: TargetExpr::Choose(CollectionExpr::CardsInHand(PlayerExpr::Opponent)),
            }))
            .with_text("Your opponent discards a chosen card."),
    );
    deck.push(
        Card::new(next_card_id(next_id), "War Cry", CardKind::Event, 2)
            .with_program(Program::single(Op::ModifyAttribute {
                targets: TargetExpr::All(CollectionExpr::ObjectsMatching {
                    kind: Some(CardKind::Robot),
                    conditions: vec![ConditionExpr::ControlledBy(PlayerExpr::Self_)],
                }),
                attribute: Attribute::Attack,
                op: AttributeOp::Add(NumberExpr::Const(1)),
            }))
            .with_text("Your robots get +1 attack."),
    );
    deck.push(
        Card::new(next_card_id(next_id), "Supply Depot", CardKind::Structure, 2)
            .with_stats(Stats::building(4))
            .with_program(Program::single(Op::AttachTrigger {
                targets: TargetExpr::ThisObject,
                event: EventKind::EndOfTurn,
                condition: None,
                program: Program::single(Op::draw(PlayerExpr::Self_, 1)),
            }))
            .with_text("At the end of your turn, draw a card."),
    );
    deck.push(
        Card::new(next_card_id(next_id), "Training Camp", CardKind::Structure, 2)
            .with_stats(Stats::building(3))
            .with_program(Program::single(Op::AttachAbility {
                targets: TargetExpr::ThisObject,
                program: Program::single(Op::buff(
                    TargetExpr::Choose(CollectionExpr::ObjectsMatching {
                        kind: Some(CardKind::Robot),
                        conditions: vec![ConditionExpr::ControlledBy(PlayerExpr::Self_)],
                    }),
                    Attribute::Health,
                    1,
                )),
            }))
            .with_text("Activate: give a chosen friendly robot +1 health."),
    );

    deck
}
