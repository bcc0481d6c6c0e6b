//! Trigger bindings carried by on-board objects.

use serde::{Deserialize, Serialize};

use crate::abilities::Program;
use crate::core::{CardKind, Color, Object};
use crate::triggers::{EventKind, GameEvent};

/// Extra filter on top of an event kind match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerCondition {
    /// Card-play triggers: only cards of this kind.
    CardKindIs(CardKind),
    /// Turn triggers: only the owner's turn (the default).
    OwnTurn,
    /// Turn triggers: fire on both players' turns.
    AnyTurn,
    /// Card-play triggers: fire on either player's plays.
    AnyPlayer,
}

/// A triggered ability: when `event` happens and the filters pass, run
/// `program` with the carrying object as the source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriggerBinding {
    pub event: EventKind,
    pub condition: Option<TriggerCondition>,
    pub program: Program,
}

impl TriggerBinding {
    #[must_use]
    pub fn new(event: EventKind, program: Program) -> Self {
        Self {
            event,
            condition: None,
            program,
        }
    }

    #[must_use]
    pub fn with_condition(mut self, condition: TriggerCondition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Whether this binding fires for `event` on an object controlled
    /// by `controller`.
    ///
    /// Object-scoped events (`AfterPlayed`, `AfterDamageReceived`) fire
    /// only on the object they happened to. Card-play and turn events
    /// default to the controller's own plays and turns unless widened
    /// by a condition.
    #[must_use]
    pub fn matches(&self, event: &GameEvent, object: &Object, controller: Color) -> bool {
        if self.event != event.kind {
            return false;
        }
        match event.kind {
            EventKind::AfterPlayed | EventKind::AfterDamageReceived => {
                event.object == Some(object.id)
            }
            EventKind::AfterCardPlay => {
                let player_ok = match self.condition {
                    Some(TriggerCondition::AnyPlayer) => true,
                    _ => event.player == Some(controller),
                };
                let kind_ok = match self.condition {
                    Some(TriggerCondition::CardKindIs(kind)) => event.card_kind == Some(kind),
                    _ => true,
                };
                player_ok && kind_ok
            }
            EventKind::BeginningOfTurn | EventKind::EndOfTurn => match self.condition {
                Some(TriggerCondition::AnyTurn) => true,
                _ => event.player == Some(controller),
            },
        }
    }
}
