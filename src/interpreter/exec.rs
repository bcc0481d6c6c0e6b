//! Program execution.
//!
//! Programs run against the live state through an [`ExecutionContext`]
//! that carries the acting player, the source object (for `ThisObject`),
//! and the choice stream. All parameters are explicit; nothing about an
//! execution is ambient, so a suspended action can be re-executed from
//! scratch with the accumulated choices and reach the identical point.

use tracing::debug;

use crate::abilities::{
    AttributeOp, CollectionExpr, ConditionExpr, NumberExpr, Op, PlayerExpr, Program, TargetExpr,
};
use crate::core::{
    Attribute, CardId, CardKind, ChosenEntity, Color, GameState, ObjectId, TargetRequest,
};
use crate::interpreter::{ChoiceStream, ExecStatus};
use crate::triggers::{self, EventKind, GameEvent};

/// Run one program. The public entry point for play effects, activated
/// abilities, and trigger bodies alike.
pub fn run_program(
    state: &mut GameState,
    program: &Program,
    player: Color,
    source: Option<ObjectId>,
    choices: &mut ChoiceStream,
) -> ExecStatus {
    let mut ctx = ExecutionContext {
        state,
        player,
        source,
        choices,
    };
    match ctx.run_program(program) {
        Ok(()) => ExecStatus::Complete,
        Err(Suspend) => ExecStatus::Suspended,
    }
}

/// Marker for suspension, threaded with `?`.
struct Suspend;

/// A target expression resolves to entities: on-board objects or cards
/// in hand. Ops act on the entity kinds they understand and ignore the
/// rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Entity {
    Object(ObjectId),
    Card(Color, CardId),
}

/// All the context one program execution needs.
pub struct ExecutionContext<'a> {
    pub state: &'a mut GameState,
    pub player: Color,
    pub source: Option<ObjectId>,
    pub choices: &'a mut ChoiceStream,
}

impl ExecutionContext<'_> {
    fn run_program(&mut self, program: &Program) -> Result<(), Suspend> {
        for op in &program.ops {
            self.run_op(op)?;
        }
        Ok(())
    }

    fn run_op(&mut self, op: &Op) -> Result<(), Suspend> {
        match op {
            Op::DealDamage { targets, amount } => {
                let amount = self.eval_number(amount)?;
                let ids = self.object_targets(targets)?;
                self.deal_damage(&ids, amount)?;
            }
            Op::Destroy { targets } => {
                let entities = self.eval_targets(targets)?;
                for entity in entities {
                    match entity {
                        Entity::Object(id) => {
                            if let Some((owner, hex)) = self.state.find_object(id) {
                                debug!(object = %id, "destroyed");
                                self.state.remove_object(owner, hex);
                            }
                        }
                        Entity::Card(owner, card_id) => self.discard_from_hand(owner, card_id),
                    }
                }
            }
            Op::Draw { players, count } => {
                let count = self.eval_number(count)?.max(0) as usize;
                for color in self.eval_players(*players) {
                    self.state.players[color].draw(count);
                }
            }
            Op::ModifyAttribute {
                targets,
                attribute,
                op,
            } => {
                let ids = self.object_targets(targets)?;
                for id in ids {
                    let current = match self.lookup(id) {
                        Some((color, hex)) => self.state.players[color]
                            .objects_on_board
                            .get(&hex)
                            .map(|o| o.attribute(*attribute)),
                        None => None,
                    };
                    let Some(current) = current else { continue };
                    let value = self.apply_attribute_op(current, op)?;
                    self.write_attribute(id, *attribute, value);
                }
                self.cleanup();
            }
            Op::SetAttribute {
                targets,
                attribute,
                value,
            } => {
                let value = self.eval_number(value)?;
                let ids = self.object_targets(targets)?;
                for id in ids {
                    self.write_attribute(id, *attribute, value);
                }
                self.cleanup();
            }
            Op::ModifyEnergy { players, op } => {
                for color in self.eval_players(*players) {
                    let current = self.state.players[color].energy.available;
                    let value = self.apply_attribute_op(current, op)?;
                    self.state.players[color].energy.set_available(value);
                }
            }
            Op::CanMoveAgain { targets } => {
                let ids = self.object_targets(targets)?;
                for id in ids {
                    if let Some((color, hex)) = self.lookup(id) {
                        if let Some(obj) =
                            self.state.players[color].objects_on_board.get_mut(&hex)
                        {
                            obj.moves_used = 0;
                            obj.has_moved = false;
                            obj.cant_move = false;
                        }
                    }
                }
            }
            Op::AttachTrigger {
                targets,
                event,
                condition,
                program,
            } => {
                let ids = self.object_targets(targets)?;
                for id in ids {
                    if let Some((color, hex)) = self.lookup(id) {
                        if let Some(obj) =
                            self.state.players[color].objects_on_board.get_mut(&hex)
                        {
                            let mut binding =
                                crate::triggers::TriggerBinding::new(*event, program.clone());
                            binding.condition = *condition;
                            obj.triggers.push(binding);
                        }
                    }
                }
            }
            Op::AttachAbility { targets, program } => {
                let ids = self.object_targets(targets)?;
                for id in ids {
                    if let Some((color, hex)) = self.lookup(id) {
                        if let Some(obj) =
                            self.state.players[color].objects_on_board.get_mut(&hex)
                        {
                            obj.abilities.push(program.clone());
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Apply damage to every target, then fire `AfterDamageReceived`
    /// per target, then clean up the dead.
    fn deal_damage(&mut self, ids: &[ObjectId], amount: i32) -> Result<(), Suspend> {
        if amount <= 0 {
            return Ok(());
        }
        let mut damaged = Vec::new();
        for &id in ids {
            if let Some((color, hex)) = self.lookup(id) {
                if let Some(obj) = self.state.players[color].objects_on_board.get_mut(&hex) {
                    obj.stats.health -= amount;
                    damaged.push(id);
                }
            }
        }
        for id in damaged {
            let event = GameEvent::new(EventKind::AfterDamageReceived)
                .with_object(id)
                .with_amount(amount);
            if triggers::dispatch(self.state, &event, self.choices) == ExecStatus::Suspended {
                return Err(Suspend);
            }
        }
        self.cleanup();
        Ok(())
    }

    /// Remove objects whose health has reached zero. Their card goes to
    /// the owner's discard pile. Loops because a removal can expose
    /// nothing further here, but attached state keeps the pass cheap.
    fn cleanup(&mut self) {
        loop {
            let mut dead = None;
            'scan: for color in Color::both() {
                for (hex, obj) in self.state.players[color].objects_on_board.iter() {
                    if obj.stats.health <= 0 {
                        dead = Some((color, *hex));
                        break 'scan;
                    }
                }
            }
            match dead {
                Some((color, hex)) => {
                    self.state.remove_object(color, hex);
                }
                None => break,
            }
        }
    }

    fn lookup(&self, id: ObjectId) -> Option<(Color, crate::hex::Hex)> {
        self.state.find_object(id)
    }

    fn write_attribute(&mut self, id: ObjectId, attribute: Attribute, value: i32) {
        let cap = self.state.config.attribute_cap;
        if let Some((color, hex)) = self.lookup(id) {
            if let Some(obj) = self.state.players[color].objects_on_board.get_mut(&hex) {
                obj.stats.set(attribute, value.clamp(0, cap));
            }
        }
    }

    fn apply_attribute_op(&mut self, current: i32, op: &AttributeOp) -> Result<i32, Suspend> {
        Ok(match op {
            AttributeOp::Add(n) => current + self.eval_number(n)?,
            AttributeOp::Subtract(n) => current - self.eval_number(n)?,
            AttributeOp::Multiply(n) => current * self.eval_number(n)?,
            AttributeOp::Set(n) => self.eval_number(n)?,
        })
    }

    fn discard_from_hand(&mut self, owner: Color, card_id: CardId) {
        let hand = &self.state.players[owner].hand;
        if let Some(index) = hand.iter().position(|c| c.id == card_id) {
            let card = self.state.players[owner].hand.remove(index);
            self.state.players[owner].discard_pile.push_back(card);
        }
    }

    fn eval_players(&self, expr: PlayerExpr) -> Vec<Color> {
        match expr {
            PlayerExpr::Self_ => vec![self.player],
            PlayerExpr::Opponent => vec![self.player.opponent()],
            PlayerExpr::AllPlayers => Color::both().to_vec(),
        }
    }

    fn core_of(&self, color: Color) -> Option<ObjectId> {
        self.state.players[color]
            .objects_on_board
            .values()
            .find(|obj| obj.card.kind == CardKind::Core)
            .map(|obj| obj.id)
    }

    /// Resolve targets, keeping only on-board objects. Player targets
    /// resolve to that player's core.
    fn object_targets(&mut self, expr: &TargetExpr) -> Result<Vec<ObjectId>, Suspend> {
        let entities = self.eval_targets(expr)?;
        Ok(entities
            .into_iter()
            .filter_map(|e| match e {
                Entity::Object(id) => Some(id),
                Entity::Card(..) => None,
            })
            .collect())
    }

    fn eval_targets(&mut self, expr: &TargetExpr) -> Result<Vec<Entity>, Suspend> {
        Ok(match expr {
            TargetExpr::Self_ => self.core_of(self.player).map(Entity::Object).into_iter().collect(),
            TargetExpr::Opponent => self
                .core_of(self.player.opponent())
                .map(Entity::Object)
                .into_iter()
                .collect(),
            TargetExpr::AllPlayers => Color::both()
                .into_iter()
                .filter_map(|c| self.core_of(c))
                .map(Entity::Object)
                .collect(),
            TargetExpr::ThisObject => self
                .source
                .filter(|id| self.state.find_object(*id).is_some())
                .map(Entity::Object)
                .into_iter()
                .collect(),
            TargetExpr::All(collection) => self.eval_collection(collection)?,
            TargetExpr::Choose(collection) => {
                let candidates = self.eval_collection(collection)?;
                match self.choices.next() {
                    Some(chosen) => {
                        let entity = self.entity_for_choice(chosen);
                        match entity {
                            Some(e) if candidates.contains(&e) => vec![e],
                            // A stale choice (its target died mid-cascade)
                            // resolves to nothing rather than suspending again.
                            _ => Vec::new(),
                        }
                    }
                    None => {
                        self.suspend_for(&candidates);
                        return Err(Suspend);
                    }
                }
            }
        })
    }

    /// Map a player's pick back onto a live entity.
    fn entity_for_choice(&self, chosen: ChosenEntity) -> Option<Entity> {
        match chosen {
            ChosenEntity::Hex(hex) => self.state.object_at(hex).map(|(_, obj)| Entity::Object(obj.id)),
            ChosenEntity::Card(id) => Color::both()
                .into_iter()
                .find(|&c| self.state.players[c].hand.iter().any(|card| card.id == id))
                .map(|c| Entity::Card(c, id)),
        }
    }

    /// Write a target request for the candidate set into the state.
    /// An empty candidate set still suspends; the player's only way out
    /// is cancellation.
    fn suspend_for(&mut self, candidates: &[Entity]) {
        let mut possible_hexes = Vec::new();
        let mut possible_cards = Vec::new();
        for entity in candidates {
            match entity {
                Entity::Object(id) => {
                    if let Some((_, hex)) = self.state.find_object(*id) {
                        possible_hexes.push(hex);
                    }
                }
                Entity::Card(_, card_id) => possible_cards.push(*card_id),
            }
        }
        possible_hexes.sort();
        possible_cards.sort();
        debug!(
            hexes = possible_hexes.len(),
            cards = possible_cards.len(),
            "suspending for target choice"
        );
        self.state.pending_target = Some(TargetRequest::open(
            possible_hexes,
            possible_cards,
            self.choices.supplied().to_vec(),
        ));
    }

    fn eval_collection(&mut self, expr: &CollectionExpr) -> Result<Vec<Entity>, Suspend> {
        Ok(match expr {
            CollectionExpr::AllObjectsOnBoard => self
                .targetable_objects()
                .into_iter()
                .map(Entity::Object)
                .collect(),
            CollectionExpr::ObjectsMatching { kind, conditions } => {
                let candidates = self.targetable_objects();
                let mut out = Vec::new();
                for id in candidates {
                    let Some((color, hex)) = self.lookup(id) else { continue };
                    let Some(obj) = self.state.players[color].object_at(hex) else {
                        continue;
                    };
                    if let Some(kind) = kind {
                        if obj.card.kind != *kind {
                            continue;
                        }
                    }
                    let mut all_pass = true;
                    for condition in conditions {
                        if !self.eval_condition(condition, id)? {
                            all_pass = false;
                            break;
                        }
                    }
                    if all_pass {
                        out.push(Entity::Object(id));
                    }
                }
                out
            }
            CollectionExpr::CardsInHand(players) => {
                let mut out = Vec::new();
                for color in self.eval_players(*players) {
                    for card in self.state.players[color].hand.iter() {
                        out.push(Entity::Card(color, card.id));
                    }
                }
                out
            }
        })
    }

    /// Objects eligible for collection targeting, in id order. An
    /// object is not a valid target during its own just-played window.
    fn targetable_objects(&self) -> Vec<ObjectId> {
        let mut ids = Vec::new();
        for color in Color::both() {
            for obj in self.state.players[color].objects_on_board.values() {
                if !obj.just_played {
                    ids.push(obj.id);
                }
            }
        }
        ids.sort();
        ids
    }

    fn eval_condition(&mut self, condition: &ConditionExpr, id: ObjectId) -> Result<bool, Suspend> {
        let Some((controller, hex)) = self.lookup(id) else {
            return Ok(false);
        };
        Ok(match condition {
            ConditionExpr::ControlledBy(players) => {
                self.eval_players(*players).contains(&controller)
            }
            ConditionExpr::AdjacentTo(target) => {
                let anchors = self.object_targets(target)?;
                anchors.iter().any(|&a| {
                    self.lookup(a)
                        .is_some_and(|(_, other)| hex.is_adjacent(other))
                })
            }
            ConditionExpr::WithinDistanceOf { distance, target } => {
                let anchors = self.object_targets(target)?;
                anchors.iter().any(|&a| {
                    self.lookup(a)
                        .is_some_and(|(_, other)| hex.distance(other) <= *distance)
                })
            }
            ConditionExpr::AttributeComparison {
                attribute,
                comparison,
                value,
            } => {
                let rhs = self.eval_number(value)?;
                let lhs = match self.lookup(id) {
                    Some((color, hex)) => self.state.players[color]
                        .object_at(hex)
                        .map_or(0, |obj| obj.attribute(*attribute)),
                    None => 0,
                };
                comparison.evaluate(lhs, rhs)
            }
            ConditionExpr::HasProperty(property) => {
                let Some(obj) = self.state.players[controller].object_at(hex) else {
                    return Ok(false);
                };
                match property {
                    crate::abilities::ObjectProperty::IsDamaged => obj.is_damaged(),
                    crate::abilities::ObjectProperty::MovedThisTurn => obj.has_moved,
                    crate::abilities::ObjectProperty::AttackedThisTurn => obj.has_attacked,
                }
            }
        })
    }

    fn eval_number(&mut self, expr: &NumberExpr) -> Result<i32, Suspend> {
        Ok(match expr {
            NumberExpr::Const(n) => *n,
            NumberExpr::AttributeOf { target, attribute } => {
                let ids = self.object_targets(target)?;
                ids.iter()
                    .filter_map(|&id| {
                        let (color, hex) = self.lookup(id)?;
                        self.state.players[color]
                            .object_at(hex)
                            .map(|obj| obj.attribute(*attribute))
                    })
                    .sum()
            }
            NumberExpr::Count(collection) => self.eval_collection(collection)?.len() as i32,
        })
    }
}
