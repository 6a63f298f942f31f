use super::{ActionError, ActionEvent, ActionTransition, MeleeAction};
use crate::state::{EntityId, GameState, Offset, Position};

/// What a bump resolves into once the destination is inspected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BumpTarget {
    /// Zero offset: the actor stays put.
    Stay,
    Move(MoveAction),
    Melee(MeleeAction),
}

/// Directional intent that attacks a living occupant or otherwise moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BumpAction {
    pub actor: EntityId,
    pub offset: Offset,
}

impl BumpAction {
    pub fn new(actor: EntityId, offset: Offset) -> Self {
        Self { actor, offset }
    }

    pub fn resolve(&self, state: &GameState) -> Result<BumpTarget, ActionError> {
        if self.offset.is_zero() {
            return Ok(BumpTarget::Stay);
        }

        let origin = state
            .entities
            .actor(self.actor)
            .ok_or(ActionError::ActorNotFound(self.actor))?
            .position;

        match state.entities.blocking_actor_at(origin + self.offset) {
            Some(target) if target.id != self.actor => {
                Ok(BumpTarget::Melee(MeleeAction::new(self.actor, target.id)))
            }
            _ => Ok(BumpTarget::Move(MoveAction::new(self.actor, self.offset))),
        }
    }
}

/// Single-tile movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub actor: EntityId,
    pub offset: Offset,
}

impl MoveAction {
    pub fn new(actor: EntityId, offset: Offset) -> Self {
        Self { actor, offset }
    }

    fn destination(&self, state: &GameState) -> Result<Position, ActionError> {
        state
            .entities
            .actor(self.actor)
            .map(|actor| actor.position + self.offset)
            .ok_or(ActionError::ActorNotFound(self.actor))
    }
}

impl ActionTransition for MoveAction {
    fn pre_validate(&self, state: &GameState) -> Result<(), ActionError> {
        let destination = self.destination(state)?;
        if !state.can_enter(destination) {
            return Err(ActionError::Blocked);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        events: &mut Vec<ActionEvent>,
    ) -> Result<(), ActionError> {
        let destination = self.destination(state)?;
        let actor = state
            .entities
            .actor_mut(self.actor)
            .ok_or(ActionError::ActorNotFound(self.actor))?;
        actor.position = destination;

        events.push(ActionEvent::Moved {
            actor: self.actor,
            to: destination,
        });
        Ok(())
    }
}
