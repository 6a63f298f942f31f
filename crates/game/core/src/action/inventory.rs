use super::{ActionError, ActionEvent, ActionTransition};
use crate::state::{EntityId, GameState};

/// Index into an actor's inventory. Slot 0 is labelled `a`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InventorySlot(pub usize);

impl InventorySlot {
    /// Maps `a`..=`z` to slots 0..=25.
    pub fn from_letter(letter: char) -> Option<Self> {
        letter
            .is_ascii_lowercase()
            .then(|| Self((letter as u8 - b'a') as usize))
    }

    pub fn letter(self) -> char {
        (b'a' + self.0 as u8) as char
    }
}

/// Picks up the first floor item under the actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickupAction {
    pub actor: EntityId,
}

impl PickupAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for PickupAction {
    fn pre_validate(&self, state: &GameState) -> Result<(), ActionError> {
        let actor = state
            .entities
            .actor(self.actor)
            .ok_or(ActionError::ActorNotFound(self.actor))?;

        if state.entities.items_at(actor.position).next().is_none() {
            return Err(ActionError::NothingToPickUp);
        }
        if actor.inventory.is_full() {
            return Err(ActionError::InventoryFull);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        events: &mut Vec<ActionEvent>,
    ) -> Result<(), ActionError> {
        let position = state
            .entities
            .actor(self.actor)
            .ok_or(ActionError::ActorNotFound(self.actor))?
            .position;
        let index = state
            .entities
            .items
            .iter()
            .position(|item| item.position == position)
            .ok_or(ActionError::NothingToPickUp)?;

        let item = state.entities.items.remove(index);
        let name = item.name.clone();
        let actor = state
            .entities
            .actor_mut(self.actor)
            .ok_or(ActionError::ActorNotFound(self.actor))?;
        if let Err(full) = actor.inventory.items.try_push(item) {
            state.entities.items.insert(index, full.element());
            return Err(ActionError::InventoryFull);
        }

        events.push(ActionEvent::PickedUp { item: name });
        Ok(())
    }
}

/// Drops an inventory item onto the actor's tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropAction {
    pub actor: EntityId,
    pub slot: InventorySlot,
}

impl DropAction {
    pub fn new(actor: EntityId, slot: InventorySlot) -> Self {
        Self { actor, slot }
    }
}

impl ActionTransition for DropAction {
    fn pre_validate(&self, state: &GameState) -> Result<(), ActionError> {
        let actor = state
            .entities
            .actor(self.actor)
            .ok_or(ActionError::ActorNotFound(self.actor))?;

        if self.slot.0 >= actor.inventory.len() {
            return Err(ActionError::InvalidSlot(self.slot.0));
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        events: &mut Vec<ActionEvent>,
    ) -> Result<(), ActionError> {
        let actor = state
            .entities
            .actor_mut(self.actor)
            .ok_or(ActionError::ActorNotFound(self.actor))?;
        if self.slot.0 >= actor.inventory.len() {
            return Err(ActionError::InvalidSlot(self.slot.0));
        }

        let mut item = actor.inventory.items.remove(self.slot.0);
        item.position = actor.position;
        events.push(ActionEvent::Dropped {
            item: item.name.clone(),
        });
        state.entities.items.push(item);
        Ok(())
    }
}
