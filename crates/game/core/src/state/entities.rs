use arrayvec::ArrayVec;

use super::{EntityId, Position, ResourceMeter};
use crate::config::GameConfig;

/// Aggregate state for every entity in the map.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EntitiesState {
    pub player: ActorState,
    pub npcs: Vec<ActorState>,
    /// Items lying on the floor (not inside inventories).
    pub items: Vec<ItemState>,
}

impl EntitiesState {
    pub fn new(player: ActorState, npcs: Vec<ActorState>, items: Vec<ItemState>) -> Self {
        Self {
            player,
            npcs,
            items,
        }
    }

    /// Returns a reference to an actor by ID (player or NPC).
    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        if self.player.id == id {
            return Some(&self.player);
        }
        self.npcs.iter().find(|actor| actor.id == id)
    }

    /// Returns a mutable reference to an actor by ID (player or NPC).
    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        if self.player.id == id {
            return Some(&mut self.player);
        }
        self.npcs.iter_mut().find(|actor| actor.id == id)
    }

    /// Returns an iterator over all actors (player + NPCs).
    pub fn all_actors(&self) -> impl Iterator<Item = &ActorState> {
        std::iter::once(&self.player).chain(self.npcs.iter())
    }

    /// Living actor standing on `position`, if any. Corpses never block.
    pub fn blocking_actor_at(&self, position: Position) -> Option<&ActorState> {
        self.all_actors()
            .find(|actor| actor.position == position && actor.is_alive())
    }

    /// Floor items on `position`, in drop order.
    pub fn items_at(&self, position: Position) -> impl Iterator<Item = &ItemState> {
        self.items
            .iter()
            .filter(move |item| item.position == position)
    }
}

/// Minimal representation of any actor (player or NPC).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ActorState {
    pub id: EntityId,
    pub name: String,
    pub position: Position,
    pub stats: ActorStats,
    pub inventory: InventoryState,
}

impl ActorState {
    pub fn new(id: EntityId, name: impl Into<String>, position: Position, stats: ActorStats) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            stats,
            inventory: InventoryState::default(),
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.stats.health.is_depleted()
    }
}

/// Simple combat stats for an actor.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ActorStats {
    pub health: ResourceMeter,
    pub power: u32,
    pub defense: u32,
}

impl ActorStats {
    pub fn new(health: ResourceMeter, power: u32, defense: u32) -> Self {
        Self {
            health,
            power,
            defense,
        }
    }
}

/// Carried items, addressed by slot index (slot 0 is letter `a`).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct InventoryState {
    pub items: ArrayVec<ItemState, { GameConfig::MAX_INVENTORY_SLOTS }>,
}

impl InventoryState {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }
}

/// A named item. `position` is only meaningful while the item lies on the floor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemState {
    pub id: EntityId,
    pub name: String,
    pub position: Position,
}

impl ItemState {
    pub fn new(id: EntityId, name: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            name: name.into(),
            position,
        }
    }
}
