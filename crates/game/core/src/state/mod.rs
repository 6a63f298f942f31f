//! Authoritative game state representation.
//!
//! This module owns the data structures that describe entities and the tile
//! grid. Frontends query this state for display but mutate it exclusively
//! through the engine.
pub mod builder;
pub mod common;
pub mod entities;
pub mod world;

pub use builder::LayoutError;
pub use common::{EntityId, Offset, Position, ResourceMeter};
pub use entities::{ActorState, ActorStats, EntitiesState, InventoryState, ItemState};
pub use world::{TerrainKind, TileMap};

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct GameState {
    /// All entities tracked on the map: actors and floor items.
    pub entities: EntitiesState,
    /// Terrain plus field-of-view layers.
    pub map: TileMap,
}

impl GameState {
    pub fn new(entities: EntitiesState, map: TileMap) -> Self {
        Self { entities, map }
    }

    /// Determines whether a tile can be entered considering terrain and living occupants.
    pub fn can_enter(&self, position: Position) -> bool {
        self.map.is_walkable(position) && self.entities.blocking_actor_at(position).is_none()
    }

    pub fn player(&self) -> &ActorState {
        &self.entities.player
    }
}
