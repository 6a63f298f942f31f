//! Deterministic game logic and data types shared across clients.
//!
//! `game-core` defines the canonical rules (actions, engine, world state) and
//! exposes pure APIs that frontends drive one action at a time. All state
//! mutation flows through [`engine::GameEngine`], and supporting crates depend
//! on the types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod state;

pub use action::{
    Action, ActionError, ActionEvent, ActionKind, ActionOutcome, ActionTransition, BumpAction,
    DropAction, InventorySlot, MeleeAction, MoveAction, PickupAction,
};
pub use config::GameConfig;
pub use engine::{GameEngine, fov};
pub use state::{
    ActorState, ActorStats, EntitiesState, EntityId, GameState, InventoryState, ItemState,
    LayoutError, Offset, Position, ResourceMeter, TerrainKind, TileMap,
};
