//! Action execution errors.

use crate::state::EntityId;

/// Recoverable failure raised when an action cannot apply to the world.
///
/// The state is left exactly as it was before the attempt. The `Display`
/// text is the player-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// Actor not found in game state.
    #[error("That creature does not exist.")]
    ActorNotFound(EntityId),

    /// Dead actors cannot act.
    #[error("The dead cannot act.")]
    ActorDead(EntityId),

    /// Destination is a wall or lies outside the map.
    #[error("That way is blocked.")]
    Blocked,

    /// No floor item under the actor.
    #[error("There is nothing here to pick up.")]
    NothingToPickUp,

    /// Every inventory slot is taken.
    #[error("Your inventory is full.")]
    InventoryFull,

    /// Inventory slot does not hold an item.
    #[error("Invalid entry.")]
    InvalidSlot(usize),
}
