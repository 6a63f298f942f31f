//! Contract between input handlers and the running game.
use game_core::{Action, ActionError, EntityId, Position};

use crate::message::MessageLog;

/// Session-level operations consumed by input handlers.
///
/// Handlers receive the engine explicitly on every call instead of holding a
/// reference to it. Implementations own the world, the message log and the
/// mouse-hover location.
pub trait Engine {
    /// Entity controlled by the player.
    fn player(&self) -> EntityId;

    fn is_player_alive(&self) -> bool;

    /// Whether `position` lies inside the map.
    fn in_bounds(&self, position: Position) -> bool;

    /// Executes `action`. On `Err` the world is unchanged.
    fn perform(&mut self, action: &Action) -> Result<(), ActionError>;

    /// Gives every other actor its turn.
    fn handle_enemy_turns(&mut self);

    /// Recomputes what the player can see.
    fn update_fov(&mut self);

    /// Records the tile under the mouse pointer.
    fn set_mouse_location(&mut self, position: Position);

    /// Number of occupied player inventory slots.
    fn inventory_len(&self) -> usize;

    fn message_log(&self) -> &MessageLog;

    fn message_log_mut(&mut self) -> &mut MessageLog;
}
