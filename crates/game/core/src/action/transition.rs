use super::{ActionError, ActionEvent};
use crate::state::GameState;

/// Defines how a concrete action variant mutates game state.
///
/// `pre_validate` sees the state **before** mutation and must be side-effect
/// free. `apply` may assume `pre_validate` succeeded; it records what happened
/// into `events` so the frontend can narrate it.
pub trait ActionTransition {
    /// Validates pre-conditions using the state before mutation.
    fn pre_validate(&self, _state: &GameState) -> Result<(), ActionError> {
        Ok(())
    }

    /// Applies the action to the state.
    fn apply(&self, state: &mut GameState, events: &mut Vec<ActionEvent>)
    -> Result<(), ActionError>;
}
