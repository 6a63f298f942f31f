//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! mutation flows through [`GameEngine::execute`], which runs an action's
//! `pre_validate` before `apply`, so a rejected action leaves the state
//! untouched.

pub mod fov;
mod turns;

use crate::action::{
    Action, ActionError, ActionKind, ActionOutcome, ActionTransition, BumpAction, BumpTarget,
    DropAction, PickupAction,
};
use crate::config::GameConfig;
use crate::state::GameState;

/// Game engine that manages action execution, turn passes and visibility.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given state and configuration.
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    /// Executes an action by routing it through the appropriate transition.
    pub fn execute(&mut self, action: &Action) -> Result<ActionOutcome, ActionError> {
        let actor = self
            .state
            .entities
            .actor(action.actor)
            .ok_or(ActionError::ActorNotFound(action.actor))?;
        if !actor.is_alive() {
            return Err(ActionError::ActorDead(action.actor));
        }

        let mut events = Vec::new();
        match action.kind {
            ActionKind::Bump(offset) => {
                match BumpAction::new(action.actor, offset).resolve(&*self.state)? {
                    BumpTarget::Stay => {}
                    BumpTarget::Move(movement) => self.drive(&movement, &mut events)?,
                    BumpTarget::Melee(melee) => self.drive(&melee, &mut events)?,
                }
            }
            ActionKind::Pickup => self.drive(&PickupAction::new(action.actor), &mut events)?,
            ActionKind::Drop(slot) => {
                self.drive(&DropAction::new(action.actor, slot), &mut events)?
            }
            ActionKind::Wait | ActionKind::Escape => {}
        }

        Ok(ActionOutcome::new(events))
    }

    /// Recomputes the player's field of view.
    pub fn update_fov(&mut self) {
        let origin = self.state.entities.player.position;
        fov::compute(&mut self.state.map, origin, self.config.fov_radius);
    }

    fn drive<T>(
        &mut self,
        transition: &T,
        events: &mut Vec<crate::action::ActionEvent>,
    ) -> Result<(), ActionError>
    where
        T: ActionTransition,
    {
        transition.pre_validate(&*self.state)?;
        transition.apply(self.state, events)
    }
}
