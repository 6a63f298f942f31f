//! Concrete [`Engine`] over a [`GameState`].

use game_core::{Action, ActionError, ActionKind, EntityId, GameEngine, GameState, Position};

use crate::config::{EscapePolicy, SessionConfig};
use crate::engine::Engine;
use crate::format::format_event;
use crate::message::MessageLog;

/// Single-player game session: world state, message log and hover location.
pub struct GameSession {
    state: GameState,
    messages: MessageLog,
    config: SessionConfig,
    mouse_location: Option<Position>,
    exit_requested: bool,
}

impl GameSession {
    /// Creates a session and computes the initial field of view.
    pub fn new(state: GameState, messages: MessageLog, config: SessionConfig) -> Self {
        let mut session = Self {
            state,
            messages,
            config,
            mouse_location: None,
            exit_requested: false,
        };
        session.update_fov();
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mouse_location(&self) -> Option<Position> {
        self.mouse_location
    }

    /// True once an escape action ran under [`EscapePolicy::Quit`].
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Names of visible things on the hovered tile, for the hover line.
    pub fn names_at_mouse(&self) -> Vec<&str> {
        let Some(position) = self.mouse_location else {
            return Vec::new();
        };
        if !self.state.map.is_visible(position) {
            return Vec::new();
        }

        let entities = &self.state.entities;
        entities
            .all_actors()
            .filter(|actor| actor.position == position)
            .map(|actor| actor.name.as_str())
            .chain(entities.items_at(position).map(|item| item.name.as_str()))
            .collect()
    }

    fn engine(&mut self) -> GameEngine<'_> {
        GameEngine::new(&mut self.state, &self.config.game)
    }
}

impl Engine for GameSession {
    fn player(&self) -> EntityId {
        self.state.entities.player.id
    }

    fn is_player_alive(&self) -> bool {
        self.state.entities.player.is_alive()
    }

    fn in_bounds(&self, position: Position) -> bool {
        self.state.map.in_bounds(position)
    }

    fn perform(&mut self, action: &Action) -> Result<(), ActionError> {
        let outcome = self.engine().execute(action)?;
        for (text, level) in outcome.events.iter().filter_map(format_event) {
            self.messages.add_message(text, level);
        }

        if action.kind == ActionKind::Escape {
            tracing::debug!(policy = %self.config.escape_policy, "escape action");
            if self.config.escape_policy == EscapePolicy::Quit {
                self.exit_requested = true;
            }
        }
        Ok(())
    }

    fn handle_enemy_turns(&mut self) {
        let acted = self.engine().run_npc_turns();
        tracing::trace!(acted, "npc turns complete");
    }

    fn update_fov(&mut self) {
        self.engine().update_fov();
    }

    fn set_mouse_location(&mut self, position: Position) {
        self.mouse_location = Some(position);
    }

    fn inventory_len(&self) -> usize {
        self.state.entities.player.inventory.len()
    }

    fn message_log(&self) -> &MessageLog {
        &self.messages
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.messages
    }
}
