//! Input handler state machine.
//!
//! Exactly one [`HandlerState`] is active at a time. Every input event is
//! dispatched to it and yields a [`Response`]; the [`EventHandler`] driver
//! performs any resulting action, advances the turn and applies the
//! [`Transition`]. Handlers never hold the engine; it is passed in on each
//! call.
pub mod game_over;
pub mod history;
pub mod main_play;
pub mod prompt;

use client_frontend_core::{Engine, MessageLevel};
use game_core::{Action, Position};

use crate::input::{InputEvent, KeyPress};

pub use history::HistoryViewer;
pub use prompt::{PromptHandler, PromptKind};

/// The active interaction mode.
#[derive(Clone, Debug, Default, PartialEq, Eq, strum::IntoStaticStr)]
pub enum HandlerState {
    /// Normal play.
    #[default]
    Main,
    /// Modal prompt that returns to [`HandlerState::Main`] after one
    /// successful action.
    Prompt(PromptHandler),
    /// Terminal state after the player dies.
    GameOver,
    /// Scrollable message history.
    History(HistoryViewer),
}

/// Outcome of dispatching one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Ignore,
    Perform(Action),
    Transition(Transition),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Switch(HandlerState),
    Exit,
}

/// Whether the application loop should keep running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

impl HandlerState {
    /// Routes `event` to the active variant.
    ///
    /// Quit exits from every state. Mouse motion only records the hover tile
    /// and never produces an action.
    pub fn dispatch<E>(&mut self, event: &InputEvent, engine: &mut E) -> Response
    where
        E: Engine + ?Sized,
    {
        match event {
            InputEvent::Quit => Response::Transition(Transition::Exit),
            InputEvent::MouseMotion { x, y } => {
                mouse_motion(Position::new(*x, *y), engine);
                Response::Ignore
            }
            InputEvent::KeyDown(key) => self.key_down(key, engine),
        }
    }

    fn key_down<E>(&mut self, key: &KeyPress, engine: &mut E) -> Response
    where
        E: Engine + ?Sized,
    {
        match self {
            HandlerState::Main => main_play::key_down(key, engine),
            HandlerState::Prompt(prompt) => prompt.key_down(key, engine),
            HandlerState::GameOver => game_over::key_down(key),
            HandlerState::History(viewer) => viewer.key_down(key),
        }
    }

    /// Transition owed by this state after it completed a turn.
    fn after_turn(&self) -> Transition {
        match self {
            HandlerState::Prompt(_) => Transition::Switch(HandlerState::Main),
            HandlerState::Main | HandlerState::GameOver | HandlerState::History(_) => {
                Transition::Stay
            }
        }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Records the hovered tile when it lies on the map.
fn mouse_motion<E>(position: Position, engine: &mut E)
where
    E: Engine + ?Sized,
{
    if engine.in_bounds(position) {
        engine.set_mouse_location(position);
    }
}

/// Performs `action` and, on success, advances the turn.
///
/// A rejected action is reported to the message log and consumes no turn.
/// Otherwise every other actor acts and the field of view is refreshed, in
/// that order. Returns whether a turn was taken.
pub fn handle_action<E>(action: &Action, engine: &mut E) -> bool
where
    E: Engine + ?Sized,
{
    if let Err(err) = engine.perform(action) {
        tracing::debug!(?action, %err, "action rejected");
        engine
            .message_log_mut()
            .add_message(err.to_string(), MessageLevel::Impossible);
        return false;
    }

    engine.handle_enemy_turns();
    engine.update_fov();
    true
}

/// Owns the active [`HandlerState`] and applies transitions.
#[derive(Debug, Default)]
pub struct EventHandler {
    state: HandlerState,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts in `state` instead of main play.
    pub fn with_state(state: HandlerState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &HandlerState {
        &self.state
    }

    /// Fully processes one event.
    pub fn handle_event<E>(&mut self, event: &InputEvent, engine: &mut E) -> Flow
    where
        E: Engine + ?Sized,
    {
        let transition = match self.state.dispatch(event, engine) {
            Response::Ignore => Transition::Stay,
            Response::Transition(transition) => transition,
            Response::Perform(action) => {
                if handle_action(&action, engine) {
                    self.after_turn(&*engine)
                } else {
                    Transition::Stay
                }
            }
        };
        self.apply(transition)
    }

    fn after_turn<E>(&self, engine: &E) -> Transition
    where
        E: Engine + ?Sized,
    {
        if !engine.is_player_alive() {
            return Transition::Switch(HandlerState::GameOver);
        }
        self.state.after_turn()
    }

    fn apply(&mut self, transition: Transition) -> Flow {
        match transition {
            Transition::Stay => Flow::Continue,
            Transition::Switch(next) => {
                tracing::debug!(from = self.state.name(), to = next.name(), "handler switch");
                self.state = next;
                Flow::Continue
            }
            Transition::Exit => {
                tracing::info!(state = self.state.name(), "exit requested");
                Flow::Exit
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use client_frontend_core::{Engine, MessageLog};
    use game_core::{Action, ActionError, EntityId, Position};

    /// Engine call observed by [`RecordingEngine`].
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Call {
        Perform(Action),
        EnemyTurns,
        UpdateFov,
        SetMouse(Position),
    }

    /// Engine double that records calls and answers `perform` from a script.
    pub struct RecordingEngine {
        pub calls: Vec<Call>,
        pub log: MessageLog,
        pub width: i32,
        pub height: i32,
        pub player_alive: bool,
        pub inventory_len: usize,
        pub mouse: Option<Position>,
        pub reject_with: Option<ActionError>,
        pub kill_player_on_perform: bool,
    }

    impl RecordingEngine {
        pub fn new() -> Self {
            Self {
                calls: Vec::new(),
                log: MessageLog::new(32),
                width: 10,
                height: 8,
                player_alive: true,
                inventory_len: 0,
                mouse: None,
                reject_with: None,
                kill_player_on_perform: false,
            }
        }

        pub fn rejecting(err: ActionError) -> Self {
            Self {
                reject_with: Some(err),
                ..Self::new()
            }
        }

        pub fn with_messages(count: usize) -> Self {
            let mut engine = Self::new();
            for index in 0..count {
                engine.log.push_text(format!("message {index}"));
            }
            engine
        }
    }

    impl Engine for RecordingEngine {
        fn player(&self) -> EntityId {
            EntityId::PLAYER
        }

        fn is_player_alive(&self) -> bool {
            self.player_alive
        }

        fn in_bounds(&self, position: Position) -> bool {
            (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
        }

        fn perform(&mut self, action: &Action) -> Result<(), ActionError> {
            self.calls.push(Call::Perform(action.clone()));
            if let Some(err) = self.reject_with.clone() {
                return Err(err);
            }
            if self.kill_player_on_perform {
                self.player_alive = false;
            }
            Ok(())
        }

        fn handle_enemy_turns(&mut self) {
            self.calls.push(Call::EnemyTurns);
        }

        fn update_fov(&mut self) {
            self.calls.push(Call::UpdateFov);
        }

        fn set_mouse_location(&mut self, position: Position) {
            self.calls.push(Call::SetMouse(position));
            self.mouse = Some(position);
        }

        fn inventory_len(&self) -> usize {
            self.inventory_len
        }

        fn message_log(&self) -> &MessageLog {
            &self.log
        }

        fn message_log_mut(&mut self) -> &mut MessageLog {
            &mut self.log
        }
    }
}
