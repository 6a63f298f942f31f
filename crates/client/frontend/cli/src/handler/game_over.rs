//! Terminal state after the player's death.
use super::{Response, Transition};
use crate::input::{KeyPress, keys};

/// Only escape leaves the game; every other key is ignored.
pub fn key_down(key: &KeyPress) -> Response {
    if keys::is_key(key, keys::ESCAPE_KEY) {
        Response::Transition(Transition::Exit)
    } else {
        Response::Ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test_support::RecordingEngine;
    use crate::handler::{EventHandler, Flow, HandlerState};
    use crate::input::InputEvent;
    use crate::input::keys::MOVE_KEYS;
    use crossterm::event::KeyCode;

    #[test]
    fn escape_exits() {
        assert_eq!(
            key_down(&KeyPress::new(KeyCode::Esc)),
            Response::Transition(Transition::Exit)
        );
    }

    #[test]
    fn other_keys_leave_state_unchanged() {
        let mut handler = EventHandler::with_state(HandlerState::GameOver);
        let mut engine = RecordingEngine::new();

        let keys = MOVE_KEYS
            .iter()
            .map(|(id, _)| id.press())
            .chain([
                KeyPress::char('v'),
                KeyPress::char('g'),
                KeyPress::char('.'),
                KeyPress::new(KeyCode::Enter),
            ]);
        for key in keys {
            let flow = handler.handle_event(&InputEvent::KeyDown(key), &mut engine);
            assert_eq!(flow, Flow::Continue, "{key:?}");
            assert_eq!(handler.state(), &HandlerState::GameOver);
        }
        assert!(engine.calls.is_empty());
    }
}
