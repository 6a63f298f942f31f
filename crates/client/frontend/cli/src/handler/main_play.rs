//! Normal play: movement, waiting, pickup and mode switches.
use client_frontend_core::Engine;
use game_core::Action;

use super::{HandlerState, HistoryViewer, PromptHandler, Response, Transition};
use crate::input::{KeyPress, keys};

/// Maps a key press in normal play. Unmapped keys are ignored.
///
/// The movement table is consulted before the wait set, so numeric-pad 5
/// bumps in place with a zero offset.
pub fn key_down<E>(key: &KeyPress, engine: &E) -> Response
where
    E: Engine + ?Sized,
{
    let player = engine.player();

    if let Some(offset) = keys::move_offset(key) {
        return Response::Perform(Action::bump(player, offset));
    }
    if keys::is_wait_key(key) {
        return Response::Perform(Action::wait(player));
    }

    if keys::is_key(key, keys::HISTORY_KEY) {
        let viewer = HistoryViewer::open(engine);
        Response::Transition(Transition::Switch(HandlerState::History(viewer)))
    } else if keys::is_key(key, keys::PICKUP_KEY) {
        Response::Perform(Action::pickup(player))
    } else if keys::is_key(key, keys::DROP_KEY) {
        Response::Transition(Transition::Switch(HandlerState::Prompt(
            PromptHandler::drop_item(),
        )))
    } else if keys::is_key(key, keys::ESCAPE_KEY) {
        Response::Perform(Action::escape(player))
    } else {
        Response::Ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test_support::RecordingEngine;
    use crate::input::keys::{KeyId, MOVE_KEYS, WAIT_KEYS};
    use crossterm::event::{KeyCode, KeyModifiers};
    use game_core::{ActionKind, EntityId, Offset};

    #[test]
    fn every_movement_key_bumps_by_its_offset() {
        let engine = RecordingEngine::new();
        for (id, offset) in MOVE_KEYS {
            assert_eq!(
                key_down(&id.press(), &engine),
                Response::Perform(Action::bump(EntityId::PLAYER, offset)),
                "{id:?}"
            );
        }
    }

    #[test]
    fn wait_keys_outside_movement_table_wait() {
        let engine = RecordingEngine::new();
        let movement: Vec<KeyId> = MOVE_KEYS.iter().map(|&(id, _)| id).collect();
        for id in WAIT_KEYS.into_iter().filter(|id| !movement.contains(id)) {
            let response = key_down(&id.press(), &engine);
            assert_eq!(response, Response::Perform(Action::wait(EntityId::PLAYER)));
            assert!(!matches!(
                response,
                Response::Perform(Action {
                    kind: ActionKind::Bump(_),
                    ..
                })
            ));
        }
    }

    #[test]
    fn keypad_five_bumps_in_place() {
        let engine = RecordingEngine::new();
        assert_eq!(
            key_down(&KeyPress::keypad('5'), &engine),
            Response::Perform(Action::bump(EntityId::PLAYER, Offset::ZERO))
        );
        assert_eq!(
            key_down(&KeyPress::new(KeyCode::KeypadBegin), &engine),
            Response::Perform(Action::wait(EntityId::PLAYER))
        );
    }

    #[test]
    fn modified_letters_are_not_commands() {
        let engine = RecordingEngine::new();
        for ch in ['g', 'v', 'd'] {
            for modifiers in [KeyModifiers::CONTROL, KeyModifiers::ALT] {
                let key = KeyPress::char(ch).with_modifiers(modifiers);
                assert_eq!(key_down(&key, &engine), Response::Ignore, "{key:?}");
            }
        }
        assert_eq!(
            key_down(&KeyPress::char('g').with_modifiers(KeyModifiers::SHIFT), &engine),
            Response::Perform(Action::pickup(EntityId::PLAYER))
        );
    }

    #[test]
    fn history_key_opens_viewer_at_newest_message() {
        let engine = RecordingEngine::with_messages(4);
        let response = key_down(&KeyPress::char('v'), &engine);

        let Response::Transition(Transition::Switch(HandlerState::History(viewer))) = response
        else {
            panic!("expected history switch, got {response:?}");
        };
        assert_eq!(viewer.log_length(), 4);
        assert_eq!(viewer.cursor(), Some(3));
    }

    #[test]
    fn command_keys() {
        let engine = RecordingEngine::new();
        assert_eq!(
            key_down(&KeyPress::char('g'), &engine),
            Response::Perform(Action::pickup(EntityId::PLAYER))
        );
        assert_eq!(
            key_down(&KeyPress::new(KeyCode::Esc), &engine),
            Response::Perform(Action::escape(EntityId::PLAYER))
        );
        assert_eq!(
            key_down(&KeyPress::char('d'), &engine),
            Response::Transition(Transition::Switch(HandlerState::Prompt(
                PromptHandler::drop_item()
            )))
        );
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let engine = RecordingEngine::new();
        for key in [
            KeyPress::char('x'),
            KeyPress::char('5'),
            KeyPress::new(KeyCode::Tab),
            KeyPress::new(KeyCode::F(1)),
        ] {
            assert_eq!(key_down(&key, &engine), Response::Ignore, "{key:?}");
        }
    }
}
