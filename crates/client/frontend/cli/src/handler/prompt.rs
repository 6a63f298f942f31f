//! Modal prompts that ask for one extra piece of input.
use client_frontend_core::{Engine, MessageLevel};
use crossterm::event::KeyCode;
use game_core::{Action, InventorySlot};

use super::{HandlerState, Response, Transition};
use crate::input::{KeyPress, keys};

/// What the prompt is asking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    /// Pick an inventory letter to drop.
    Drop,
}

/// A modal prompt. Returns to main play after one successful action, or
/// immediately when cancelled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptHandler {
    kind: PromptKind,
}

impl PromptHandler {
    pub fn new(kind: PromptKind) -> Self {
        Self { kind }
    }

    pub fn drop_item() -> Self {
        Self::new(PromptKind::Drop)
    }

    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            PromptKind::Drop => "Select an item to drop",
        }
    }

    /// Modifier keys are ignored. Otherwise the prompt kind gets a chance to
    /// read the key as a choice before falling back to [`Self::on_exit`].
    pub fn key_down<E>(&self, key: &KeyPress, engine: &mut E) -> Response
    where
        E: Engine + ?Sized,
    {
        if keys::is_modifier_key(key) {
            return Response::Ignore;
        }

        let choice = match self.kind {
            PromptKind::Drop => select_slot(key, engine),
        };
        choice.unwrap_or_else(|| self.on_exit())
    }

    /// Cancels the prompt without taking a turn.
    pub fn on_exit(&self) -> Response {
        Response::Transition(Transition::Switch(HandlerState::Main))
    }
}

/// Reads an inventory letter. `None` means the key is not a letter and the
/// prompt should close.
fn select_slot<E>(key: &KeyPress, engine: &mut E) -> Option<Response>
where
    E: Engine + ?Sized,
{
    let KeyCode::Char(letter) = key.code else {
        return None;
    };
    if key.keypad {
        return None;
    }
    let slot = InventorySlot::from_letter(letter)?;

    if slot.0 < engine.inventory_len() {
        Some(Response::Perform(Action::drop_item(engine.player(), slot)))
    } else {
        engine
            .message_log_mut()
            .add_message("Invalid entry.", MessageLevel::Impossible);
        Some(Response::Ignore)
    }
}
