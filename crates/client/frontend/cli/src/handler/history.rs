//! Scrollable message history.
use client_frontend_core::Engine;
use crossterm::event::KeyCode;

use super::{HandlerState, Response, Transition};
use crate::input::{KeyPress, keys};

/// Cursor over a snapshot of the message log.
///
/// The viewer shows entries `0..=cursor`, so the cursor line is the newest one
/// visible. `cursor` is `None` only when the log was empty on entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryViewer {
    log_length: usize,
    cursor: Option<usize>,
}

impl HistoryViewer {
    /// Starts at the newest of `log_length` messages.
    pub fn new(log_length: usize) -> Self {
        Self {
            log_length,
            cursor: log_length.checked_sub(1),
        }
    }

    pub fn open<E>(engine: &E) -> Self
    where
        E: Engine + ?Sized,
    {
        Self::new(engine.message_log().len())
    }

    pub fn log_length(&self) -> usize {
        self.log_length
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Moves the cursor by `step`, wrapping only when already at an edge.
    pub fn step(&mut self, step: isize) {
        let (Some(cursor), Some(last)) = (self.cursor, self.last()) else {
            return;
        };

        let next = if step < 0 && cursor == 0 {
            last
        } else if step > 0 && cursor == last {
            0
        } else {
            cursor.saturating_add_signed(step).min(last)
        };
        self.cursor = Some(next);
    }

    pub fn jump_first(&mut self) {
        if self.cursor.is_some() {
            self.cursor = Some(0);
        }
    }

    pub fn jump_last(&mut self) {
        self.cursor = self.last();
    }

    fn last(&self) -> Option<usize> {
        self.log_length.checked_sub(1)
    }

    /// Navigation keys move the cursor; any other key returns to play.
    pub fn key_down(&mut self, key: &KeyPress) -> Response {
        if let Some(step) = keys::cursor_step(key) {
            self.step(step);
        } else if keys::is_key(key, KeyCode::Home) {
            self.jump_first();
        } else if keys::is_key(key, KeyCode::End) {
            self.jump_last();
        } else {
            return Response::Transition(Transition::Switch(HandlerState::Main));
        }
        Response::Ignore
    }
}
