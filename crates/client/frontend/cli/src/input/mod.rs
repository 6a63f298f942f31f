//! Input processing for the CLI client.
//!
//! Raw `crossterm` events are narrowed into [`InputEvent`]s here so the
//! handler state machine never sees terminal specifics such as screen
//! coordinates or key release events.

pub mod keys;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

/// Identity of a pressed key.
///
/// `keypad` distinguishes numeric-pad digits from the main row when the
/// terminal reports it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub keypad: bool,
}

impl KeyPress {
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
            keypad: false,
        }
    }

    pub const fn char(ch: char) -> Self {
        Self::new(KeyCode::Char(ch))
    }

    /// Numeric-pad key producing `ch`.
    pub const fn keypad(ch: char) -> Self {
        Self {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::NONE,
            keypad: true,
        }
    }

    pub const fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    fn is_quit_chord(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(self.code, KeyCode::Char('c') | KeyCode::Char('q'))
    }
}

impl From<KeyEvent> for KeyPress {
    fn from(key: KeyEvent) -> Self {
        Self {
            code: key.code,
            modifiers: key.modifiers,
            keypad: key.state.contains(KeyEventState::KEYPAD),
        }
    }
}

/// Event consumed by the handler state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(KeyPress),
    /// Pointer moved over map tile `(x, y)`. May lie outside the map.
    MouseMotion { x: i32, y: i32 },
    Quit,
}

impl InputEvent {
    /// Converts a terminal event, translating mouse coordinates relative to
    /// `map_area`. Returns `None` for events the game does not react to.
    pub fn from_crossterm(event: &Event, map_area: Rect) -> Option<Self> {
        match event {
            Event::Key(key) => Self::from_key(*key),
            Event::Mouse(mouse) => Self::from_mouse(mouse, map_area),
            _ => None,
        }
    }

    fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let press = KeyPress::from(key);
        if press.is_quit_chord() {
            return Some(Self::Quit);
        }
        Some(Self::KeyDown(press))
    }

    fn from_mouse(mouse: &MouseEvent, map_area: Rect) -> Option<Self> {
        match mouse.kind {
            MouseEventKind::Moved => Some(Self::MouseMotion {
                x: i32::from(mouse.column) - i32::from(map_area.x),
                y: i32::from(mouse.row) - i32::from(map_area.y),
            }),
            _ => None,
        }
    }
}
