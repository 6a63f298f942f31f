//! Static key tables.
//!
//! Several keys map to the same offset on purpose (arrow, numeric pad and vi
//! letters all move west, for example).
use crossterm::event::{KeyCode, KeyModifiers, ModifierKeyCode};
use game_core::Offset;

use super::KeyPress;

/// Key identity as the tables see it: main keyboard code or numeric-pad digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyId {
    Code(KeyCode),
    Keypad(char),
}

impl KeyId {
    pub fn matches(self, key: &KeyPress) -> bool {
        match self {
            KeyId::Code(code) => !key.keypad && key.code == code,
            KeyId::Keypad(digit) => key.keypad && key.code == KeyCode::Char(digit),
        }
    }

    /// A press of this key with no modifiers.
    pub fn press(self) -> KeyPress {
        match self {
            KeyId::Code(code) => KeyPress::new(code),
            KeyId::Keypad(digit) => KeyPress::keypad(digit),
        }
    }
}

pub const MOVE_KEYS: [(KeyId, Offset); 25] = [
    // Arrow keys.
    (KeyId::Code(KeyCode::Up), Offset::NORTH),
    (KeyId::Code(KeyCode::Down), Offset::SOUTH),
    (KeyId::Code(KeyCode::Left), Offset::WEST),
    (KeyId::Code(KeyCode::Right), Offset::EAST),
    (KeyId::Code(KeyCode::Home), Offset::NORTH_WEST),
    (KeyId::Code(KeyCode::End), Offset::SOUTH_WEST),
    (KeyId::Code(KeyCode::PageUp), Offset::NORTH_EAST),
    (KeyId::Code(KeyCode::PageDown), Offset::SOUTH_EAST),
    // Numeric pad.
    (KeyId::Keypad('1'), Offset::SOUTH_WEST),
    (KeyId::Keypad('2'), Offset::SOUTH),
    (KeyId::Keypad('3'), Offset::SOUTH_EAST),
    (KeyId::Keypad('4'), Offset::WEST),
    (KeyId::Keypad('5'), Offset::ZERO),
    (KeyId::Keypad('6'), Offset::EAST),
    (KeyId::Keypad('7'), Offset::NORTH_WEST),
    (KeyId::Keypad('8'), Offset::NORTH),
    (KeyId::Keypad('9'), Offset::NORTH_EAST),
    // Vi keys.
    (KeyId::Code(KeyCode::Char('h')), Offset::WEST),
    (KeyId::Code(KeyCode::Char('j')), Offset::SOUTH),
    (KeyId::Code(KeyCode::Char('k')), Offset::NORTH),
    (KeyId::Code(KeyCode::Char('l')), Offset::EAST),
    (KeyId::Code(KeyCode::Char('y')), Offset::NORTH_WEST),
    (KeyId::Code(KeyCode::Char('u')), Offset::NORTH_EAST),
    (KeyId::Code(KeyCode::Char('b')), Offset::SOUTH_WEST),
    (KeyId::Code(KeyCode::Char('n')), Offset::SOUTH_EAST),
];

/// `KeypadBegin` is the centre key with num-lock off.
pub const WAIT_KEYS: [KeyId; 3] = [
    KeyId::Code(KeyCode::Char('.')),
    KeyId::Keypad('5'),
    KeyId::Code(KeyCode::KeypadBegin),
];

/// Vertical cursor steps in the message history viewer.
pub const CURSOR_Y_KEYS: [(KeyCode, isize); 4] = [
    (KeyCode::Up, -1),
    (KeyCode::Down, 1),
    (KeyCode::PageUp, -10),
    (KeyCode::PageDown, 10),
];

/// Pure modifier keys, ignored by modal prompts.
pub const MODIFIER_KEYS: [ModifierKeyCode; 6] = [
    ModifierKeyCode::LeftShift,
    ModifierKeyCode::RightShift,
    ModifierKeyCode::LeftControl,
    ModifierKeyCode::RightControl,
    ModifierKeyCode::LeftAlt,
    ModifierKeyCode::RightAlt,
];

pub const HISTORY_KEY: KeyCode = KeyCode::Char('v');
pub const PICKUP_KEY: KeyCode = KeyCode::Char('g');
pub const DROP_KEY: KeyCode = KeyCode::Char('d');
pub const ESCAPE_KEY: KeyCode = KeyCode::Esc;

pub fn move_offset(key: &KeyPress) -> Option<Offset> {
    MOVE_KEYS
        .iter()
        .find(|(id, _)| id.matches(key))
        .map(|&(_, offset)| offset)
}

pub fn is_wait_key(key: &KeyPress) -> bool {
    WAIT_KEYS.iter().any(|id| id.matches(key))
}

pub fn cursor_step(key: &KeyPress) -> Option<isize> {
    if key.keypad {
        return None;
    }
    CURSOR_Y_KEYS
        .iter()
        .find(|(code, _)| *code == key.code)
        .map(|&(_, step)| step)
}

pub fn is_modifier_key(key: &KeyPress) -> bool {
    match key.code {
        KeyCode::Modifier(modifier) => MODIFIER_KEYS.contains(&modifier),
        _ => false,
    }
}

/// Main-keyboard press of `code`. Shift is allowed; Ctrl and Alt chords are
/// not the same command.
pub fn is_key(key: &KeyPress, code: KeyCode) -> bool {
    KeyId::Code(code).matches(key) && !key.modifiers.intersects(COMMAND_BLOCKERS)
}

const COMMAND_BLOCKERS: KeyModifiers = KeyModifiers::CONTROL.union(KeyModifiers::ALT);
