//! Widget modules for UI rendering.
//!
//! Each widget is a function that reads session snapshots and draws into a
//! region of the frame. Widgets never mutate game state.

pub mod footer;
pub mod history;
pub mod map;
pub mod messages;
pub mod prompt;
pub mod status;
