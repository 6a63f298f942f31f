//! Terminal presentation: setup, theme and frame rendering.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use theme::RatatuiTheme;
