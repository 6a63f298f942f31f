//! Terminal UI frontend for the Dungeon game.
//!
//! Converts crossterm input into [`input::InputEvent`]s, drives the
//! [`handler::EventHandler`] state machine against a
//! [`client_frontend_core::GameSession`], and renders with ratatui.

pub mod app;
pub mod config;
pub mod handler;
pub mod input;
pub mod level;
pub mod logging;
pub mod presentation;

pub use app::CliApp;
pub use config::CliConfig;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
