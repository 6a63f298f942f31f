//! Cross-frontend primitives for presenting the game.
//!
//! Houses the message log, the [`Engine`] contract consumed by input
//! handlers, the concrete [`GameSession`], and view-model types that both the
//! CLI and future graphical clients can reuse.
pub mod config;
pub mod engine;
pub mod format;
pub mod message;
pub mod session;
pub mod view_model;

pub use config::{EscapePolicy, FrontendConfig, MessageConfig, SessionConfig};
pub use engine::Engine;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use session::GameSession;
