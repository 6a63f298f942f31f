//! Terminal client entry point.
use anyhow::Result;
use client_frontend_cli::{CliApp, CliConfig, FrontendConfig, level, logging};
use client_frontend_core::{Engine, GameSession, MessageLevel, MessageLog};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    logging::setup_logging(cli_config.session_id.as_deref())?;
    tracing::info!("Starting Dungeon client");
    tracing::info!(
        fov_radius = frontend_config.session.game.fov_radius,
        escape_policy = %frontend_config.session.escape_policy,
        "session configuration"
    );

    let state = level::starting_state()?;
    let messages = MessageLog::new(frontend_config.messages.capacity);
    let mut session = GameSession::new(state, messages, frontend_config.session);
    session.message_log_mut().add_message(
        "Hello and welcome, adventurer, to yet another dungeon!",
        MessageLevel::Warning,
    );

    CliApp::new(session, cli_config).run()
}
