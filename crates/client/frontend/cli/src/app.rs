//! Synchronous terminal event loop.
//!
//! Each iteration draws a frame, blocks on one terminal event and processes
//! it completely before reading the next.
use anyhow::Result;
use client_frontend_core::GameSession;
use crossterm::event::Event;
use ratatui::{Terminal, backend::Backend, layout::Rect};

use crate::config::CliConfig;
use crate::handler::{EventHandler, Flow};
use crate::input::InputEvent;
use crate::presentation::{
    RatatuiTheme,
    terminal::{self, TerminalGuard},
    ui,
};

/// Terminal client: owns the session and the active input handler.
pub struct CliApp {
    session: GameSession,
    handler: EventHandler,
    config: CliConfig,
    theme: RatatuiTheme,
    /// Map area of the last drawn frame.
    map_area: Rect,
}

impl CliApp {
    pub fn new(session: GameSession, config: CliConfig) -> Self {
        Self {
            session,
            handler: EventHandler::new(),
            config,
            theme: RatatuiTheme::new(),
            map_area: Rect::default(),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn handler(&self) -> &EventHandler {
        &self.handler
    }

    /// Runs until a quit event, the game-over exit key, or an escape action
    /// under the quitting policy. The terminal is restored on every path.
    pub fn run(mut self) -> Result<()> {
        let mut terminal = terminal::init()?;
        let _guard = TerminalGuard;
        tracing::info!("CLI event loop started");

        loop {
            self.draw(&mut terminal)?;
            let event = crossterm::event::read()?;
            if self.handle_terminal_event(&event) == Flow::Exit {
                break;
            }
        }

        tracing::info!(state = self.handler.state().name(), "CLI event loop finished");
        Ok(())
    }

    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let session = &self.session;
        let state = self.handler.state();
        let theme = &self.theme;
        let ui_config = &self.config.ui;
        let mut map_area = self.map_area;

        terminal.draw(|frame| {
            map_area = ui::render(frame, session, state, theme, ui_config);
        })?;

        self.map_area = map_area;
        Ok(())
    }

    /// Feeds one terminal event through the handler state machine.
    pub fn handle_terminal_event(&mut self, event: &Event) -> Flow {
        let Some(input) = InputEvent::from_crossterm(event, self.map_area) else {
            return Flow::Continue;
        };

        let flow = self.handler.handle_event(&input, &mut self.session);
        if self.session.exit_requested() {
            tracing::info!("escape action requested exit");
            return Flow::Exit;
        }
        flow
    }
}
