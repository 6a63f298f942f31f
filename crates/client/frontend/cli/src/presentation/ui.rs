//! Frame layout and per-handler overlays.
//!
//! Every handler state draws the game view first; prompts and the history
//! viewer then draw their overlay on top.
use client_frontend_core::{
    Engine, GameSession,
    view_model::{MapView, PlayerView, PresentationMapper},
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
};

use super::widgets::{footer, history, map, messages, prompt, status};
use crate::config::UiConfig;
use crate::handler::HandlerState;

/// Renders one frame and returns the map area, used to translate mouse
/// positions into tile coordinates.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    session: &GameSession,
    state: &HandlerState,
    theme: &T,
    config: &UiConfig,
) -> Rect {
    let full = frame.area();
    let [map_area, status_area, messages_area, footer_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(config.message_panel_height),
        Constraint::Length(1),
    ])
    .areas(full);

    let player = PlayerView::from_state(session.state());
    render_game(
        frame,
        GameAreas {
            map: map_area,
            status: status_area,
            messages: messages_area,
        },
        session,
        &player,
        theme,
    );
    footer::render(frame, footer_area, state);

    match state {
        HandlerState::Main | HandlerState::GameOver => {}
        HandlerState::Prompt(handler) => prompt::render(frame, map_area, handler, &player),
        HandlerState::History(viewer) => history::render(
            frame,
            full,
            config.history_margin,
            session.message_log(),
            viewer,
            theme,
        ),
    }

    map_area
}

struct GameAreas {
    map: Rect,
    status: Rect,
    messages: Rect,
}

fn render_game<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    areas: GameAreas,
    session: &GameSession,
    player: &PlayerView,
    theme: &T,
) {
    let view = MapView::from_state(session.state());
    map::render(frame, areas.map, &view, session.mouse_location(), theme);

    status::render(frame, areas.status, player, &session.names_at_mouse(), theme);

    let block = Block::default().borders(Borders::TOP).title("Messages");
    let inner = block.inner(areas.messages);
    frame.render_widget(block, areas.messages);
    messages::render(frame, inner, session.message_log().iter(), theme);
}
