//! Message history overlay.
use client_frontend_core::{MessageLog, view_model::PresentationMapper};
use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::Style,
    widgets::{Block, Borders, Clear},
};

use super::messages;
use crate::handler::HistoryViewer;

pub const TITLE: &str = "┤Message History├";

/// Draws a framed panel inset by `margin` cells, listing log entries up to
/// the viewer's cursor.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    margin: u16,
    log: &MessageLog,
    viewer: &HistoryViewer,
    theme: &T,
) {
    let panel = area.inner(Margin::new(margin, margin));
    let block = Block::default()
        .borders(Borders::ALL)
        .title(TITLE)
        .title_alignment(Alignment::Center);
    let inner = block.inner(panel);

    frame.render_widget(Clear, panel);
    frame.render_widget(block, panel);
    messages::render(frame, inner, log.up_to(viewer.cursor()), theme);
}
