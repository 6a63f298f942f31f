//! Modal prompt overlays.
use client_frontend_core::view_model::PlayerView;
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::handler::{PromptHandler, PromptKind};

/// Draws the prompt's box in the top-left corner of `area`.
pub fn render(frame: &mut Frame, area: Rect, prompt: &PromptHandler, player: &PlayerView) {
    let lines = match prompt.kind() {
        PromptKind::Drop => inventory_lines(player),
    };

    let title = prompt.title();
    let widest = lines
        .iter()
        .map(Line::width)
        .chain([title.chars().count()])
        .max()
        .unwrap_or_default();
    let panel = Rect {
        x: area.x,
        y: area.y,
        width: (widest as u16 + 4).min(area.width),
        height: (lines.len() as u16 + 2).min(area.height),
    };

    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(Clear, panel);
    frame.render_widget(Paragraph::new(lines).block(block), panel);
}

fn inventory_lines(player: &PlayerView) -> Vec<Line<'static>> {
    if player.inventory.is_empty() {
        return vec![Line::from("(Empty)")];
    }
    player
        .inventory
        .iter()
        .zip('a'..='z')
        .map(|(name, letter)| Line::from(format!("({letter}) {name}")))
        .collect()
}
