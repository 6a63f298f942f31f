//! Status line: player health and what lies under the mouse.
use client_frontend_core::view_model::{PlayerView, PresentationMapper};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    player: &PlayerView,
    hovered_names: &[&str],
    theme: &T,
) {
    let actor = &player.actor;
    let mut spans = vec![
        Span::raw("HP: "),
        Span::styled(
            format!("{}/{}", actor.health, actor.max_health),
            theme.style_health(actor.health, actor.max_health),
        ),
    ];
    if !hovered_names.is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::raw(hovered_names.join(", ")));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
