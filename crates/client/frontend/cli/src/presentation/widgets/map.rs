//! Map widget rendering the 2D game grid.
use client_frontend_core::view_model::{MapView, PresentationMapper, TileContent, TileView};
use game_core::Position;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Draws tile `(x, y)` at cell `(area.x + x, area.y + y)`. The hovered tile
/// gets a highlighted background.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    map: &MapView,
    hovered: Option<Position>,
    theme: &T,
) {
    let rows: Vec<Line> = map
        .tiles
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|tile| {
                    let (glyph, mut style) = tile_glyph(tile, theme);
                    if hovered == Some(tile.position) {
                        style = style.bg(Color::DarkGray);
                    }
                    Span::styled(glyph.to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(rows), area);
}

fn tile_glyph<T: PresentationMapper<Style = Style>>(tile: &TileView, theme: &T) -> (char, Style) {
    match (&tile.content, tile.terrain) {
        (TileContent::Actor(actor), _) => theme.render_actor(actor),
        (TileContent::Item(name), _) => theme.render_item(name),
        (TileContent::Empty, Some(terrain)) => theme.render_terrain(terrain, tile.visible),
        (TileContent::Empty, None) => (' ', Style::default()),
    }
}
