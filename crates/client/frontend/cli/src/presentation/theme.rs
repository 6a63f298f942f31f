//! Ratatui theme implementation of PresentationMapper.
use client_frontend_core::{
    MessageLevel,
    view_model::{ActorView, PresentationMapper},
};
use game_core::TerrainKind;
use ratatui::style::{Color, Modifier, Style};

/// Colour scheme for the terminal UI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }
}

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn render_actor(&self, actor: &ActorView) -> (char, Self::Style) {
        if !actor.alive {
            return ('%', Style::default().fg(Color::Red));
        }

        let glyph = if actor.is_player() {
            '@'
        } else {
            actor.name.chars().next().unwrap_or('?')
        };
        let color = match actor.name.as_str() {
            "Player" => Color::White,
            "Orc" => Color::Rgb(63, 127, 63),
            "Troll" => Color::Rgb(0, 127, 0),
            _ => Color::LightRed,
        };

        let mut style = Style::default().fg(color);
        if actor.health > 0 && actor.health < actor.max_health / 4 {
            style = style.add_modifier(Modifier::DIM);
        }
        (glyph, style)
    }

    fn render_item(&self, name: &str) -> (char, Self::Style) {
        match name {
            "Healing Potion" => ('!', Style::default().fg(Color::Rgb(127, 0, 255))),
            "Lightning Scroll" => ('~', Style::default().fg(Color::Rgb(255, 255, 0))),
            _ => ('*', Style::default().fg(Color::LightCyan)),
        }
    }

    fn render_terrain(&self, terrain: TerrainKind, visible: bool) -> (char, Self::Style) {
        let (glyph, lit, dark) = match terrain {
            TerrainKind::Floor => ('.', Color::Rgb(200, 180, 50), Color::Rgb(50, 50, 150)),
            TerrainKind::Wall => ('#', Color::Rgb(130, 110, 50), Color::Rgb(0, 0, 100)),
        };
        let color = if visible { lit } else { dark };
        (glyph, Style::default().fg(color))
    }

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Attack => Style::default().fg(Color::Rgb(255, 192, 192)),
            MessageLevel::Danger => Style::default().fg(Color::Rgb(255, 64, 64)),
            MessageLevel::Impossible => Style::default().fg(Color::Gray),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
        }
    }

    fn style_health(&self, current: u32, maximum: u32) -> Self::Style {
        if maximum == 0 {
            return Style::default().fg(Color::Gray);
        }

        let percent = (current * 100) / maximum;
        let color = match percent {
            75.. => Color::Green,
            50..=74 => Color::Yellow,
            25..=49 => Color::LightRed,
            _ => Color::Red,
        };

        Style::default().fg(color)
    }
}
