//! Footer widget displaying key bindings for the active handler.

use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};

use crate::handler::HandlerState;

pub fn render(frame: &mut Frame, area: Rect, state: &HandlerState) {
    let text = match state {
        HandlerState::Main => {
            "[hjklyubn/Arrows/Numpad] Move | [.] Wait | [g] Pick up | [d] Drop | [v] History | [Esc] Quit"
        }
        HandlerState::Prompt(_) => "[a-z] Choose | [Esc] Cancel",
        HandlerState::GameOver => "You died. [Esc] Quit",
        HandlerState::History(_) => "[Up/Down/PgUp/PgDn] Scroll | [Home/End] Jump | [any] Back",
    };

    frame.render_widget(Paragraph::new(Line::from(text)), area);
}
