//! Message panel renderer shared by the main view and the history overlay.

use client_frontend_core::{MessageEntry, view_model::PresentationMapper};
use ratatui::{Frame, layout::Rect, style::Style, text::Line, widgets::Paragraph};

/// Renders `entries` bottom-up into `area`, newest on the last row.
///
/// Each entry is wrapped to the area width. Older lines that do not fit are
/// cut off at the top.
pub fn render<'a, T, I>(frame: &mut Frame, area: Rect, entries: I, theme: &T)
where
    T: PresentationMapper<Style = Style>,
    I: DoubleEndedIterator<Item = &'a MessageEntry>,
{
    let lines = message_lines(entries, area.width, area.height, theme);
    let used = lines.len() as u16;
    let target = Rect {
        y: area.y + area.height - used,
        height: used,
        ..area
    };
    frame.render_widget(Paragraph::new(lines), target);
}

/// The last `height` wrapped lines of `entries`, oldest first.
pub fn message_lines<'a, T, I>(entries: I, width: u16, height: u16, theme: &T) -> Vec<Line<'static>>
where
    T: PresentationMapper<Style = Style>,
    I: DoubleEndedIterator<Item = &'a MessageEntry>,
{
    let limit = usize::from(height);
    let mut lines = Vec::with_capacity(limit);

    'entries: for entry in entries.rev() {
        let style = theme.style_message(entry.level);
        for text in entry.wrapped(usize::from(width)).into_iter().rev() {
            if lines.len() == limit {
                break 'entries;
            }
            lines.push(Line::styled(text, style));
        }
    }

    lines.reverse();
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::theme::RatatuiTheme;
    use client_frontend_core::{MessageLevel, MessageLog};

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn newest_message_is_last() {
        let mut log = MessageLog::new(8);
        log.push_text("first");
        log.push_text("second");

        let lines = message_lines(log.iter(), 20, 5, &RatatuiTheme);
        assert_eq!(texts(&lines), ["first", "second"]);
    }

    #[test]
    fn overflow_drops_oldest_lines() {
        let mut log = MessageLog::new(8);
        for text in ["one", "two", "three", "four"] {
            log.push_text(text);
        }

        let lines = message_lines(log.iter(), 20, 2, &RatatuiTheme);
        assert_eq!(texts(&lines), ["three", "four"]);
    }

    #[test]
    fn long_entry_wraps_and_keeps_its_tail() {
        let mut log = MessageLog::new(8);
        log.add_message("alpha beta gamma", MessageLevel::Warning);

        let lines = message_lines(log.iter(), 6, 2, &RatatuiTheme);
        assert_eq!(texts(&lines), ["beta", "gamma"]);
    }

    #[test]
    fn sub_range_limits_entries() {
        let mut log = MessageLog::new(8);
        for text in ["a", "b", "c"] {
            log.push_text(text);
        }

        let lines = message_lines(log.up_to(Some(1)), 10, 10, &RatatuiTheme);
        assert_eq!(texts(&lines), ["a", "b"]);
    }
}
