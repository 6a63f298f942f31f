//! Frame rendering tests on a fixed-size `TestBackend`.
//!
//! Verified properties:
//! - The game view is drawn under every handler state.
//! - The history overlay shows its title and only entries up to the cursor.
//! - The drop prompt lists inventory letters.
//!
//! Colours and border glyphs are not checked.

use client_frontend_cli::{CliApp, CliConfig};
use client_frontend_core::{GameSession, MessageLog, SessionConfig, engine::Engine};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use game_core::GameState;
use ratatui::{Terminal, backend::TestBackend};

fn buffer_to_lines(term: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = term.backend().buffer();
    let mut out = Vec::new();
    for row in 0..buffer.area.height {
        let mut s = String::new();
        for col in 0..buffer.area.width {
            let sym = buffer
                .cell((col, row))
                .expect("buffer cell in-bounds")
                .symbol()
                .chars()
                .next()
                .unwrap_or(' ');
            s.push(sym);
        }
        out.push(s);
    }
    out
}

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

fn app_with_messages(messages: &[&str]) -> CliApp {
    let state = GameState::from_layout(&["#####", "#@.!#", "#####"]).unwrap();
    let mut session = GameSession::new(state, MessageLog::new(64), SessionConfig::default());
    for text in messages {
        session.message_log_mut().push_text(*text);
    }
    CliApp::new(session, CliConfig::default())
}

fn render(app: &mut CliApp) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).expect("terminal");
    app.draw(&mut terminal).expect("draw");
    buffer_to_lines(&terminal)
}

fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

#[test]
fn main_view_shows_map_and_newest_message() {
    let mut app = app_with_messages(&["older news", "latest news"]);
    let lines = render(&mut app);

    assert!(lines[1].starts_with("#@.!#"), "map row: {:?}", lines[1]);
    assert!(contains(&lines, "HP: 30/30"));
    assert!(contains(&lines, "latest news"));
    assert!(!contains(&lines, "Message History"));
}

#[test]
fn history_overlay_shows_title_and_entries_up_to_cursor() {
    let mut app = app_with_messages(&["first entry", "second entry", "third entry"]);
    app.handle_terminal_event(&press(KeyCode::Char('v')));
    app.handle_terminal_event(&press(KeyCode::Up));

    let lines = render(&mut app);

    assert!(contains(&lines, "Message History"));
    // The overlay is inset by three cells on each side.
    let title_row = lines
        .iter()
        .position(|line| line.contains("Message History"))
        .unwrap();
    assert_eq!(title_row, 3);
    assert!(contains(&lines, "second entry"));

    // The background message panel still shows the newest entry below the
    // overlay, so count occurrences inside the overlay rows only.
    let overlay_rows = &lines[3..lines.len() - 3];
    assert!(!overlay_rows.iter().any(|line| line.contains("third entry")));
    assert!(overlay_rows.iter().any(|line| line.contains("first entry")));
}

#[test]
fn history_overlay_on_empty_log_renders_frame_only() {
    let mut app = app_with_messages(&[]);
    app.handle_terminal_event(&press(KeyCode::Char('v')));
    app.handle_terminal_event(&press(KeyCode::Down));

    let lines = render(&mut app);
    assert!(contains(&lines, "Message History"));
}

#[test]
fn drop_prompt_lists_inventory() {
    let mut app = app_with_messages(&[]);
    app.handle_terminal_event(&press(KeyCode::Right));
    app.handle_terminal_event(&press(KeyCode::Right));
    app.handle_terminal_event(&press(KeyCode::Char('g')));
    app.handle_terminal_event(&press(KeyCode::Char('d')));

    let lines = render(&mut app);

    assert!(contains(&lines, "Select an item to drop"));
    assert!(contains(&lines, "(a) Healing Potion"));
}
