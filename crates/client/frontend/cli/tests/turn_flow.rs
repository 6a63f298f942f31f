//! End-to-end turn handling against a real `GameSession`.
//!
//! Drives the handler state machine with crossterm events the same way the
//! event loop does, without a terminal.

use client_frontend_cli::{
    CliApp, CliConfig,
    handler::{Flow, HandlerState},
};
use client_frontend_core::{
    EscapePolicy, GameSession, MessageLevel, MessageLog, SessionConfig, engine::Engine,
};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseEvent,
    MouseEventKind,
};
use game_core::{GameState, Position};

const LAYOUT: [&str; 5] = [
    "#######",
    "#@..!.#",
    "#.....#",
    "#....o#",
    "#######",
];

fn app(policy: EscapePolicy) -> CliApp {
    let state = GameState::from_layout(&LAYOUT).unwrap();
    let config = SessionConfig {
        escape_policy: policy,
        ..SessionConfig::default()
    };
    let session = GameSession::new(state, MessageLog::new(64), config);
    CliApp::new(session, CliConfig::default())
}

fn press(code: KeyCode) -> Event {
    press_with(code, KeyModifiers::NONE)
}

fn press_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

fn mouse_at(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn player_position(app: &CliApp) -> Position {
    app.session().state().player().position
}

#[test]
fn walking_into_wall_is_reported_and_costs_nothing() {
    let mut app = app(EscapePolicy::Quit);

    let flow = app.handle_terminal_event(&press(KeyCode::Up));

    assert_eq!(flow, Flow::Continue);
    assert_eq!(player_position(&app), Position::new(1, 1));
    let log = app.session().message_log();
    assert_eq!(log.len(), 1);
    let entry = log.get(0).unwrap();
    assert_eq!(entry.text, "That way is blocked.");
    assert_eq!(entry.level, MessageLevel::Impossible);
}

#[test]
fn movement_refreshes_field_of_view() {
    let mut app = app(EscapePolicy::Quit);

    app.handle_terminal_event(&press(KeyCode::Char('l')));

    assert_eq!(player_position(&app), Position::new(2, 1));
    assert!(app.session().state().map.is_visible(Position::new(2, 1)));
    assert!(app.session().message_log().is_empty());
}

#[test]
fn pickup_then_drop_through_prompt() {
    let mut app = app(EscapePolicy::Quit);
    for _ in 0..3 {
        app.handle_terminal_event(&press(KeyCode::Right));
    }
    assert_eq!(player_position(&app), Position::new(4, 1));

    app.handle_terminal_event(&press(KeyCode::Char('g')));
    assert_eq!(app.session().inventory_len(), 1);

    app.handle_terminal_event(&press(KeyCode::Char('d')));
    assert!(matches!(app.handler().state(), HandlerState::Prompt(_)));

    app.handle_terminal_event(&press(KeyCode::Char('a')));
    assert_eq!(app.handler().state(), &HandlerState::Main);
    assert_eq!(app.session().inventory_len(), 0);

    let texts: Vec<_> = app
        .session()
        .message_log()
        .iter()
        .map(|entry| entry.text.clone())
        .collect();
    assert_eq!(
        texts,
        [
            "You picked up the Healing Potion!",
            "You dropped the Healing Potion."
        ]
    );
}

#[test]
fn drop_prompt_rejects_unknown_letter_and_cancels_on_escape() {
    let mut app = app(EscapePolicy::Quit);

    app.handle_terminal_event(&press(KeyCode::Char('d')));
    app.handle_terminal_event(&press(KeyCode::Char('c')));
    assert!(matches!(app.handler().state(), HandlerState::Prompt(_)));
    assert_eq!(
        app.session().message_log().get(0).map(|entry| entry.text.as_str()),
        Some("Invalid entry.")
    );

    let flow = app.handle_terminal_event(&press(KeyCode::Esc));
    assert_eq!(flow, Flow::Continue);
    assert_eq!(app.handler().state(), &HandlerState::Main);
    assert!(!app.session().exit_requested());
}

#[test]
fn history_viewer_opens_and_closes() {
    let mut app = app(EscapePolicy::Quit);
    app.handle_terminal_event(&press(KeyCode::Up));
    app.handle_terminal_event(&press(KeyCode::Char('g')));

    app.handle_terminal_event(&press(KeyCode::Char('v')));
    let HandlerState::History(viewer) = app.handler().state() else {
        panic!("expected history viewer");
    };
    assert_eq!(viewer.log_length(), 2);
    assert_eq!(viewer.cursor(), Some(1));

    app.handle_terminal_event(&press(KeyCode::Up));
    let HandlerState::History(viewer) = app.handler().state() else {
        panic!("expected history viewer");
    };
    assert_eq!(viewer.cursor(), Some(0));

    app.handle_terminal_event(&press(KeyCode::Char('q')));
    assert_eq!(app.handler().state(), &HandlerState::Main);
    assert_eq!(player_position(&app), Position::new(1, 1));
}

#[test]
fn escape_follows_session_policy() {
    let mut quitting = app(EscapePolicy::Quit);
    assert_eq!(quitting.handle_terminal_event(&press(KeyCode::Esc)), Flow::Exit);

    let mut ignoring = app(EscapePolicy::Ignore);
    assert_eq!(
        ignoring.handle_terminal_event(&press(KeyCode::Esc)),
        Flow::Continue
    );
}

#[test]
fn ctrl_c_quits_from_any_state() {
    let mut app = app(EscapePolicy::Ignore);
    app.handle_terminal_event(&press(KeyCode::Char('v')));

    let flow = app.handle_terminal_event(&press_with(KeyCode::Char('c'), KeyModifiers::CONTROL));

    assert_eq!(flow, Flow::Exit);
}

#[test]
fn mouse_hover_tracks_in_bounds_tiles_only() {
    let mut app = app(EscapePolicy::Quit);

    app.handle_terminal_event(&mouse_at(3, 2));
    assert_eq!(app.session().mouse_location(), Some(Position::new(3, 2)));

    app.handle_terminal_event(&mouse_at(30, 2));
    assert_eq!(app.session().mouse_location(), Some(Position::new(3, 2)));
}
