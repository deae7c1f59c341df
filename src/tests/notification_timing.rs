//! Snackbar lifetime as seen on screen.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use crate::model::notification::{MSG_NAME_REQUIRED, MSG_SELECT_SCHEMA_FIRST};
use crate::model::NOTIFICATION_LIFETIME;
use crate::state::ModalFocus;
use crate::test_harness::{buffer_to_string, builder_with, ManualClock, RecordingSubmitter, Reply};
use crate::view::TuiApp;

fn setup() -> (TuiApp<TestBackend>, ManualClock) {
    let clock = ManualClock::new();
    let builder = builder_with(&RecordingSubmitter::new(Reply::Status(200)), &clock);
    let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut app = TuiApp::new_for_test(terminal, builder);
    app.handle_key_test(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    (app, clock)
}

fn screen(app: &mut TuiApp<TestBackend>) -> String {
    app.render_test().unwrap();
    buffer_to_string(app.terminal().backend().buffer())
}

fn add_without_candidate(app: &mut TuiApp<TestBackend>) {
    app.app_state_mut().focus = ModalFocus::Pending;
    app.handle_key_test(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
}

#[test]
fn snackbar_disappears_after_three_seconds() {
    let (mut app, clock) = setup();
    add_without_candidate(&mut app);
    assert!(screen(&mut app).contains(MSG_SELECT_SCHEMA_FIRST));

    clock.advance(Duration::from_millis(2_999));
    assert!(!app.app_state_mut().builder.tick());
    assert!(screen(&mut app).contains(MSG_SELECT_SCHEMA_FIRST));

    clock.advance(Duration::from_millis(1));
    assert!(app.app_state_mut().builder.tick());
    assert!(!screen(&mut app).contains(MSG_SELECT_SCHEMA_FIRST));
}

#[test]
fn newer_message_replaces_older_and_restarts_countdown() {
    let (mut app, clock) = setup();
    add_without_candidate(&mut app);

    clock.advance(Duration::from_secs(2));
    app.handle_key_test(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

    let shown = screen(&mut app);
    assert!(shown.contains(MSG_NAME_REQUIRED));
    assert!(!shown.contains(MSG_SELECT_SCHEMA_FIRST));

    // Original deadline passes: newer message stays.
    clock.advance(Duration::from_secs(1));
    app.app_state_mut().builder.tick();
    assert!(screen(&mut app).contains(MSG_NAME_REQUIRED));

    // Newer deadline passes: cleared exactly once.
    clock.advance(NOTIFICATION_LIFETIME - Duration::from_secs(1));
    assert!(app.app_state_mut().builder.tick());
    assert!(!app.app_state_mut().builder.tick());
    assert!(!screen(&mut app).contains(MSG_NAME_REQUIRED));
}
