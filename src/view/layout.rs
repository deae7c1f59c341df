//! Whole-screen composition: landing view, modal overlay, snackbar.

use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::segment_modal::render_segment_modal;
use super::snackbar::render_snackbar;
use super::styles;
use crate::state::AppState;

/// Render one frame for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState) {
    let snapshot = state.builder.snapshot();

    render_landing(frame);
    render_segment_modal(frame, &snapshot, state.focus);
    render_snackbar(frame, snapshot.notification.as_ref());
}

/// Landing screen with the "Save segment" entry point.
fn render_landing(frame: &mut Frame) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let prompt = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled("[ Save segment ]", styles::KEY_HINT)),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter to start building a segment",
            styles::MUTED_TEXT,
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Segment Builder ")
            .borders(Borders::ALL)
            .border_style(styles::MUTED_TEXT),
    );
    frame.render_widget(prompt, body);

    let hints = Line::from(vec![
        Span::styled(" Enter/o", styles::KEY_HINT),
        Span::raw(" Open  "),
        Span::styled("Ctrl+X", styles::KEY_HINT),
        Span::raw(" Dismiss message  "),
        Span::styled("q", styles::KEY_HINT),
        Span::raw(" Quit"),
    ]);
    frame.render_widget(Paragraph::new(hints), footer);
}
