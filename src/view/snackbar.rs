//! Snackbar widget for the transient notification.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::styles;
use crate::model::{Notification, NotificationKind};

/// Render `notification` as a one-line bar above the bottom edge.
///
/// Does nothing when there is no notification.
pub fn render_snackbar(frame: &mut Frame, notification: Option<&Notification>) {
    let Some(notification) = notification else {
        return;
    };

    let area = frame.area();
    if area.height < 2 {
        return;
    }

    let style = match notification.kind {
        NotificationKind::Success => styles::SNACKBAR_SUCCESS,
        NotificationKind::Error => styles::SNACKBAR_ERROR,
    };

    let bar = Rect {
        x: area.x,
        y: area.y + area.height - 2,
        width: area.width,
        height: 1,
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::raw(notification.message.clone()),
        Span::raw("   ×"),
    ]);

    frame.render_widget(
        Paragraph::new(line).style(style).alignment(Alignment::Left),
        bar,
    );
}
