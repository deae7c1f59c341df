//! Shared styles for the segment builder screens.

use ratatui::style::{Color, Modifier, Style};

/// Modal border and title.
pub const MODAL_BORDER: Style = Style::new().fg(Color::Cyan);

/// Section headers and field labels.
pub const SECTION_HEADER: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Hints, placeholders and secondary text.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// The field currently receiving keys.
pub const FOCUSED: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// Green dot marking a user trait row.
pub const USER_TRAIT_DOT: Style = Style::new().fg(Color::Green);

/// Red dot marking a group trait in the legend.
pub const GROUP_TRAIT_DOT: Style = Style::new().fg(Color::Red);

/// Key names in hint lines.
pub const KEY_HINT: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Snackbar for successful operations.
pub const SNACKBAR_SUCCESS: Style = Style::new().fg(Color::Black).bg(Color::Green);

/// Snackbar for failures.
pub const SNACKBAR_ERROR: Style = Style::new().fg(Color::White).bg(Color::Red);
