//! Keyboard handler translating key events into builder operations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::app_state::{AppState, ModalFocus};
use super::builder::SaveOutcome;
use crate::config::KeyBindings;
use crate::model::BuilderAction;

/// Handle a key event.
///
/// Returns `true` if the application should quit.
///
/// # Behavior
/// - Ctrl+C always quits.
/// - With the Name field focused, printable characters and Backspace edit
///   the segment name before any binding is consulted.
/// - Enter adds a schema only while the pending selector has focus.
/// - Everything else is looked up in `bindings` for the current screen
///   (landing or modal) and dispatched to the builder.
pub fn handle_key(state: &mut AppState, bindings: &KeyBindings, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    let modal_open = state.builder.is_modal_open();

    if modal_open && state.focus == ModalFocus::Name && edit_name(state, key) {
        return false;
    }

    let Some(action) = bindings.get(key, modal_open) else {
        return false;
    };
    debug!(?action, modal_open, "Dispatching key action");

    if !modal_open {
        return match action {
            BuilderAction::OpenModal => {
                state.builder.open_modal();
                state.focus = ModalFocus::Name;
                false
            }
            BuilderAction::DismissNotification => {
                state.builder.dismiss_notification();
                false
            }
            BuilderAction::Quit => true,
            _ => false,
        };
    }

    let rows = state.row_count();
    match action {
        BuilderAction::Cancel => {
            state.builder.cancel();
            state.focus = ModalFocus::Name;
        }
        BuilderAction::Save => {
            if state.builder.save() == SaveOutcome::Saved {
                state.focus = ModalFocus::Name;
            }
        }
        BuilderAction::FocusNext => state.focus = state.focus.next(rows),
        BuilderAction::FocusPrev => state.focus = state.focus.prev(rows),
        BuilderAction::OptionNext => cycle_option(state, true),
        BuilderAction::OptionPrev => cycle_option(state, false),
        BuilderAction::AddSchema => {
            // Enter adds only from the pending selector; Ctrl+A works from any field.
            if key.code != KeyCode::Enter || state.focus == ModalFocus::Pending {
                // Rejection is surfaced through the notification slot.
                let _ = state.builder.add_schema();
            }
        }
        BuilderAction::RemoveSchema => {
            if let ModalFocus::Row(i) = state.focus {
                state.builder.remove_schema(i);
                state.focus = state.focus.clamp(state.row_count());
            }
        }
        BuilderAction::DismissNotification => state.builder.dismiss_notification(),
        BuilderAction::OpenModal | BuilderAction::Quit => {}
    }

    false
}

/// Apply text editing keys to the name field. Returns `true` if consumed.
fn edit_name(state: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut name = state.builder.draft().name().to_string();
            name.push(ch);
            state.builder.set_name(name);
            true
        }
        KeyCode::Backspace => {
            let mut name = state.builder.draft().name().to_string();
            name.pop();
            state.builder.set_name(name);
            true
        }
        _ => false,
    }
}

/// Step the focused selector forward or backward through its options, wrapping.
fn cycle_option(state: &mut AppState, forward: bool) {
    match state.focus {
        ModalFocus::Name => {}
        ModalFocus::Row(row) => {
            let options = state.builder.available_for_row(row);
            let Some(current) = state.builder.draft().schemas().get(row).copied() else {
                return;
            };
            let Some(pos) = options.iter().position(|o| *o == current) else {
                return;
            };
            let next = step(pos, options.len(), forward);
            state.builder.change_schema(row, options[next].value);
        }
        ModalFocus::Pending => {
            // Slot 0 is the empty "Add schema to segment" placeholder.
            let options = state.builder.available_for_pending();
            let pos = state
                .builder
                .pending()
                .and_then(|p| options.iter().position(|o| *o == p))
                .map_or(0, |i| i + 1);
            let next = step(pos, options.len() + 1, forward);
            let value = if next == 0 { "" } else { options[next - 1].value };
            state.builder.select_pending_schema(value);
        }
    }
}

fn step(pos: usize, len: usize, forward: bool) -> usize {
    if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    }
}
