//! Keyboard bindings configuration.

use crate::model::key_action::BuilderAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to builder actions.
///
/// Two tables exist because the same key means different things depending on
/// whether the segment modal is open (Enter opens the modal from the landing
/// screen but adds a schema inside it).
#[derive(Debug, Clone)]
pub struct KeyBindings {
    landing: HashMap<KeyEvent, BuilderAction>,
    modal: HashMap<KeyEvent, BuilderAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent, modal_open: bool) -> Option<BuilderAction> {
        let table = if modal_open {
            &self.modal
        } else {
            &self.landing
        };
        table.get(&normalize(key)).copied()
    }
}

/// Strip event kind/state so lookups only compare code and modifiers.
fn normalize(key: KeyEvent) -> KeyEvent {
    KeyEvent::new(key.code, key.modifiers)
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut landing = HashMap::new();
        landing.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            BuilderAction::OpenModal,
        );
        landing.insert(
            KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE),
            BuilderAction::OpenModal,
        );
        landing.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            BuilderAction::Quit,
        );
        landing.insert(
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
            BuilderAction::DismissNotification,
        );

        let mut modal = HashMap::new();

        // Leaving the modal
        modal.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            BuilderAction::Cancel,
        );
        modal.insert(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
            BuilderAction::Save,
        );

        // Field focus
        modal.insert(
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            BuilderAction::FocusNext,
        );
        modal.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            BuilderAction::FocusPrev,
        );
        modal.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            BuilderAction::FocusNext,
        );
        modal.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            BuilderAction::FocusPrev,
        );

        // Selector cycling
        modal.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            BuilderAction::OptionNext,
        );
        modal.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            BuilderAction::OptionPrev,
        );

        // Rows
        modal.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            BuilderAction::AddSchema,
        );
        modal.insert(
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL),
            BuilderAction::AddSchema,
        );
        modal.insert(
            KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE),
            BuilderAction::RemoveSchema,
        );
        modal.insert(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
            BuilderAction::RemoveSchema,
        );

        modal.insert(
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
            BuilderAction::DismissNotification,
        );

        Self { landing, modal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn enter_opens_modal_on_landing_screen() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Enter, KeyModifiers::NONE), false),
            Some(BuilderAction::OpenModal)
        );
    }

    #[test]
    fn enter_adds_schema_inside_modal() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Enter, KeyModifiers::NONE), true),
            Some(BuilderAction::AddSchema)
        );
    }

    #[test]
    fn q_quits_only_from_landing_screen() {
        let bindings = KeyBindings::default();
        let q = key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(bindings.get(q, false), Some(BuilderAction::Quit));
        assert_eq!(bindings.get(q, true), None);
    }

    #[test]
    fn ctrl_s_saves_inside_modal() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char('s'), KeyModifiers::CONTROL), true),
            Some(BuilderAction::Save)
        );
    }

    #[test]
    fn esc_cancels_inside_modal() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Esc, KeyModifiers::NONE), true),
            Some(BuilderAction::Cancel)
        );
    }

    #[test]
    fn plain_letters_are_unbound_inside_modal() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(key(KeyCode::Char('s'), KeyModifiers::NONE), true),
            None
        );
    }
}
