//! Domain-level keyboard actions independent of key bindings.

/// User intents that can be bound to keys.
///
/// The mapping from `crossterm::event::KeyEvent` to `BuilderAction` is
/// handled by `KeyBindings`. Character input into the name field is not an
/// action; it is routed directly when the name field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuilderAction {
    /// Reveal the segment modal. Default: Enter/o (modal closed)
    OpenModal,
    /// Close the modal and discard the draft. Default: Esc
    Cancel,
    /// Validate and submit the draft. Default: Ctrl+s
    Save,

    /// Move focus to the next field. Default: Tab/↓
    FocusNext,
    /// Move focus to the previous field. Default: Shift+Tab/↑
    FocusPrev,

    /// Select the next option in the focused selector. Default: →
    OptionNext,
    /// Select the previous option in the focused selector. Default: ←
    OptionPrev,

    /// Append the pending candidate as a new row. Default: Enter (pending selector only)/Ctrl+a (any field)
    AddSchema,
    /// Remove the focused row. Default: Delete/Ctrl+d
    RemoveSchema,

    /// Hide the visible notification. Default: Ctrl+x
    DismissNotification,

    /// Exit the application. Default: q (modal closed)/Ctrl+c
    Quit,
}
