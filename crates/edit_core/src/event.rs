//! Notifications emitted by the engine and the key commands it understands.

/// Notification queued for the owner of an engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditEvent {
    /// The true text changed; carries the new text.
    TextChanged(String),
    /// Return was pressed; carries the current text.
    ReturnPressed(String),
}

/// Key commands, already resolved from raw key codes and modifiers.
///
/// Integration layers map platform shortcuts (Ctrl+C, Cmd+V, ...) onto the
/// clipboard and select-all variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditKey {
    Left,
    Right,
    Home,
    End,
    Return,
    Backspace,
    Delete,
    Copy,
    Cut,
    Paste,
    SelectAll,
}
