/// One discrete editing intent, as produced by the key translation boundary.
///
/// This is a closed set: the editing core never sees platform key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyIntent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Enter,
    Backspace,
    Tab,
    /// Leave the edit loop
    Escape,
    /// A character from the printable allow-list
    Printable(char),
}

/// Everything an input source can hand the edit loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Intent(KeyIntent),
    /// The terminal grid changed size; nothing in the buffer changes
    Resize { width: u16, height: u16 },
}

impl From<KeyIntent> for InputEvent {
    fn from(intent: KeyIntent) -> Self {
        InputEvent::Intent(intent)
    }
}
