//! Translation from raw crossterm key events to [`KeyIntent`]s.
//!
//! This is the only place that knows about terminal key codes. Anything that
//! is not one of the recognized navigation/edit keys or a character on the
//! printable allow-list is dropped here and never reaches the editor.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::intent::{InputEvent, KeyIntent};

/// Punctuation accepted as printable input, in addition to ASCII letters,
/// digits and space.
pub const PRINTABLE_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Whether `c` may be inserted into the buffer
pub fn is_printable(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || PRINTABLE_PUNCTUATION.contains(c)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTranslator;

impl KeyTranslator {
    pub fn new() -> Self {
        Self
    }

    /// Translate any terminal event. Key presses can produce an intent and
    /// resizes are passed through; everything else is dropped.
    pub fn translate_event(&self, event: &Event) -> Option<InputEvent> {
        match event {
            Event::Key(key_event) => self.translate(key_event).map(InputEvent::Intent),
            Event::Resize(width, height) => Some(InputEvent::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }

    /// Translate one key event, or `None` if it should be ignored.
    pub fn translate(&self, key_event: &KeyEvent) -> Option<KeyIntent> {
        // Presses and auto-repeats both count as the key being down
        if key_event.kind == KeyEventKind::Release {
            return None;
        }

        match key_event.code {
            KeyCode::Up => Some(KeyIntent::MoveUp),
            KeyCode::Down => Some(KeyIntent::MoveDown),
            KeyCode::Left => Some(KeyIntent::MoveLeft),
            KeyCode::Right => Some(KeyIntent::MoveRight),
            KeyCode::Enter => Some(KeyIntent::Enter),
            KeyCode::Backspace => Some(KeyIntent::Backspace),
            KeyCode::Tab => Some(KeyIntent::Tab),
            KeyCode::Esc => Some(KeyIntent::Escape),
            KeyCode::Char(c)
                if (key_event.modifiers == KeyModifiers::NONE
                    || key_event.modifiers == KeyModifiers::SHIFT)
                    && is_printable(c) =>
            {
                Some(KeyIntent::Printable(c))
            }
            _ => None,
        }
    }
}
