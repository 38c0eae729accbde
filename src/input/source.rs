use std::collections::VecDeque;

use super::intent::{InputEvent, KeyIntent};
use super::key_translator::KeyTranslator;
use crate::error::{EditorError, TerminalIoKind, TerminalResultExt};

/// Blocking supplier of editing intents and terminal resizes.
pub trait IntentSource {
    /// Block until the next intent or resize is available.
    fn next_event(&mut self) -> Result<InputEvent, EditorError>;

    /// Block until the next intent, skipping resizes.
    fn next_intent(&mut self) -> Result<KeyIntent, EditorError> {
        loop {
            match self.next_event()? {
                InputEvent::Intent(intent) => return Ok(intent),
                InputEvent::Resize { width, height } => {
                    tracing::trace!("Skipping resize to {}x{}", width, height);
                }
            }
        }
    }
}

/// Reads key events from the real terminal.
///
/// Events the translator drops (releases, mouse, focus, unlisted keys) are
/// swallowed here, so callers only see intents and resizes.
#[derive(Debug, Default)]
pub struct TerminalIntentSource {
    translator: KeyTranslator,
}

impl TerminalIntentSource {
    pub fn new(translator: KeyTranslator) -> Self {
        Self { translator }
    }
}

impl IntentSource for TerminalIntentSource {
    fn next_event(&mut self) -> Result<InputEvent, EditorError> {
        loop {
            let event = crossterm::event::read().terminal(TerminalIoKind::ReadInput)?;
            match self.translator.translate_event(&event) {
                Some(input) => return Ok(input),
                None => tracing::trace!("Ignoring event {:?}", event),
            }
        }
    }
}

/// Replays a fixed list of events, then reports Escape forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedIntents {
    events: VecDeque<InputEvent>,
}

impl ScriptedIntents {
    pub fn new(intents: impl IntoIterator<Item = KeyIntent>) -> Self {
        Self {
            events: intents.into_iter().map(InputEvent::Intent).collect(),
        }
    }

    /// One Printable intent per character of `text`
    pub fn typing(text: &str) -> Self {
        Self::new(text.chars().map(KeyIntent::Printable))
    }

    pub fn push(&mut self, intent: KeyIntent) {
        self.events.push_back(InputEvent::Intent(intent));
    }

    pub fn push_resize(&mut self, width: u16, height: u16) {
        self.events.push_back(InputEvent::Resize { width, height });
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl IntentSource for ScriptedIntents {
    fn next_event(&mut self) -> Result<InputEvent, EditorError> {
        Ok(self
            .events
            .pop_front()
            .unwrap_or(InputEvent::Intent(KeyIntent::Escape)))
    }
}
