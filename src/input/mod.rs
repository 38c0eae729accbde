//! Input pipeline: terminal events in, [`KeyIntent`]s and resizes out.

pub mod intent;
pub mod key_translator;
pub mod source;

pub use intent::{InputEvent, KeyIntent};
pub use key_translator::KeyTranslator;
pub use source::{IntentSource, ScriptedIntents, TerminalIntentSource};
