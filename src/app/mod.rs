//! Application layer: the edit loop and the end-of-session save flow.

pub mod engine;
pub mod save_prompt;

pub use engine::{Dispatch, EditEngine};
