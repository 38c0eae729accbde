//! linepad: a minimal line-oriented terminal text editor.
//!
//! The editing core is [`model::LineBuffer`] plus [`model::Cursor`], driven
//! by [`app::EditEngine`], with [`view::RenderSync`] keeping the terminal in
//! step with the buffer one dirty row at a time.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod services;
pub mod view;

pub use error::{EditorError, TerminalIoKind};
