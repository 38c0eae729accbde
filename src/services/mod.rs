//! Process-level services: the terminal mode guard and log setup.

pub mod terminal_session;
#[cfg(feature = "runtime")]
pub mod tracing_setup;

pub use terminal_session::TerminalSession;
