//! Error taxonomy for the editor.
//!
//! Every failure the session can hit maps to exactly one named kind, and
//! every kind owns a distinct process exit status. Nothing here is retried:
//! errors travel up with `?` until the binary prints them and exits.

use std::io;
use std::path::PathBuf;

use crate::config::ConfigError;

/// Which terminal operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalIoKind {
    /// Querying the current terminal mode
    GetMode,
    /// Switching the terminal into or out of raw mode
    SetMode,
    /// Moving the terminal cursor
    SetCursorPosition,
    /// Acquiring the input or output handle
    HandleAcquisition,
    /// Reading the next input event
    ReadInput,
    /// Querying the visible grid size
    ScreenInfo,
    /// Querying cursor visibility
    GetCursorVisibility,
    /// Hiding or showing the cursor
    SetCursorVisibility,
    /// Writing text to the terminal or flushing it
    WriteOutput,
}

impl TerminalIoKind {
    pub fn name(self) -> &'static str {
        match self {
            TerminalIoKind::GetMode => "GetModeError",
            TerminalIoKind::SetMode => "SetModeError",
            TerminalIoKind::SetCursorPosition => "SetCursorPositionError",
            TerminalIoKind::HandleAcquisition => "HandleAcquisitionError",
            TerminalIoKind::ReadInput => "ReadInputError",
            TerminalIoKind::ScreenInfo => "ScreenInfoError",
            TerminalIoKind::GetCursorVisibility => "GetCursorVisibilityError",
            TerminalIoKind::SetCursorVisibility => "SetCursorVisibilityError",
            TerminalIoKind::WriteOutput => "WriteOutputError",
        }
    }

    fn exit_code(self) -> u8 {
        match self {
            TerminalIoKind::GetMode => 3,
            TerminalIoKind::SetMode => 4,
            TerminalIoKind::SetCursorPosition => 5,
            TerminalIoKind::HandleAcquisition => 6,
            TerminalIoKind::ReadInput => 7,
            TerminalIoKind::ScreenInfo => 8,
            TerminalIoKind::GetCursorVisibility => 9,
            TerminalIoKind::SetCursorVisibility => 10,
            TerminalIoKind::WriteOutput => 11,
        }
    }
}

impl std::fmt::Display for TerminalIoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("CommandLineArgumentsError: {0}")]
    CommandLineArguments(String),

    #[error("FileOpenError: {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{kind}: {source}")]
    TerminalIo {
        kind: TerminalIoKind,
        #[source]
        source: io::Error,
    },

    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
}

impl EditorError {
    pub fn file_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        EditorError::FileOpen {
            path: path.into(),
            source,
        }
    }

    pub fn terminal(kind: TerminalIoKind, source: io::Error) -> Self {
        EditorError::TerminalIo { kind, source }
    }

    /// Terminal kind, if this is a terminal failure
    pub fn terminal_kind(&self) -> Option<TerminalIoKind> {
        match self {
            EditorError::TerminalIo { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Process exit status for this kind. Never 0.
    pub fn exit_code(&self) -> u8 {
        match self {
            EditorError::CommandLineArguments(_) => 1,
            EditorError::FileOpen { .. } => 2,
            EditorError::TerminalIo { kind, .. } => kind.exit_code(),
            EditorError::Config(_) => 12,
        }
    }
}

/// Attach a terminal kind to a raw io result.
pub(crate) trait TerminalResultExt<T> {
    fn terminal(self, kind: TerminalIoKind) -> Result<T, EditorError>;
}

impl<T> TerminalResultExt<T> for io::Result<T> {
    fn terminal(self, kind: TerminalIoKind) -> Result<T, EditorError> {
        self.map_err(|source| EditorError::terminal(kind, source))
    }
}
