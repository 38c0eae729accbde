//! Incremental screen synchronisation.
//!
//! [`RenderSync`] repaints only the rows an edit reported dirty. Each row is
//! repainted with the cursor hidden: blank-fill the full width (so shorter new
//! text never leaves glyphs from the longer old text behind), write the row's
//! text, park the caret if this is the cursor row, show the cursor. After the
//! dirty rows a final reposition always puts the terminal caret on the logical
//! cursor, which also covers pure navigation where nothing was dirty.
//!
//! There is no scrolling: rows past the bottom of the screen are skipped and
//! text past the right edge is cut off. Bytes that are not printable ASCII
//! are shown as [`PLACEHOLDER`], one cell per byte, so a loaded file can never
//! send escape sequences to the terminal or shift the caret column.

use std::io::Write;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;

use crate::error::{EditorError, TerminalIoKind, TerminalResultExt};
use crate::model::{Cursor, DirtyRows, LineBuffer};

/// Drawn in place of any byte outside printable ASCII
pub const PLACEHOLDER: u8 = b'?';

/// The byte actually written for `byte`
pub fn display_byte(byte: u8) -> u8 {
    if byte.is_ascii_graphic() || byte == b' ' {
        byte
    } else {
        PLACEHOLDER
    }
}

pub struct RenderSync<W: Write> {
    out: W,
    width: u16,
    height: u16,
    blank_row: String,
}

impl<W: Write> RenderSync<W> {
    pub fn new(out: W, width: u16, height: u16) -> Self {
        Self {
            out,
            width,
            height,
            blank_row: " ".repeat(usize::from(width)),
        }
    }

    /// Visible grid size as (columns, rows)
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.blank_row = " ".repeat(usize::from(width));
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Repaint `dirty` rows top to bottom, then put the caret on `cursor`.
    pub fn redraw(
        &mut self,
        dirty: &DirtyRows,
        buffer: &LineBuffer,
        cursor: Cursor,
    ) -> Result<(), EditorError> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        // Ascending, so the first row below the screen ends the repaint
        let height = usize::from(self.height);
        for row in dirty.iter().take_while(|&row| row < height)
        {
            self.draw_row(row, buffer, cursor)?;
        }

        self.place_caret(cursor)?;
        self.out.flush().terminal(TerminalIoKind::WriteOutput)
    }

    /// Paint every line that fits on screen. Used once after loading.
    pub fn render_all(&mut self, buffer: &LineBuffer, cursor: Cursor) -> Result<(), EditorError> {
        let last = buffer
            .last_row()
            .min(usize::from(self.height.saturating_sub(1)));
        self.redraw(&DirtyRows::span(0..=last), buffer, cursor)
    }

    /// Wipe the whole screen and home the caret
    pub fn clear_screen(&mut self) -> Result<(), EditorError> {
        queue!(self.out, Clear(ClearType::All)).terminal(TerminalIoKind::WriteOutput)?;
        queue!(self.out, MoveTo(0, 0)).terminal(TerminalIoKind::SetCursorPosition)?;
        self.out.flush().terminal(TerminalIoKind::WriteOutput)
    }

    fn draw_row(
        &mut self,
        row: usize,
        buffer: &LineBuffer,
        cursor: Cursor,
    ) -> Result<(), EditorError> {
        // row < height, so it fits in u16
        let y = row as u16;
        let line = buffer.line(row);
        let visible: Vec<u8> = line
            .iter()
            .take(usize::from(self.width))
            .map(|&byte| display_byte(byte))
            .collect();
        tracing::trace!("Redrawing row {} ({} bytes)", row, line.len());

        queue!(self.out, Hide).terminal(TerminalIoKind::SetCursorVisibility)?;

        queue!(self.out, MoveTo(0, y)).terminal(TerminalIoKind::SetCursorPosition)?;
        queue!(self.out, Print(&self.blank_row)).terminal(TerminalIoKind::WriteOutput)?;

        queue!(self.out, MoveTo(0, y)).terminal(TerminalIoKind::SetCursorPosition)?;
        self.out
            .write_all(&visible)
            .terminal(TerminalIoKind::WriteOutput)?;

        if row == cursor.row {
            let (col, _) = self.screen_position(cursor);
            queue!(self.out, MoveTo(col, y)).terminal(TerminalIoKind::SetCursorPosition)?;
        }

        queue!(self.out, Show).terminal(TerminalIoKind::SetCursorVisibility)
    }

    fn place_caret(&mut self, cursor: Cursor) -> Result<(), EditorError> {
        let (col, row) = self.screen_position(cursor);
        queue!(self.out, MoveTo(col, row)).terminal(TerminalIoKind::SetCursorPosition)
    }

    /// Logical cursor clamped into the visible grid
    fn screen_position(&self, cursor: Cursor) -> (u16, u16) {
        let col = cursor.col.min(usize::from(self.width.saturating_sub(1)));
        let row = cursor.row.min(usize::from(self.height.saturating_sub(1)));
        (col as u16, row as u16)
    }
}
