//! The edit loop: one intent in, one buffer mutation, one targeted repaint.

use std::io::Write;

use crate::config::EditorSettings;
use crate::error::EditorError;
use crate::input::{InputEvent, IntentSource, KeyIntent};
use crate::model::{Cursor, DirtyRows, LineBuffer};
use crate::view::RenderSync;

/// Outcome of dispatching a single intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Keep editing; these rows need repainting
    Continue(DirtyRows),
    /// Escape was pressed
    Exit,
}

/// Owns the document and the caret and applies intents to them.
#[derive(Debug, Clone, Default)]
pub struct EditEngine {
    buffer: LineBuffer,
    cursor: Cursor,
    settings: EditorSettings,
}

impl EditEngine {
    pub fn new(buffer: LineBuffer, settings: EditorSettings) -> Self {
        Self {
            buffer,
            cursor: Cursor::default(),
            settings,
        }
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Hand the document back once editing is over
    pub fn into_buffer(self) -> LineBuffer {
        self.buffer
    }

    /// Apply one intent to the buffer and cursor.
    pub fn handle_intent(&mut self, intent: KeyIntent) -> Dispatch {
        tracing::debug!("Dispatching {:?} at {:?}", intent, self.cursor);

        let dirty = match intent {
            KeyIntent::Escape => return Dispatch::Exit,
            KeyIntent::MoveUp => {
                self.cursor
                    .move_up(&self.buffer, self.settings.vertical_motion);
                DirtyRows::new()
            }
            KeyIntent::MoveDown => {
                self.cursor
                    .move_down(&self.buffer, self.settings.vertical_motion);
                DirtyRows::new()
            }
            KeyIntent::MoveLeft => {
                self.cursor.move_left();
                DirtyRows::new()
            }
            KeyIntent::MoveRight => {
                self.cursor.move_right(&self.buffer);
                DirtyRows::new()
            }
            KeyIntent::Enter => self.newline(),
            KeyIntent::Backspace => self.backspace(),
            KeyIntent::Tab => {
                let spaces = " ".repeat(self.settings.tab_width);
                let dirty = self
                    .buffer
                    .insert_str(self.cursor.row, self.cursor.col, &spaces);
                if !dirty.is_empty() {
                    self.cursor.col += self.settings.tab_width;
                }
                dirty
            }
            KeyIntent::Printable(ch) => {
                let dirty = self
                    .buffer
                    .insert_char(self.cursor.row, self.cursor.col, ch);
                if !dirty.is_empty() {
                    self.cursor.col += 1;
                }
                dirty
            }
        };

        self.cursor.clamp(&self.buffer);
        Dispatch::Continue(dirty)
    }

    fn newline(&mut self) -> DirtyRows {
        let Cursor { row, col } = self.cursor;
        let dirty = if col < self.buffer.line_len(row) {
            self.buffer.split_line(row, col)
        } else {
            self.buffer.insert_blank_line_after(row)
        };
        self.cursor = Cursor::new(row + 1, 0);
        dirty
    }

    fn backspace(&mut self) -> DirtyRows {
        let Cursor { row, col } = self.cursor;
        if col > 0 {
            let dirty = self.buffer.delete_char_before(row, col);
            self.cursor.col -= 1;
            dirty
        } else if row > 0 {
            let joint = self.buffer.line_len(row - 1);
            let dirty = self.buffer.merge_with_previous(row);
            self.cursor = Cursor::new(row - 1, joint);
            dirty
        } else {
            DirtyRows::new()
        }
    }

    /// Run the edit loop until Escape.
    ///
    /// The whole screen is painted once up front, after that only the rows
    /// each intent dirtied. A terminal resize clears and repaints the whole
    /// screen at the new size. The first error from the source or the
    /// renderer ends the loop and is returned as is.
    pub fn run<S, W>(&mut self, source: &mut S, render: &mut RenderSync<W>) -> Result<(), EditorError>
    where
        S: IntentSource,
        W: Write,
    {
        tracing::info!(
            "Edit loop starting ({} lines, {:?} screen)",
            self.buffer.line_count(),
            render.size()
        );
        render.render_all(&self.buffer, self.cursor)?;

        loop {
            render.redraw(&DirtyRows::single(self.cursor.row), &self.buffer, self.cursor)?;

            let intent = match source.next_event()? {
                InputEvent::Intent(intent) => intent,
                InputEvent::Resize { width, height } => {
                    tracing::info!("Terminal resized to {}x{}", width, height);
                    render.resize(width, height);
                    render.clear_screen()?;
                    render.render_all(&self.buffer, self.cursor)?;
                    continue;
                }
            };
            match self.handle_intent(intent) {
                Dispatch::Exit => break,
                Dispatch::Continue(dirty) => render.redraw(&dirty, &self.buffer, self.cursor)?,
            }
        }

        tracing::info!("Edit loop finished ({} lines)", self.buffer.line_count());
        Ok(())
    }
}
