use super::line_buffer::LineBuffer;
use crate::config::VerticalMotion;

/// Caret position in a [`LineBuffer`], by index only.
///
/// Invariants, restored by [`Cursor::clamp`] after any structural change:
/// `row < line_count` and `col <= len(line[row])`. A column equal to the
/// line length means "after the last character".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Pull the position back inside the buffer
    pub fn clamp(&mut self, buffer: &LineBuffer) {
        self.row = self.row.min(buffer.last_row());
        self.col = self.col.min(buffer.line_len(self.row));
    }

    pub fn is_valid(&self, buffer: &LineBuffer) -> bool {
        self.row < buffer.line_count() && self.col <= buffer.line_len(self.row)
    }

    pub fn move_up(&mut self, buffer: &LineBuffer, motion: VerticalMotion) {
        if self.row == 0 {
            return;
        }
        self.row -= 1;
        self.snap_column(buffer, motion);
    }

    pub fn move_down(&mut self, buffer: &LineBuffer, motion: VerticalMotion) {
        if self.row >= buffer.last_row() {
            return;
        }
        self.row += 1;
        self.snap_column(buffer, motion);
    }

    /// No wrap onto the previous line.
    pub fn move_left(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    /// No wrap onto the next line.
    pub fn move_right(&mut self, buffer: &LineBuffer) {
        if self.col < buffer.line_len(self.row) {
            self.col += 1;
        }
    }

    fn snap_column(&mut self, buffer: &LineBuffer, motion: VerticalMotion) {
        let len = buffer.line_len(self.row);
        self.col = match motion {
            VerticalMotion::PreserveColumn => self.col.min(len),
            VerticalMotion::LineEnd => len,
        };
    }
}
