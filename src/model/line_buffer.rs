//! Flat line storage for the document being edited.
//!
//! A [`LineBuffer`] is an ordered list of byte lines that is never empty. Each
//! structural edit keeps that invariant and returns the [`DirtyRows`] the
//! screen needs repainted: a single-line edit dirties only its row, while
//! anything that shifts row indices dirties everything from the edit point to
//! the end of the document.

use super::dirty_rows::DirtyRows;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<Vec<u8>>,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// A buffer holding a single blank line
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
        }
    }

    /// Build from existing lines. No lines at all gives one blank line.
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        let mut lines: Vec<Vec<u8>> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            lines.push(Vec::new());
        }
        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn last_row(&self) -> usize {
        self.lines.len() - 1
    }

    /// Content of `row`. Rows past the end read as empty.
    pub fn line(&self, row: usize) -> &[u8] {
        self.lines.get(row).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).len()
    }

    pub fn lines(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.lines.iter().map(Vec::as_slice)
    }

    /// Lines as strings, for logging and assertions
    pub fn to_strings(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| String::from_utf8_lossy(line).into_owned())
            .collect()
    }

    /// Insert one character at `col`, shifting the rest of the line right.
    ///
    /// Only single-byte characters are stored; anything wider is ignored.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) -> DirtyRows {
        if !ch.is_ascii() {
            tracing::warn!("insert_char: dropping non-ASCII {:?}", ch);
            return DirtyRows::new();
        }
        self.insert_bytes(row, col, &[ch as u8])
    }

    /// Insert a run of text at `col`.
    pub fn insert_str(&mut self, row: usize, col: usize, text: &str) -> DirtyRows {
        self.insert_bytes(row, col, text.as_bytes())
    }

    fn insert_bytes(&mut self, row: usize, col: usize, bytes: &[u8]) -> DirtyRows {
        if !self.has_row(row, "insert") || bytes.is_empty() {
            return DirtyRows::new();
        }
        let line = &mut self.lines[row];
        let col = col.min(line.len());
        line.splice(col..col, bytes.iter().copied());
        DirtyRows::single(row)
    }

    /// Remove the character just before `col`. A no-op at column 0: joining
    /// lines is [`merge_with_previous`](Self::merge_with_previous)'s job.
    pub fn delete_char_before(&mut self, row: usize, col: usize) -> DirtyRows {
        if !self.has_row(row, "delete") {
            return DirtyRows::new();
        }
        let line = &mut self.lines[row];
        let col = col.min(line.len());
        if col == 0 {
            return DirtyRows::new();
        }
        line.remove(col - 1);
        DirtyRows::single(row)
    }

    /// Split `row` at `col`: the row keeps `[0, col)` and a new line holding
    /// `[col, end)` is inserted right after it.
    pub fn split_line(&mut self, row: usize, col: usize) -> DirtyRows {
        if !self.has_row(row, "split") {
            return DirtyRows::new();
        }
        let line = &mut self.lines[row];
        let col = col.min(line.len());
        let suffix = line.split_off(col);
        self.lines.insert(row + 1, suffix);
        DirtyRows::span(row..=self.last_row())
    }

    /// Append the whole of `row` to `row - 1` and remove `row`.
    ///
    /// The row that used to be last on screen is dirtied too, so the
    /// repaint blanks it.
    pub fn merge_with_previous(&mut self, row: usize) -> DirtyRows {
        if row == 0 || row >= self.lines.len() {
            tracing::warn!(
                "merge_with_previous called with row {} ({} lines)",
                row,
                self.lines.len()
            );
            return DirtyRows::new();
        }
        let old_last = self.last_row();
        let removed = self.lines.remove(row);
        self.lines[row - 1].extend_from_slice(&removed);
        DirtyRows::span(row - 1..=old_last)
    }

    /// Insert an empty line at `row + 1`.
    pub fn insert_blank_line_after(&mut self, row: usize) -> DirtyRows {
        if !self.has_row(row, "insert blank line") {
            return DirtyRows::new();
        }
        self.lines.insert(row + 1, Vec::new());
        DirtyRows::span(row..=self.last_row())
    }

    /// Remove `row` entirely. Removing the only line leaves one blank line.
    pub fn remove_line(&mut self, row: usize) -> DirtyRows {
        if !self.has_row(row, "remove") {
            return DirtyRows::new();
        }
        let old_last = self.last_row();
        self.lines.remove(row);
        if self.lines.is_empty() {
            self.lines.push(Vec::new());
        }
        DirtyRows::span(row..=old_last)
    }

    fn has_row(&self, row: usize, op: &str) -> bool {
        if row < self.lines.len() {
            return true;
        }
        tracing::warn!("{}: row {} past end ({} lines)", op, row, self.lines.len());
        false
    }
}
