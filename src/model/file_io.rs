//! Whole-document load and save.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::line_buffer::LineBuffer;
use crate::error::EditorError;

impl LineBuffer {
    /// Load a buffer from a file, one line per `\n`-terminated record.
    ///
    /// A trailing `\r` on a record is dropped and an unterminated final record
    /// still counts as a line. An empty file gives a single blank line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, EditorError> {
        let path = path.as_ref();
        let contents = std::fs::read(path).map_err(|e| EditorError::file_open(path, e))?;
        let buffer = Self::from_bytes(&contents);
        tracing::info!(
            "Loaded {} ({} bytes, {} lines)",
            path.display(),
            contents.len(),
            buffer.line_count()
        );
        Ok(buffer)
    }

    /// Parse raw file bytes into lines
    pub fn from_bytes(contents: &[u8]) -> Self {
        if contents.is_empty() {
            return Self::new();
        }
        let body = contents.strip_suffix(b"\n").unwrap_or(contents);
        Self::from_lines(body.split(|b| *b == b'\n').map(|record| {
            record
                .strip_suffix(b"\r")
                .unwrap_or(record)
                .to_vec()
        }))
    }

    /// Write every line followed by `\n`.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), EditorError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| EditorError::file_open(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| EditorError::file_open(path, e))?;
        tracing::info!("Saved {} ({} lines)", path.display(), self.line_count());
        Ok(())
    }

    /// Serialize in the on-disk format
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for line in self.lines() {
            out.write_all(line)?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}
