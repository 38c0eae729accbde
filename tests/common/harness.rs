// EditorTestHarness - Virtual terminal environment for E2E testing

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use linepad::app::{Dispatch, EditEngine};
use linepad::config::{Config, EditorSettings};
use linepad::input::KeyTranslator;
use linepad::model::{Cursor, DirtyRows, LineBuffer};
use linepad::view::render_sync::display_byte;
use linepad::view::RenderSync;
use linepad::EditorError;
use std::io::{self, Write};
use std::path::Path;
use tempfile::TempDir;

/// Captures RenderSync output for vt100 parsing
pub struct CaptureBuffer {
    data: Vec<u8>,
}

impl CaptureBuffer {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.data)
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Drives the edit engine with crossterm key events and checks what a real
/// terminal would show.
pub struct EditorTestHarness {
    engine: EditEngine,
    translator: KeyTranslator,
    render: RenderSync<CaptureBuffer>,

    /// Interprets the escape sequences the renderer emits
    vt100_parser: vt100::Parser,

    term_width: u16,
    term_height: u16,

    /// Set once Escape has been dispatched
    exited: bool,

    _temp_dir: TempDir,
}

impl EditorTestHarness {
    /// Empty buffer, default settings
    pub fn new(width: u16, height: u16) -> Result<Self, EditorError> {
        Self::with_buffer(width, height, LineBuffer::new(), Config::default().editor)
    }

    pub fn with_config(width: u16, height: u16, config: Config) -> Result<Self, EditorError> {
        Self::with_buffer(width, height, LineBuffer::new(), config.editor)
    }

    /// Buffer parsed from `content` as if it had been read from disk
    pub fn with_content(width: u16, height: u16, content: &str) -> Result<Self, EditorError> {
        Self::with_buffer(
            width,
            height,
            LineBuffer::from_bytes(content.as_bytes()),
            Config::default().editor,
        )
    }

    pub fn open_file(width: u16, height: u16, path: &Path) -> Result<Self, EditorError> {
        let buffer = LineBuffer::load_from_file(path)?;
        Self::with_buffer(width, height, buffer, Config::default().editor)
    }

    fn with_buffer(
        width: u16,
        height: u16,
        buffer: LineBuffer,
        settings: EditorSettings,
    ) -> Result<Self, EditorError> {
        let temp_dir = TempDir::new().map_err(|e| EditorError::file_open("tempdir", e))?;
        let mut harness = Self {
            engine: EditEngine::new(buffer, settings),
            translator: KeyTranslator::new(),
            render: RenderSync::new(CaptureBuffer::new(), width, height),
            vt100_parser: vt100::Parser::new(height, width, 0),
            term_width: width,
            term_height: height,
            exited: false,
            _temp_dir: temp_dir,
        };
        harness
            .render
            .render_all(harness.engine.buffer(), harness.engine.cursor())?;
        harness.sync_screen();
        Ok(harness)
    }

    /// Scratch directory that lives as long as the harness
    pub fn temp_dir(&self) -> &Path {
        self._temp_dir.path()
    }

    /// Send one key press through the translator and the engine
    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<(), EditorError> {
        let Some(intent) = self.translator.translate(&KeyEvent::new(code, modifiers)) else {
            return Ok(());
        };

        match self.engine.handle_intent(intent) {
            Dispatch::Exit => self.exited = true,
            Dispatch::Continue(dirty) => {
                let cursor = self.engine.cursor();
                self.render.redraw(&dirty, self.engine.buffer(), cursor)?;
                self.render
                    .redraw(&DirtyRows::single(cursor.row), self.engine.buffer(), cursor)?;
            }
        }
        self.sync_screen();
        Ok(())
    }

    /// Send the same key `count` times
    pub fn send_key_repeat(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        count: usize,
    ) -> Result<(), EditorError> {
        for _ in 0..count {
            self.send_key(code, modifiers)?;
        }
        Ok(())
    }

    /// Type text one character at a time; '\n' presses Enter
    pub fn type_text(&mut self, text: &str) -> Result<(), EditorError> {
        for ch in text.chars() {
            match ch {
                '\n' => self.send_key(KeyCode::Enter, KeyModifiers::NONE)?,
                c if c.is_ascii_uppercase() => self.send_key(KeyCode::Char(c), KeyModifiers::SHIFT)?,
                c => self.send_key(KeyCode::Char(c), KeyModifiers::NONE)?,
            }
        }
        Ok(())
    }

    fn sync_screen(&mut self) {
        let bytes = self.render.writer_mut().take();
        self.vt100_parser.process(&bytes);
    }

    pub fn buffer(&self) -> &LineBuffer {
        self.engine.buffer()
    }

    /// Buffer content with lines joined by '\n'
    pub fn get_buffer_content(&self) -> String {
        self.engine.buffer().to_strings().join("\n")
    }

    pub fn assert_buffer_content(&self, expected: &str) {
        assert_eq!(
            self.get_buffer_content(),
            expected,
            "Buffer content mismatch"
        );
    }

    /// Logical cursor as (row, col)
    pub fn cursor_position(&self) -> (usize, usize) {
        let Cursor { row, col } = self.engine.cursor();
        (row, col)
    }

    /// Where the emulated terminal left its caret, as (row, col)
    pub fn screen_cursor_position(&self) -> (u16, u16) {
        self.vt100_parser.screen().cursor_position()
    }

    pub fn is_cursor_visible(&self) -> bool {
        !self.vt100_parser.screen().hide_cursor()
    }

    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Text of one emulated screen row, trailing blanks trimmed
    pub fn screen_row(&self, row: u16) -> String {
        let screen = self.vt100_parser.screen();
        let mut result = String::new();
        for col in 0..self.term_width {
            match screen.cell(row, col) {
                Some(cell) if !cell.contents().is_empty() => result.push_str(&cell.contents()),
                _ => result.push(' '),
            }
        }
        result.trim_end().to_string()
    }

    /// The whole emulated screen, one line per row
    pub fn vt100_screen_to_string(&self) -> String {
        (0..self.term_height)
            .map(|row| self.screen_row(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.vt100_screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain '{}'\nScreen content:\n{}",
            text,
            screen
        );
    }

    /// Every visible row shows exactly its buffer line (or nothing)
    pub fn assert_screen_matches_buffer(&self) {
        let buffer = self.engine.buffer();
        for row in 0..self.term_height {
            let line = buffer.line(row as usize);
            let shown: Vec<u8> = line
                .iter()
                .take(self.term_width as usize)
                .map(|&byte| display_byte(byte))
                .collect();
            let expected = String::from_utf8_lossy(&shown).trim_end().to_string();
            assert_eq!(
                self.screen_row(row),
                expected,
                "Row {} differs from buffer\nScreen content:\n{}",
                row,
                self.vt100_screen_to_string()
            );
        }
    }

    /// The terminal caret sits on the logical cursor
    pub fn assert_caret_matches_cursor(&self) {
        let (row, col) = self.cursor_position();
        let expected = (
            row.min(self.term_height as usize - 1) as u16,
            col.min(self.term_width as usize - 1) as u16,
        );
        assert_eq!(self.screen_cursor_position(), expected);
        assert!(self.is_cursor_visible(), "cursor left hidden");
    }

    pub fn save_to(&self, path: &Path) -> Result<(), EditorError> {
        self.engine.buffer().save_to_file(path)
    }
}
