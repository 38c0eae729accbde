//! Document model: lines, the cursor over them, and the dirty-row sets edits
//! produce.

pub mod cursor;
pub mod dirty_rows;
pub mod file_io;
pub mod line_buffer;

pub use cursor::Cursor;
pub use dirty_rows::DirtyRows;
pub use line_buffer::LineBuffer;
