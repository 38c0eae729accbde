//! Presentation: keeps the terminal grid in step with the buffer.

pub mod render_sync;

pub use render_sync::RenderSync;

/// Screen rows as text, trailing blanks trimmed
#[cfg(test)]
pub(crate) fn screen_rows(screen: &vt100::Screen) -> Vec<String> {
    let (rows, cols) = screen.size();
    (0..rows)
        .map(|row| {
            let mut text = String::new();
            for col in 0..cols {
                if let Some(cell) = screen.cell(row, col) {
                    let contents = cell.contents();
                    if contents.is_empty() {
                        text.push(' ');
                    } else {
                        text.push_str(&contents);
                    }
                }
            }
            text.trim_end().to_string()
        })
        .collect()
}
