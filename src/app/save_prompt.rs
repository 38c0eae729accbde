//! Line-mode questions asked after the terminal has been restored.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::{EditorError, TerminalIoKind, TerminalResultExt};
use crate::model::LineBuffer;

pub const SAVE_QUESTION: &str = "Save modified buffer? (y/n): ";
pub const INVALID_ANSWER: &str = "Invalid input. Please enter 'y' for yes or 'n' for no.\n";
pub const FILENAME_QUESTION: &str = "Filename to write: ";

/// Ask `question` until the answer starts with y or n (any case).
///
/// End of input counts as "no".
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<bool, EditorError> {
    loop {
        ask(output, question)?;

        let Some(answer) = read_answer(input)? else {
            tracing::info!("Input closed while asking {:?}, treating as no", question);
            return Ok(false);
        };

        match answer.trim_start().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => ask(output, INVALID_ANSWER)?,
        }
    }
}

/// Ask for a file name. `None` if input closed before a non-empty answer.
pub fn ask_filename<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<String>, EditorError> {
    loop {
        ask(output, FILENAME_QUESTION)?;
        match read_answer(input)? {
            None => return Ok(None),
            Some(name) if name.trim().is_empty() => continue,
            Some(name) => return Ok(Some(name.trim().to_string())),
        }
    }
}

/// Relative names are taken from `base`; absolute ones are kept.
pub fn resolve_path(base: &Path, name: impl AsRef<Path>) -> PathBuf {
    base.join(name)
}

/// The whole end-of-session flow: confirm, pick a path, write the file.
///
/// Returns the path written, or `None` if the user declined.
pub fn offer_save<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    buffer: &LineBuffer,
    file: Option<&Path>,
    base: &Path,
) -> Result<Option<PathBuf>, EditorError> {
    if !confirm(input, output, SAVE_QUESTION)? {
        tracing::info!("Save declined");
        return Ok(None);
    }

    let path = match file {
        Some(file) => resolve_path(base, file),
        None => match ask_filename(input, output)? {
            Some(name) => resolve_path(base, name),
            None => {
                tracing::info!("No filename given, nothing saved");
                return Ok(None);
            }
        },
    };

    buffer.save_to_file(&path)?;
    Ok(Some(path))
}

fn ask<W: Write>(output: &mut W, text: &str) -> Result<(), EditorError> {
    output
        .write_all(text.as_bytes())
        .and_then(|()| output.flush())
        .terminal(TerminalIoKind::WriteOutput)
}

fn read_answer<R: BufRead>(input: &mut R) -> Result<Option<String>, EditorError> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .terminal(TerminalIoKind::ReadInput)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
