use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use linepad::app::{save_prompt, EditEngine};
use linepad::config::{Config, DirectoryContext};
use linepad::input::TerminalIntentSource;
use linepad::model::LineBuffer;
use linepad::services::{tracing_setup, TerminalSession};
use linepad::view::RenderSync;
use linepad::EditorError;

/// A minimal line-oriented terminal text editor
#[derive(Parser, Debug)]
#[command(name = "linepad")]
#[command(about = "A minimal line-oriented terminal text editor", long_about = None)]
#[command(version)]
struct Args {
    /// File to open (resolved against the current directory)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Path to a config file to use instead of the default one
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to the log file (default: data directory)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

impl Args {
    fn file(&self) -> Result<Option<&Path>, EditorError> {
        match self.files.as_slice() {
            [] => Ok(None),
            [file] => Ok(Some(file.as_path())),
            _ => Err(EditorError::CommandLineArguments(
                "expected at most one FILE\n\nUsage: linepad [OPTIONS] [FILE]".to_string(),
            )),
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Exiting with error: {}", err);
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Parse the command line. `None` means help or version was printed.
fn parse_args<I, T>(args: I) -> Result<Option<Args>, EditorError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) => Ok(Some(args)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            Ok(None)
        }
        Err(e) => Err(EditorError::CommandLineArguments(
            e.render().to_string().trim_end().to_string(),
        )),
    }
}

fn run() -> Result<(), EditorError> {
    let Some(args) = parse_args(std::env::args_os())? else {
        return Ok(());
    };
    let file = args.file()?;

    let dir_context = match DirectoryContext::from_system() {
        Ok(dir_context) => Some(dir_context),
        Err(e) => {
            eprintln!("Warning: {e}, using default settings");
            None
        }
    };

    let config = match (&args.config, &dir_context) {
        (Some(path), _) => Config::load_from_file(path)?,
        (None, Some(dir_context)) => Config::load_or_default(dir_context),
        (None, None) => Config::default(),
    };

    if args.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let log_path = args
        .log_file
        .clone()
        .or_else(|| config.log_file.clone())
        .or_else(|| dir_context.as_ref().map(DirectoryContext::log_path));
    if let Some(log_path) = log_path {
        if let Err(e) = tracing_setup::init_global(&log_path) {
            eprintln!("Warning: logging disabled: {e:#}");
        }
    }

    let base = std::env::current_dir().map_err(|e| EditorError::file_open(".", e))?;
    let buffer = match file {
        Some(file) => LineBuffer::load_from_file(save_prompt::resolve_path(&base, file))?,
        None => LineBuffer::new(),
    };

    let mut engine = EditEngine::new(buffer, config.editor);
    {
        let session = TerminalSession::enter()?;
        let (width, height) = session.size()?;
        let mut render = RenderSync::new(io::stdout(), width, height);
        let mut source = TerminalIntentSource::default();

        engine.run(&mut source, &mut render)?;
        render.clear_screen()?;
    }

    let buffer = engine.into_buffer();
    if let Some(path) =
        save_prompt::offer_save(&mut io::stdin().lock(), &mut io::stdout(), &buffer, file, &base)?
    {
        tracing::info!("Saved {} lines to {}", buffer.line_count(), path.display());
    }

    Ok(())
}
