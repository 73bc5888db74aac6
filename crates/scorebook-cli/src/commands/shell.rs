//! The `scorebook shell` command.
//!
//! A line-oriented session with the same actions as a score viewer window:
//! load a file, show it, sort it, undo the sort.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use scorebook_core::config::{load_config_from, OutputFormat};
use scorebook_core::ScoreStore;

const HELP: &str = "\
Commands:
  load <path>   load a score file
  show          print the scores
  sort          sort by ascending score
  undo          undo the sort
  table         print the scores as a table
  json          print the scores as JSON
  help          show this message
  quit          leave the shell";

pub fn execute(file: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let mut session = Session::new(config.format);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut out = io::stdout().lock();

    if let Some(path) = file.or(config.default_file) {
        session.load(&path, &mut out)?;
    }

    run(&mut session, stdin.lock(), &mut out, interactive)
}

/// Read commands from `input` until `quit` or end of input.
fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    interactive: bool,
) -> Result<()> {
    if interactive {
        writeln!(out, "scorebook shell. Type `help` for commands.")?;
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else { break };
        let line = line?;

        match Command::parse(&line) {
            Command::Empty => {}
            Command::Quit => break,
            command => session.dispatch(command, out)?,
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Load(&'a str),
    Show,
    Sort,
    Undo,
    Print(OutputFormat),
    Help,
    Quit,
    Empty,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" => Command::Empty,
            "load" => Command::Load(rest),
            "show" => Command::Show,
            "sort" => Command::Sort,
            "undo" => Command::Undo,
            "table" => Command::Print(OutputFormat::Table),
            "json" => Command::Print(OutputFormat::Json),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(word),
        }
    }
}

/// Shell state: the loaded store, if any, and where it came from.
struct Session {
    store: Option<ScoreStore>,
    source: Option<PathBuf>,
    format: OutputFormat,
}

impl Session {
    fn new(format: OutputFormat) -> Self {
        Self {
            store: None,
            source: None,
            format,
        }
    }

    fn dispatch<W: Write>(&mut self, command: Command<'_>, out: &mut W) -> Result<()> {
        match command {
            Command::Load("") => writeln!(out, "Usage: load <path>")?,
            Command::Load(path) => self.load(Path::new(path), out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Unknown(word) => {
                writeln!(out, "Unknown command: {word}. Type `help` for commands.")?
            }
            Command::Show => self.show(self.format, out)?,
            Command::Print(format) => self.show(format, out)?,
            Command::Sort => {
                let Some(store) = self.store.as_mut() else {
                    return no_file(out);
                };
                let status = store.sort_ascending();
                writeln!(out, "{status}")?;
                self.show(self.format, out)?;
            }
            Command::Undo => {
                let Some(store) = self.store.as_mut() else {
                    return no_file(out);
                };
                let status = store.undo_sort();
                writeln!(out, "{status}")?;
                self.show(self.format, out)?;
            }
            Command::Quit | Command::Empty => {}
        }
        Ok(())
    }

    /// Load `path`. A failed load is reported and keeps the current store.
    fn load<W: Write>(&mut self, path: &Path, out: &mut W) -> Result<()> {
        let mut store = self.store.take().unwrap_or_default();
        let result = store.load(path);
        let had_store = self.source.is_some();

        match result {
            Ok(report) => {
                self.store = Some(store);
                self.source = Some(path.to_path_buf());
                writeln!(out, "File '{}' loaded successfully.", path.display())?;
                for skipped in &report.skipped {
                    writeln!(out, "warning: {skipped}")?;
                }
                self.show(self.format, out)?;
            }
            Err(e) => {
                tracing::debug!("load failed: {e}");
                if had_store {
                    self.store = Some(store);
                }
                if e.is_missing() {
                    writeln!(out, "Error: File '{}' not found.", path.display())?;
                } else {
                    writeln!(out, "Error: File '{}' could not be read.", path.display())?;
                }
            }
        }
        Ok(())
    }

    fn show<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<()> {
        let Some(store) = self.store.as_ref() else {
            return no_file(out);
        };
        let rendered = super::render(store, format, self.source.as_deref())?;
        if !rendered.is_empty() {
            writeln!(out, "{rendered}")?;
        }
        Ok(())
    }
}

fn no_file<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "No file loaded.")?;
    Ok(())
}
