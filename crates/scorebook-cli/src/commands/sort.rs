//! The `scorebook sort` command.

use std::path::PathBuf;

use anyhow::Result;

use scorebook_core::config::{load_config_from, OutputFormat};

pub fn execute(
    file: Option<PathBuf>,
    format: Option<OutputFormat>,
    undo: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let path = super::resolve_file(file, &config)?;
    let format = format.unwrap_or(config.format);

    let mut store = super::load_store(&path)?;

    let status = store.sort_ascending();
    // Status lines go to stderr when stdout carries JSON.
    announce(format, &status.to_string());
    println!("{}", super::render(&store, format, Some(&path))?);

    if undo {
        let status = store.undo_sort();
        announce(format, &status.to_string());
        println!("{}", super::render(&store, format, Some(&path))?);
    }

    Ok(())
}

fn announce(format: OutputFormat, message: &str) {
    match format {
        OutputFormat::Json => eprintln!("{message}"),
        OutputFormat::Text | OutputFormat::Table => println!("{message}"),
    }
}
