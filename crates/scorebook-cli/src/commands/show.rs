//! The `scorebook show` command.

use std::path::PathBuf;

use anyhow::Result;

use scorebook_core::config::{load_config_from, OutputFormat};
use scorebook_report::{export, write_json};

pub fn execute(
    file: Option<PathBuf>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let path = super::resolve_file(file, &config)?;
    let format = format.unwrap_or(config.format);

    let store = super::load_store(&path)?;
    println!("{}", super::render(&store, format, Some(&path))?);

    if let Some(output) = output {
        write_json(&export(&store, Some(&path)), &output)?;
        eprintln!("Wrote {}", output.display());
    }

    Ok(())
}
