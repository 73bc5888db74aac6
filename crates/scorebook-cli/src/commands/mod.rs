pub mod init;
pub mod shell;
pub mod show;
pub mod sort;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use scorebook_core::config::{OutputFormat, ScorebookConfig};
use scorebook_core::{LoadReport, ScoreStore};
use scorebook_report::{export, json::to_json_string, render_table};

/// Pick the score file: the `--file` flag wins over the configured default.
fn resolve_file(file: Option<PathBuf>, config: &ScorebookConfig) -> Result<PathBuf> {
    file.or_else(|| config.default_file.clone()).context(
        "no input file given (pass --file or set default_file in scorebook.toml)",
    )
}

/// Load a score file, printing skipped records to stderr.
fn load_store(path: &Path) -> Result<ScoreStore> {
    let (store, report) = ScoreStore::from_path(path)
        .with_context(|| format!("failed to load score file {}", path.display()))?;
    print_warnings(&report);
    Ok(store)
}

fn print_warnings(report: &LoadReport) {
    for skipped in &report.skipped {
        eprintln!("warning: {skipped}");
    }
}

fn render(store: &ScoreStore, format: OutputFormat, source: Option<&Path>) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(store.render()),
        OutputFormat::Table => Ok(render_table(store)),
        OutputFormat::Json => to_json_string(&export(store, source)),
    }
}
