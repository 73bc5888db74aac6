//! scorebook CLI — load, show, sort and undo class score files.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use scorebook_core::config::OutputFormat;

mod commands;

#[derive(Parser)]
#[command(
    name = "scorebook",
    version,
    about = "Show and sort class scores from four-line score files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the scores in file order
    Show {
        /// Score file (defaults to `default_file` from the config)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output format: text, table, json
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Also write a JSON export to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the scores sorted by ascending score
    Sort {
        /// Score file (defaults to `default_file` from the config)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output format: text, table, json
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Undo the sort afterwards and print the restored order
        #[arg(long)]
        undo: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Interactive session: load, show, sort, undo
    Shell {
        /// Score file to load on start
        #[arg(long)]
        file: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and sample score file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            // RUST_LOG, when set, replaces the default entirely.
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("scorebook=error")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show {
            file,
            format,
            output,
            config,
        } => commands::show::execute(file, format, output, config),
        Commands::Sort {
            file,
            format,
            undo,
            config,
        } => commands::sort::execute(file, format, undo, config),
        Commands::Shell { file, config } => commands::shell::execute(file, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
