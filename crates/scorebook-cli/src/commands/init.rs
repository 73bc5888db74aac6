//! The `scorebook init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("scorebook.toml"), SAMPLE_CONFIG)?;
    write_if_missing(Path::new("reports.txt"), SAMPLE_REPORTS)?;

    println!("\nNext steps:");
    println!("  1. Run: scorebook show");
    println!("  2. Run: scorebook sort --undo");
    println!("  3. Run: scorebook shell");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# scorebook configuration

# Score file used when --file is not given.
default_file = "reports.txt"

# Output format: "text", "table" or "json".
format = "text"
"#;

// Four lines per class: name, two unused lines, score.
const SAMPLE_REPORTS: &str = "\
Math
Room 101
Mr. Hale
90
Science
Lab 2
Ms. Ortiz
75
History
Room 204
Mr. Banks
82
Art
Studio
Ms. Lee
75
";
