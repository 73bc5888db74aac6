//! JSON export of a score store.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use scorebook_core::ScoreStore;

/// A serializable snapshot of a store's current contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreExport {
    /// File the store was loaded from, if known.
    pub source: Option<PathBuf>,
    /// When the export was taken.
    pub exported_at: DateTime<Utc>,
    /// `"unsorted"` or `"sorted"`.
    pub state: String,
    /// Records in current display order.
    pub records: Vec<ExportedRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedRecord {
    pub name: String,
    pub score: i64,
}

/// Capture the store's current order and state.
pub fn export(store: &ScoreStore, source: Option<&Path>) -> ScoreExport {
    ScoreExport {
        source: source.map(Path::to_path_buf),
        exported_at: Utc::now(),
        state: store.state().to_string(),
        records: store
            .records()
            .map(|r| ExportedRecord {
                name: r.name.clone(),
                score: r.score,
            })
            .collect(),
    }
}

/// Pretty-printed JSON for the export.
pub fn to_json_string(export: &ScoreExport) -> Result<String> {
    serde_json::to_string_pretty(export).context("failed to serialize score export")
}

/// Write the export as pretty JSON, creating parent directories as needed.
pub fn write_json(export: &ScoreExport, path: &Path) -> Result<()> {
    let json = to_json_string(export)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write export to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorebook_core::Record;

    fn make_store() -> ScoreStore {
        ScoreStore::from_records(vec![Record::new("Math", 90), Record::new("Science", 75)])
    }

    #[test]
    fn export_follows_current_order_and_state() {
        let mut store = make_store();
        let before = export(&store, Some(Path::new("reports.txt")));
        assert_eq!(before.state, "unsorted");
        assert_eq!(before.records[0].name, "Math");
        assert_eq!(before.source, Some(PathBuf::from("reports.txt")));

        store.sort_ascending();
        let after = export(&store, None);
        assert_eq!(after.state, "sorted");
        assert_eq!(
            after.records,
            vec![
                ExportedRecord {
                    name: "Science".into(),
                    score: 75
                },
                ExportedRecord {
                    name: "Math".into(),
                    score: 90
                },
            ]
        );
    }

    #[test]
    fn json_string_has_expected_fields() {
        let json = to_json_string(&export(&make_store(), None)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["state"], "unsorted");
        assert_eq!(value["records"][1]["score"], 75);
        assert!(value["exported_at"].is_string());
        assert!(value["source"].is_null());
    }

    #[test]
    fn write_json_reports_unusable_parent() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = write_json(&export(&make_store(), None), &blocker.join("scores.json"))
            .unwrap_err();
        assert!(err.to_string().contains("failed to create directory"));
        assert!(err.to_string().contains("blocker"));
    }

    #[test]
    fn write_json_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("scores.json");

        write_json(&export(&make_store(), None), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: ScoreExport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.records.len(), 2);
    }
}
