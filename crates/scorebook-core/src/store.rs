//! The score store: a loaded score table with a one-level sort undo.
//!
//! The store is a two-state machine. `Unsorted` holds no snapshot; sorting
//! saves an owned copy of the current table and moves to `Sorted`; undoing
//! restores that copy and returns to `Unsorted`. Loading always resets to
//! `Unsorted`.

use std::path::Path;

use crate::error::Result;
use crate::model::{LoadReport, Record, ScoreTable, SortStatus, StoreState, UndoStatus};
use crate::parser::{parse_records, read_score_file};

/// Class scores loaded from a file, sortable with one level of undo.
#[derive(Debug, Clone, Default)]
pub struct ScoreStore {
    current: ScoreTable,
    snapshot: Option<ScoreTable>,
}

impl ScoreStore {
    /// Create an empty, unsorted store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store and load `path` into it.
    pub fn from_path(path: &Path) -> Result<(Self, LoadReport)> {
        let mut store = Self::new();
        let report = store.load(path)?;
        Ok((store, report))
    }

    /// Build an unsorted store from in-memory records. Later duplicates
    /// overwrite earlier ones.
    pub fn from_records<I: IntoIterator<Item = Record>>(records: I) -> Self {
        Self {
            current: records.into_iter().collect(),
            snapshot: None,
        }
    }

    /// Replace the store contents with the records in `path`.
    ///
    /// On error the store is left exactly as it was. Records whose score does
    /// not parse are skipped and listed in the returned report.
    pub fn load(&mut self, path: &Path) -> Result<LoadReport> {
        let text = read_score_file(path)?;
        let parsed = parse_records(&text);

        self.current = parsed.table;
        self.snapshot = None;

        let report = LoadReport {
            loaded: self.current.len(),
            skipped: parsed.skipped,
        };
        tracing::info!(
            "loaded {} record(s) from {} ({} skipped)",
            report.loaded,
            path.display(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// One `Class: <name> | Score: <score>` line per record, in current order.
    pub fn render(&self) -> String {
        self.current
            .iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Sort by ascending score, saving the current order for [`undo_sort`](Self::undo_sort).
    pub fn sort_ascending(&mut self) -> SortStatus {
        if self.snapshot.is_some() {
            return SortStatus::AlreadySorted;
        }
        self.snapshot = Some(self.current.clone());
        self.current.sort_by_score();
        tracing::debug!("sorted {} record(s)", self.current.len());
        SortStatus::Sorted
    }

    /// Restore the order saved by the last sort.
    pub fn undo_sort(&mut self) -> UndoStatus {
        match self.snapshot.take() {
            Some(saved) => {
                self.current = saved;
                tracing::debug!("restored pre-sort order");
                UndoStatus::UndoComplete
            }
            None => UndoStatus::NothingToUndo,
        }
    }

    pub fn state(&self) -> StoreState {
        if self.snapshot.is_some() {
            StoreState::Sorted
        } else {
            StoreState::Unsorted
        }
    }

    pub fn is_sorted(&self) -> bool {
        self.state() == StoreState::Sorted
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Records in current display order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.current.iter()
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.current.get(name)
    }
}
