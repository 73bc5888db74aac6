//! Core data model types for scorebook.
//!
//! Records, the insertion-ordered score table, and the status values the
//! store hands back to its caller.

use std::collections::HashMap;
use std::fmt;

/// One (class name, score) pair sourced from a four-line block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Class name, trimmed.
    pub name: String,
    /// Parsed score.
    pub score: i64,
}

impl Record {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class: {} | Score: {}", self.name, self.score)
    }
}

/// Insertion-ordered mapping of class name to score.
///
/// Inserting an existing name updates its score in place; the entry keeps
/// the position of its first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `name`. Returns the previous score, if any.
    pub fn insert(&mut self, name: impl Into<String>, score: i64) -> Option<i64> {
        let name = name.into();
        if let Some(&pos) = self.index.get(&name) {
            let previous = self.records[pos].score;
            self.records[pos].score = score;
            return Some(previous);
        }
        self.index.insert(name.clone(), self.records.len());
        self.records.push(Record { name, score });
        None
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.index.get(name).map(|&pos| self.records[pos].score)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Reorder entries by ascending score. Equal scores keep their relative order.
    pub fn sort_by_score(&mut self) {
        // `sort_by_key` is stable.
        self.records.sort_by_key(|r| r.score);
        self.reindex();
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (pos, record) in self.records.iter().enumerate() {
            self.index.insert(record.name.clone(), pos);
        }
    }
}

impl FromIterator<Record> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut table = ScoreTable::new();
        for record in iter {
            table.insert(record.name, record.score);
        }
        table
    }
}

impl<'a> IntoIterator for &'a ScoreTable {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// A record whose score line could not be parsed as an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Class name from the first line of the group.
    pub name: String,
    /// 1-based line number of the score line.
    pub line: usize,
    /// The score line as it appeared, trimmed.
    pub raw_score: String,
}

impl fmt::Display for SkippedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not convert score for {} (line {}: {:?})",
            self.name, self.line, self.raw_score
        )
    }
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of distinct classes now held by the store.
    pub loaded: usize,
    /// Records dropped because their score did not parse.
    pub skipped: Vec<SkippedRecord>,
}

impl LoadReport {
    pub fn has_warnings(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Whether the store currently holds a pre-sort snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Unsorted,
    Sorted,
}

impl fmt::Display for StoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreState::Unsorted => write!(f, "unsorted"),
            StoreState::Sorted => write!(f, "sorted"),
        }
    }
}

/// Result of [`ScoreStore::sort_ascending`](crate::store::ScoreStore::sort_ascending).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStatus {
    Sorted,
    AlreadySorted,
}

impl fmt::Display for SortStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortStatus::Sorted => write!(f, "Finished sorting."),
            SortStatus::AlreadySorted => write!(f, "Data is already sorted."),
        }
    }
}

/// Result of [`ScoreStore::undo_sort`](crate::store::ScoreStore::undo_sort).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoStatus {
    UndoComplete,
    NothingToUndo,
}

impl fmt::Display for UndoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndoStatus::UndoComplete => write!(f, "Undo sort complete."),
            UndoStatus::NothingToUndo => write!(f, "Data sort already undone."),
        }
    }
}
