//! scorebook-core — Score file parsing and the sortable score store.
//!
//! This crate reads four-line-per-record score files into an
//! insertion-ordered table and wraps it in [`ScoreStore`], which supports
//! sorting by score with a single level of undo.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod store;

pub use error::StoreError;
pub use model::{LoadReport, Record, SkippedRecord, SortStatus, StoreState, UndoStatus};
pub use store::ScoreStore;
