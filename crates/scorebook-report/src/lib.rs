//! scorebook-report — Alternate renderings of a score store.
//!
//! The plain `Class: … | Score: …` listing lives on
//! [`ScoreStore::render`](scorebook_core::ScoreStore::render); this crate adds
//! a terminal table and a JSON export.

pub mod json;
pub mod table;

pub use json::{export, write_json, ScoreExport};
pub use table::render_table;
