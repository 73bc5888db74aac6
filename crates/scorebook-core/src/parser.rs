//! Fixed-stride score file parser.
//!
//! A score file is a flat list of lines grouped in fours:
//!
//! ```text
//! <class name>
//! <ignored>
//! <ignored>
//! <score>
//! ```
//!
//! The two middle lines carry no meaning for scorebook and are skipped.

use std::path::Path;

use crate::error::{Result, StoreError};
use crate::model::{ScoreTable, SkippedRecord};

/// Number of lines making up one record.
pub const GROUP_SIZE: usize = 4;

const NAME_OFFSET: usize = 0;
const SCORE_OFFSET: usize = 3;

/// Records parsed from a score file, plus the groups that had to be skipped.
#[derive(Debug, Clone, Default)]
pub struct ParsedRecords {
    pub table: ScoreTable,
    pub skipped: Vec<SkippedRecord>,
}

/// Read a score file fully into memory.
///
/// Invalid UTF-8 is decoded lossily. Any failure to open or read the file is
/// reported as [`StoreError::NotFound`].
pub fn read_score_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| StoreError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!(
                "{} is not valid UTF-8, decoding lossily",
                path.display()
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Parse score file contents.
///
/// Groups whose score line is not a base-10 integer are skipped and listed in
/// [`ParsedRecords::skipped`]. A trailing group with fewer than four lines is
/// dropped without being reported.
pub fn parse_records(text: &str) -> ParsedRecords {
    let lines = split_lines(text);
    let mut parsed = ParsedRecords::default();

    for (group_no, group) in lines.chunks(GROUP_SIZE).enumerate() {
        let start = group_no * GROUP_SIZE;

        if group.len() < GROUP_SIZE {
            tracing::debug!(
                "dropping truncated group of {} line(s) at line {}",
                group.len(),
                start + 1
            );
            continue;
        }

        let name = group[NAME_OFFSET].trim();
        let raw_score = group[SCORE_OFFSET].trim();

        match parse_score(raw_score) {
            Some(score) => {
                parsed.table.insert(name, score);
            }
            None => {
                let skipped = SkippedRecord {
                    name: name.to_string(),
                    line: start + SCORE_OFFSET + 1,
                    raw_score: raw_score.to_string(),
                };
                tracing::warn!("{skipped}");
                parsed.skipped.push(skipped);
            }
        }
    }

    parsed
}

/// Split on `\n`, `\r\n` or a bare `\r`. A final terminator does not start
/// an extra empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(['\r', '\n']) {
        lines.push(&rest[..pos]);
        let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + skip..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

/// Parse a trimmed score line. Accepts an optional sign followed by decimal digits.
fn parse_score(s: &str) -> Option<i64> {
    s.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(parsed: &ParsedRecords) -> Vec<&str> {
        parsed.table.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn parse_two_records() {
        let parsed = parse_records("Math\nA\nB\n90\nScience\nA\nB\n75\n");
        assert_eq!(names(&parsed), vec!["Math", "Science"]);
        assert_eq!(parsed.table.get("Math"), Some(90));
        assert_eq!(parsed.table.get("Science"), Some(75));
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn middle_lines_are_ignored() {
        let parsed = parse_records("Math\n42\nnot a number\n90\n");
        assert_eq!(parsed.table.get("Math"), Some(90));
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn bad_score_skips_only_that_record() {
        let text = "Math\nA\nB\n90\nArt\nA\nB\nninety\nScience\nA\nB\n75";
        let parsed = parse_records(text);
        assert_eq!(names(&parsed), vec!["Math", "Science"]);
        assert_eq!(
            parsed.skipped,
            vec![SkippedRecord {
                name: "Art".into(),
                line: 8,
                raw_score: "ninety".into(),
            }]
        );
    }

    #[test]
    fn truncated_trailing_group_is_silent() {
        let parsed = parse_records("Math\nA\nB\n90\nScience\nA\nB");
        assert_eq!(names(&parsed), vec!["Math"]);
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn whitespace_and_crlf_are_trimmed() {
        let parsed = parse_records("  Math  \r\nA\r\nB\r\n  -7 \r\n");
        assert_eq!(parsed.table.get("Math"), Some(-7));
    }

    #[test]
    fn bare_carriage_returns_end_lines() {
        let parsed = parse_records("Math\rA\rB\r90\rScience\rA\rB\r75\r");
        assert_eq!(names(&parsed), vec!["Math", "Science"]);
        assert_eq!(parsed.table.get("Science"), Some(75));
    }

    #[test]
    fn mixed_line_endings() {
        let parsed = parse_records("Math\r\nA\rB\n90\r\nArt\nA\nB\n\r");
        assert_eq!(parsed.table.get("Math"), Some(90));
        // "\n\r" is two line ends, so Art's score line is empty.
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].name, "Art");
    }

    #[test]
    fn split_lines_matches_lines_without_cr() {
        let text = "a\n\nb\nc";
        assert_eq!(split_lines(text), text.lines().collect::<Vec<_>>());
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn score_beyond_i64_is_skipped() {
        let parsed = parse_records("Big\nA\nB\n99999999999999999999\nMath\nA\nB\n90\n");
        assert_eq!(parsed.table.get("Big"), None);
        assert_eq!(parsed.table.get("Math"), Some(90));
        assert_eq!(parsed.skipped[0].raw_score, "99999999999999999999");
    }

    #[test]
    fn explicit_plus_sign_is_accepted() {
        let parsed = parse_records("Math\nA\nB\n+12\n");
        assert_eq!(parsed.table.get("Math"), Some(12));
    }

    #[test]
    fn fractional_and_empty_scores_are_skipped() {
        let parsed = parse_records("Math\nA\nB\n9.5\nArt\nA\nB\n\n");
        assert!(parsed.table.is_empty());
        assert_eq!(parsed.skipped.len(), 2);
        assert_eq!(parsed.skipped[1].raw_score, "");
    }

    #[test]
    fn duplicate_name_overwrites_in_place() {
        let parsed = parse_records("Math\nA\nB\n90\nArt\nA\nB\n60\nMath\nA\nB\n30\n");
        assert_eq!(names(&parsed), vec!["Math", "Art"]);
        assert_eq!(parsed.table.get("Math"), Some(30));
    }

    #[test]
    fn empty_input() {
        let parsed = parse_records("");
        assert!(parsed.table.is_empty());
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_score_file(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert!(err.is_missing());
    }

    #[test]
    fn read_invalid_utf8_is_lossy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, b"Caf\xe9\nA\nB\n10\n").unwrap();

        let text = read_score_file(&path).unwrap();
        let parsed = parse_records(&text);
        assert_eq!(parsed.table.get("Caf\u{FFFD}"), Some(10));
    }
}
