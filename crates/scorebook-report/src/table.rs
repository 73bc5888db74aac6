//! Terminal table output.

use comfy_table::{Cell, CellAlignment, Table};

use scorebook_core::ScoreStore;

/// Render the store as a two-column table, rows in current order.
pub fn render_table(store: &ScoreStore) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Class", "Score"]);

    for record in store.records() {
        table.add_row(vec![
            Cell::new(&record.name),
            Cell::new(record.score).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorebook_core::Record;

    #[test]
    fn table_lists_rows_in_current_order() {
        let mut store =
            ScoreStore::from_records(vec![Record::new("Math", 90), Record::new("Science", 75)]);

        let unsorted = render_table(&store);
        assert!(unsorted.contains("Class"));
        assert!(unsorted.contains("Score"));
        let math = unsorted.find("Math").unwrap();
        let science = unsorted.find("Science").unwrap();
        assert!(math < science);

        store.sort_ascending();
        let sorted = render_table(&store);
        assert!(sorted.find("Science").unwrap() < sorted.find("Math").unwrap());
    }

    #[test]
    fn empty_store_has_header_only() {
        let table = render_table(&ScoreStore::new());
        assert!(table.contains("Class"));
        assert!(!table.contains("Math"));
    }
}
