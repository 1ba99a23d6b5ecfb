//! Name normalisation and row matching.

use super::table::{DataTable, Row};

/// Canonical lookup key: surrounding whitespace stripped, Unicode uppercase.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// All rows of `table` whose name matches `query`, in table order.
///
/// A blank query matches nothing. An empty result means "not found"; callers
/// must not treat it as an error.
pub fn match_rows(table: &DataTable, query: &str) -> Vec<Row> {
    let key = normalize_name(query);
    if key.is_empty() {
        return Vec::new();
    }
    table
        .rows()
        .iter()
        .filter(|row| row.name() == key)
        .cloned()
        .collect()
}

/// Existence check that avoids cloning rows.
pub fn has_match(table: &DataTable, query: &str) -> bool {
    let key = normalize_name(query);
    !key.is_empty() && table.rows().iter().any(|row| row.name() == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DataTable {
        DataTable::new(vec![
            Row::new("ALICE", 2000, 10),
            Row::new("BOB", 2000, 5),
            Row::new("alice", 2001, 12),
            Row::new("Élodie", 2001, 8),
        ])
    }

    #[test]
    fn matching_ignores_case_and_whitespace() {
        let t = table();
        assert_eq!(match_rows(&t, " alice "), match_rows(&t, "ALICE"));
        assert_eq!(match_rows(&t, "Alice").len(), 2);
    }

    #[test]
    fn non_ascii_names_match_case_insensitively() {
        let t = table();
        let rows = match_rows(&t, "élodie");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].frequency(), 8);
    }

    #[test]
    fn blank_queries_match_nothing() {
        let t = DataTable::new(vec![Row::new("", 2000, 9)]);
        assert!(match_rows(&t, "").is_empty());
        assert!(match_rows(&t, "   ").is_empty());
        assert!(!has_match(&t, "  "));
    }

    #[test]
    fn unknown_name_is_empty_not_error() {
        assert!(match_rows(&table(), "Zed").is_empty());
        assert!(!has_match(&table(), "Zed"));
        assert!(has_match(&table(), "bob"));
    }
}
