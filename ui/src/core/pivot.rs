//! Year-indexed frequency grid across the selected names.

use std::collections::{BTreeSet, HashMap};

use super::names::match_rows;
use super::table::DataTable;

/// One year of the grid. `cells` line up with [`PivotTable::columns`];
/// `None` is a blank cell, distinct from a zero count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotRow {
    pub year: i32,
    pub cells: Vec<Option<u32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PivotTable {
    columns: Vec<String>,
    rows: Vec<PivotRow>,
}

impl PivotTable {
    /// Full recomputation; O(names × rows).
    pub fn recompute<S: AsRef<str>>(names: &[S], table: &DataTable) -> Self {
        let mut years = BTreeSet::new();
        let mut per_name: Vec<HashMap<i32, u32>> = Vec::with_capacity(names.len());

        for name in names {
            let mut by_year = HashMap::new();
            for row in match_rows(table, name.as_ref()) {
                years.insert(row.year());
                // First row for a year wins.
                by_year.entry(row.year()).or_insert(row.frequency());
            }
            per_name.push(by_year);
        }

        let rows = years
            .into_iter()
            .map(|year| PivotRow {
                year,
                cells: per_name
                    .iter()
                    .map(|by_year| by_year.get(&year).copied())
                    .collect(),
            })
            .collect();

        Self {
            columns: names.iter().map(|n| n.as_ref().to_string()).collect(),
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[PivotRow] {
        &self.rows
    }

    /// No year rows to show (no selected name matched anything).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, year: i32) -> Option<&PivotRow> {
        self.rows
            .binary_search_by_key(&year, |r| r.year)
            .ok()
            .map(|idx| &self.rows[idx])
    }

    /// Frequency for `name` in `year`; `None` for blank or unknown.
    pub fn value(&self, year: i32, name: &str) -> Option<u32> {
        let col = self.columns.iter().position(|c| c == name)?;
        self.row(year)?.cells.get(col).copied().flatten()
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.rows.iter().map(|r| r.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::Row;

    fn table() -> DataTable {
        DataTable::new(vec![
            Row::new("ALICE", 2000, 10),
            Row::new("ALICE", 2001, 12),
            Row::new("BOB", 2000, 5),
        ])
    }

    #[test]
    fn alice_and_bob_grid() {
        let pivot = PivotTable::recompute(&["Alice", "Bob"], &table());
        assert_eq!(pivot.columns(), ["Alice".to_string(), "Bob".to_string()]);
        assert_eq!(
            pivot.rows(),
            [
                PivotRow {
                    year: 2000,
                    cells: vec![Some(10), Some(5)],
                },
                PivotRow {
                    year: 2001,
                    cells: vec![Some(12), None],
                },
            ]
        );
        assert_eq!(pivot.value(2001, "Bob"), None);
        assert_eq!(pivot.value(2000, "Bob"), Some(5));
    }

    #[test]
    fn unmatched_name_is_an_all_blank_column() {
        let pivot = PivotTable::recompute(&["Alice", "Zed"], &table());
        assert_eq!(pivot.columns().len(), 2);
        assert!(pivot.rows().iter().all(|r| r.cells[1].is_none()));
    }

    #[test]
    fn first_row_for_a_year_wins() {
        let t = DataTable::new(vec![Row::new("ALICE", 2000, 10), Row::new("ALICE", 2000, 99)]);
        let pivot = PivotTable::recompute(&["alice"], &t);
        assert_eq!(pivot.value(2000, "alice"), Some(10));
        assert_eq!(pivot.rows().len(), 1);
    }

    #[test]
    fn empty_selection_has_no_rows() {
        let pivot = PivotTable::recompute::<&str>(&[], &table());
        assert!(pivot.is_empty());
        assert!(pivot.columns().is_empty());
    }
}
