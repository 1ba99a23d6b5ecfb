//! Property checks for name matching and pivot construction.

use proptest::prelude::*;

use ui::core::names::match_rows;
use ui::core::{DataTable, PivotTable, Row};

fn table_strategy() -> impl Strategy<Value = DataTable> {
    prop::collection::vec(("[A-Z]{1,6}", 1900i32..2030, 0u32..5000), 0..40).prop_map(|rows| {
        rows.into_iter()
            .map(|(name, year, freq)| Row::new(&name, year, freq))
            .collect()
    })
}

proptest! {
    #[test]
    fn matching_ignores_case_and_padding(
        table in table_strategy(),
        name in "[A-Za-z]{1,6}",
        left in "[ \t]{0,3}",
        right in "[ \t]{0,3}",
    ) {
        let canonical = match_rows(&table, &name.to_uppercase());
        let padded = format!("{left}{}{right}", name.to_lowercase());
        prop_assert_eq!(match_rows(&table, &padded), canonical);
    }

    #[test]
    fn pivot_rows_do_not_depend_on_selection_order(
        table in table_strategy(),
        names in prop::collection::btree_set("[A-Z]{1,6}", 0..5),
    ) {
        let forward: Vec<String> = names.iter().cloned().collect();
        let mut backward = forward.clone();
        backward.reverse();

        let a = PivotTable::recompute(&forward, &table);
        let b = PivotTable::recompute(&backward, &table);

        prop_assert_eq!(a.years().collect::<Vec<_>>(), b.years().collect::<Vec<_>>());
        for name in &forward {
            for year in a.years() {
                prop_assert_eq!(a.value(year, name), b.value(year, name));
            }
        }
    }

    #[test]
    fn pivot_years_are_strictly_ascending(
        table in table_strategy(),
        names in prop::collection::vec("[A-Z]{1,6}", 0..5),
    ) {
        let pivot = PivotTable::recompute(&names, &table);
        let years: Vec<i32> = pivot.years().collect();
        prop_assert!(years.windows(2).all(|w| w[0] < w[1]));
        for row in pivot.rows() {
            prop_assert_eq!(row.cells.len(), names.len());
        }
    }
}
