//! In-memory name registration tables, one per dataset category.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::names::normalize_name;

/// One `(name, year, frequency)` registration record.
///
/// Names are normalised (trimmed, uppercased) on construction so lookups never
/// have to re-normalise the stored side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    name: String,
    year: i32,
    frequency: u32,
}

impl Row {
    pub fn new(name: &str, year: i32, frequency: u32) -> Self {
        Self {
            name: normalize_name(name),
            year,
            frequency,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }
}

/// Immutable, cheaply cloneable row store. Replaced wholesale on reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    rows: Arc<[Row]>,
}

impl DataTable {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows: rows.into() }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when both handles point at the same loaded snapshot.
    pub fn same_snapshot(&self, other: &DataTable) -> bool {
        Arc::ptr_eq(&self.rows, &other.rows)
    }
}

impl FromIterator<Row> for DataTable {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Selectable dataset. Each maps to one CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Canada,
    Usa,
    OntarioFemale,
    OntarioMale,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Canada,
        Category::Usa,
        Category::OntarioFemale,
        Category::OntarioMale,
    ];

    /// File name relative to the configured data source.
    pub fn file_name(self) -> &'static str {
        match self {
            Category::Canada => "canada_names.csv",
            Category::Usa => "usa_names.csv",
            Category::OntarioFemale => "ontario_female_names.csv",
            Category::OntarioMale => "ontario_male_names.csv",
        }
    }

    /// Stable identifier (also the serde representation).
    pub fn slug(self) -> &'static str {
        match self {
            Category::Canada => "canada",
            Category::Usa => "usa",
            Category::OntarioFemale => "ontario-female",
            Category::OntarioMale => "ontario-male",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Canada => "Canada",
            Category::Usa => "USA",
            Category::OntarioFemale => "Ontario (female)",
            Category::OntarioMale => "Ontario (male)",
        };
        f.write_str(label)
    }
}
