//! Header alias resolution for the bilingual dataset variants.

use crate::core::error::{LoadError, Result};

pub const NAME_ALIASES: &[&str] = &["name", "name/nom"];
pub const YEAR_ALIASES: &[&str] = &["year", "year/annee", "year/année"];
pub const FREQUENCY_ALIASES: &[&str] = &["frequency", "frequency/frequence", "frequency/fréquence"];

/// Column positions of the three required fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: usize,
    pub year: usize,
    pub frequency: usize,
}

impl ColumnMap {
    pub fn resolve<'a, I>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let normalized: Vec<String> = headers.into_iter().map(normalize_header).collect();

        Ok(Self {
            name: position_of(&normalized, NAME_ALIASES, "Name")?,
            year: position_of(&normalized, YEAR_ALIASES, "Year")?,
            frequency: position_of(&normalized, FREQUENCY_ALIASES, "Frequency")?,
        })
    }
}

fn position_of(headers: &[String], aliases: &[&str], column: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| aliases.iter().any(|alias| *alias == h.as_str()))
        .ok_or(LoadError::MissingColumn { column })
}

/// Trims, lowercases, and strips a UTF-8 byte-order mark.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_lowercase()
}
