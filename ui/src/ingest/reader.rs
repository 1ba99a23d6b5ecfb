//! Turns CSV text into a [`DataTable`].

use time::macros::format_description;
use time::Date;

use crate::core::error::Result;
use crate::core::table::{DataTable, Row};

use super::header::ColumnMap;

/// Outcome of parsing one CSV document.
#[derive(Debug, Clone)]
pub struct IngestReport {
    pub table: DataTable,
    /// Records dropped for blank or unparseable cells.
    pub skipped: usize,
}

/// Parses `text`. Records missing a name, year, or frequency are skipped;
/// a header without the required columns is an error.
pub fn parse_table(text: &str) -> Result<IngestReport> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let columns = ColumnMap::resolve(reader.headers()?.iter())?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        match parse_record(&record, columns) {
            Some(row) => rows.push(row),
            None => {
                skipped += 1;
                tracing::debug!(line = line + 2, "skipping malformed record");
            }
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, kept = rows.len(), "dropped malformed records");
    }

    Ok(IngestReport {
        table: DataTable::new(rows),
        skipped,
    })
}

fn parse_record(record: &csv::StringRecord, columns: ColumnMap) -> Option<Row> {
    let name = record.get(columns.name).filter(|v| !v.is_empty())?;
    let year = parse_year(record.get(columns.year)?)?;
    let frequency = parse_frequency(record.get(columns.frequency)?)?;
    Some(Row::new(name, year, frequency))
}

/// Accepts `2000`, `2000.0`, or an ISO date `2000-01-01`.
fn parse_year(raw: &str) -> Option<i32> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }
    if let Ok(date) = Date::parse(raw, format_description!("[year]-[month]-[day]")) {
        return Some(date.year());
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.fract() == 0.0)
        .map(|v| v as i32)
}

fn parse_frequency(raw: &str) -> Option<u32> {
    if raw.is_empty() {
        return None;
    }
    raw.replace(',', "").parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_headers() {
        let report = parse_table("Name,Year,Frequency\nALICE,2000,10\nBOB,2000,5\n").unwrap();
        assert_eq!(report.table.len(), 2);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.table.rows()[1].name(), "BOB");
    }

    #[test]
    fn blank_cells_drop_the_record() {
        let csv = "Name,Year,Frequency\nALICE,2000,10\n,2001,4\nBOB,,7\nCARA,2002,\n";
        let report = parse_table(csv).unwrap();
        assert_eq!(report.table.len(), 1);
        assert_eq!(report.skipped, 3);
    }

    #[test]
    fn short_records_are_skipped_not_fatal() {
        let csv = "Name,Year,Frequency\nALICE,2000\nBOB,2001,9\n";
        let report = parse_table(csv).unwrap();
        assert_eq!(report.table.len(), 1);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn year_variants() {
        assert_eq!(parse_year("1999"), Some(1999));
        assert_eq!(parse_year("1999-01-01"), Some(1999));
        assert_eq!(parse_year("1999.0"), Some(1999));
        assert_eq!(parse_year("n/a"), None);
    }

    #[test]
    fn quoted_frequencies_with_separators() {
        let report = parse_table("Name,Year,Frequency\nALICE,2000,\"1,204\"\n").unwrap();
        assert_eq!(report.table.rows()[0].frequency(), 1204);
    }
}
