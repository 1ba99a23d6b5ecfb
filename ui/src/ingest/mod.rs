//! CSV ingestion: header alias resolution and row extraction.

mod header;
mod reader;

pub use header::{ColumnMap, NAME_ALIASES, YEAR_ALIASES, FREQUENCY_ALIASES};
pub use reader::{parse_table, IngestReport};
