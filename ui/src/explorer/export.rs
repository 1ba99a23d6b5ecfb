//! Pivot grid export as CSV: browser download on the web, the app data
//! directory on desktop.

use thiserror::Error;

use crate::core::pivot::PivotTable;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("export produced invalid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("{0}")]
    Platform(String),
}

/// `Year,<name>,...` header followed by one record per year. Blank cells stay
/// empty; counts are written without separators.
pub fn pivot_csv(pivot: &PivotTable) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["Year".to_string()];
    header.extend(pivot.columns().iter().cloned());
    writer.write_record(&header)?;

    for row in pivot.rows() {
        let mut record = vec![row.year.to_string()];
        record.extend(
            row.cells
                .iter()
                .map(|cell| cell.map(|v| v.to_string()).unwrap_or_default()),
        );
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Saves the pivot. Returns the written path on desktop, `None` when the
/// browser took over the download.
pub async fn export_pivot(pivot: PivotTable) -> Result<Option<String>, ExportError> {
    let csv = pivot_csv(&pivot)?;
    let filename = format!("nametrend-pivot-{}.csv", timestamp_slug());
    let delivery = download_bytes(&filename, "text/csv", csv.into_bytes()).await?;
    tracing::info!(
        %filename,
        names = pivot.columns().len(),
        years = pivot.rows().len(),
        "pivot exported"
    );
    Ok(delivery)
}

fn timestamp_slug() -> String {
    use time::{macros::format_description, OffsetDateTime};

    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let platform = |msg: &str| ExportError::Platform(msg.to_string());

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| platform("Failed to create blob"))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| platform("Unable to create download"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| platform("Document unavailable"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| platform("Unable to create anchor"))?
            .dyn_into()
            .map_err(|_| platform("Anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or_else(|| platform("Missing body"))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let dir = desktop_export_dir()?;
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(filename);
        std::fs::write(&path, bytes)?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, ExportError> {
    let dirs = directories::ProjectDirs::from("com", "Nametrend", "Nametrend").ok_or_else(|| {
        ExportError::Platform("Unable to determine export directory".to_string())
    })?;
    Ok(dirs.data_dir().join("exports"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::{DataTable, Row};

    #[test]
    fn blank_cells_export_empty() {
        let table = DataTable::new(vec![
            Row::new("ALICE", 2000, 10),
            Row::new("ALICE", 2001, 1200),
            Row::new("BOB", 2000, 5),
        ]);
        let pivot = PivotTable::recompute(&["Alice", "Bob"], &table);
        let csv = pivot_csv(&pivot).unwrap();
        assert_eq!(csv, "Year,Alice,Bob\n2000,10,5\n2001,1200,\n");
    }

    #[test]
    fn names_with_commas_are_quoted() {
        let pivot = PivotTable::recompute(&["O,Brien"], &DataTable::empty());
        assert_eq!(pivot_csv(&pivot).unwrap(), "Year,\"O,Brien\"\n");
    }
}
