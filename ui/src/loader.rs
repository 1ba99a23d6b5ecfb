//! Dataset fetching: HTTP on the web, the filesystem on desktop.

use crate::core::error::{LoadError, Result};
use crate::core::table::DataTable;
use crate::ingest::parse_table;

/// Fetches and parses the CSV at `location` (a URL or a file path).
pub async fn load_dataset(location: String) -> Result<DataTable> {
    let text = fetch_text(&location).await?;
    let report = parse_table(&text)?;
    if report.skipped > 0 {
        tracing::info!(
            %location,
            skipped = report.skipped,
            "ignored records with missing fields"
        );
    }
    Ok(report.table)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let fetch_error = |message: String| LoadError::Fetch {
        url: url.to_string(),
        message,
    };

    let window = web_sys::window().ok_or_else(|| fetch_error("window unavailable".into()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| fetch_error(format!("{err:?}")))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| fetch_error("unexpected response object".into()))?;

    if !response.ok() {
        return Err(fetch_error(format!("HTTP {}", response.status())));
    }

    let body = response
        .text()
        .map_err(|err| fetch_error(format!("{err:?}")))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|err| fetch_error(format!("{err:?}")))?;
    text.as_string().ok_or(LoadError::Encoding)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_text(path: &str) -> Result<String> {
    let path = std::path::PathBuf::from(path);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| LoadError::Io { path, source })?;
    String::from_utf8(bytes).map_err(|_| LoadError::Encoding)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_io_error() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let err = runtime
            .block_on(load_dataset("definitely/not/here.csv".into()))
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn reads_and_parses_a_file() {
        let dir = std::env::temp_dir().join(format!("nametrend-loader-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("names.csv");
        std::fs::write(&path, "Name/Nom,Year/Annee,Frequency/Frequence\nALICE,2000,10\n").unwrap();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let table = runtime
            .block_on(load_dataset(path.to_string_lossy().into_owned()))
            .unwrap();
        assert_eq!(table.len(), 1);
        std::fs::remove_dir_all(&dir).ok();
    }
}
