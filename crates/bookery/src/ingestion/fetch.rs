//! Published-spreadsheet download

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::Result;

/// Published-CSV URL for a spreadsheet document key.
pub fn published_csv_url(key: &str) -> String {
    format!("https://docs.google.com/spreadsheet/pub?key={key}&single=true&gid=0&output=csv")
}

/// Download the published books CSV to a local path.
///
/// Any failure here is fatal: without the spreadsheet there is no run.
pub fn fetch_books_csv(key: &str, dest: &Path, timeout_secs: u64) -> Result<()> {
    let url = published_csv_url(key);
    tracing::info!(%url, dest = %dest.display(), "fetching books CSV");

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    let bytes = client.get(&url).send()?.error_for_status()?.bytes()?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, &bytes)?;

    tracing::info!(bytes = bytes.len(), "books CSV written");
    Ok(())
}
