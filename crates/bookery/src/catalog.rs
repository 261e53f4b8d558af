//! Catalog assembly: rows in, JSON artifact out

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::headline::{HeadlineSource, HttpHeadlineSource};
use crate::ingestion;
use crate::normalize;
use crate::report::Issue;
use crate::types::{Book, RawRow};
use crate::vocab::TagVocabulary;

/// Outcome of one assembly pass.
#[derive(Debug, Default)]
pub struct CatalogReport {
    /// Entities in source order
    pub books: Vec<Book>,
    /// Every recoverable issue the normalizer raised
    pub issues: Vec<Issue>,
    /// Rows excluded by the title/ISBN pre-filter
    pub skipped_rows: usize,
}

/// Normalize every eligible row.
///
/// Rows with an empty title or ISBN are skipped before any entity
/// construction; everything else flows through the normalizer and its
/// issues are aggregated here.
pub fn build(
    rows: &[RawRow],
    vocab: &TagVocabulary,
    headlines: &dyn HeadlineSource,
) -> CatalogReport {
    let mut report = CatalogReport::default();

    for row in rows {
        if !row.has_identity() {
            report.skipped_rows += 1;
            continue;
        }
        let (book, issues) = normalize::book_from_row(row, vocab, headlines);
        report.issues.extend(issues);
        if let Some(book) = book {
            report.books.push(book);
        }
    }

    report
}

/// Serialize the full entity sequence as a single JSON array, replacing any
/// prior artifact.
pub fn write(books: &[Book], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string(books)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a previously written catalog artifact.
pub fn read(path: &Path) -> Result<Vec<Book>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Full assembly pass against the configured sources: vocabulary, rows,
/// normalization, artifact.
pub fn run(config: &Config) -> Result<CatalogReport> {
    let vocab = TagVocabulary::load(&config.sources.copy_workbook, &config.sources.tags_sheet)?;
    let rows = ingestion::read_rows(&config.sources.books_csv)?;
    tracing::info!(rows = rows.len(), "start catalog assembly");

    let headlines = HttpHeadlineSource::new(&config.content.base_url, config.http.timeout_secs)?;
    let report = build(&rows, &vocab, &headlines);

    for issue in &report.issues {
        issue.log();
    }

    write(&report.books, &config.output.catalog_path)?;
    tracing::info!(
        books = report.books.len(),
        skipped = report.skipped_rows,
        issues = report.issues.len(),
        artifact = %config.output.catalog_path.display(),
        "catalog written"
    );
    Ok(report)
}
