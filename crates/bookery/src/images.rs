//! Cover image ingestion
//!
//! For each catalog entity: fetch the jacket from the image service, store
//! it under the entity's slug, sanity-check the size, and derive a
//! proportional thumbnail. One bad ISBN must not sink the batch, so every
//! per-entity failure is logged and the loop moves on.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use image::imageops::FilterType;
use image::GenericImageView;

use crate::catalog;
use crate::config::{Config, CoversConfig};
use crate::error::Result;
use crate::report::{Issue, IssueKind};
use crate::types::Book;

/// Filename suffix distinguishing thumbnails from full covers
const THUMB_SUFFIX: &str = "-thumb";

/// Counters for one ingestion pass.
#[derive(Debug, Default)]
pub struct IngestSummary {
    /// Entities whose cover and thumbnail were written
    pub fetched: usize,
    /// Entities whose cover came back implausibly small
    pub unavailable: usize,
    /// Entities that failed outright (fetch, decode, or filesystem)
    pub failed: usize,
    /// Entities skipped by the defensive title/ISBN re-check
    pub skipped: usize,
}

/// Fetches covers and derives thumbnails for a catalog.
pub struct ImageIngestor {
    client: reqwest::blocking::Client,
    covers: CoversConfig,
    covers_dir: PathBuf,
}

impl ImageIngestor {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            covers: config.covers.clone(),
            covers_dir: config.output.covers_dir.clone(),
        })
    }

    /// Ingest covers for every entity, isolating per-entity failures.
    pub fn run(&self, books: &[Book]) -> IngestSummary {
        let mut summary = IngestSummary::default();

        for book in books {
            // The catalog should already guarantee identity; re-check
            // since the artifact comes from disk.
            if !book.has_identity() {
                summary.skipped += 1;
                continue;
            }
            match self.ingest_one(book) {
                Ok(unavailable) => {
                    summary.fetched += 1;
                    if unavailable {
                        summary.unavailable += 1;
                    }
                }
                Err(error) => {
                    tracing::warn!(
                        isbn = %book.isbn,
                        slug = %book.slug,
                        %error,
                        "cover ingestion failed"
                    );
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    /// Fetch, persist, and thumbnail one cover. Returns whether the cover
    /// was implausibly small.
    fn ingest_one(&self, book: &Book) -> Result<bool> {
        let url = self.covers.cover_url(&book.isbn);
        tracing::debug!(isbn = %book.isbn, "fetching cover");
        let bytes = self.client.get(&url).send()?.bytes()?;

        fs::create_dir_all(&self.covers_dir)?;
        let cover = self.cover_path(&book.slug);
        fs::write(&cover, &bytes)?;

        self.finish_cover(book, &cover)
    }

    /// Size check plus thumbnail derivation for an already-persisted cover.
    ///
    /// An undersized cover is warned about once but still thumbnailed; a
    /// degenerate thumbnail beats a missing asset on the published site.
    fn finish_cover(&self, book: &Book, cover: &Path) -> Result<bool> {
        let size = fs::metadata(cover)?.len();
        let unavailable = size < self.covers.min_plausible_bytes;
        if unavailable {
            Issue::new(&book.slug, &book.title, IssueKind::CoverUnavailable {
                isbn: book.isbn.clone(),
            })
            .log();
        }

        self.derive_thumbnail(cover, &self.thumb_path(&book.slug))?;
        Ok(unavailable)
    }

    /// Decode the stored cover and write a proportionally scaled thumbnail
    /// next to it.
    fn derive_thumbnail(&self, cover: &Path, thumb: &Path) -> Result<(u32, u32)> {
        let img = image::open(cover)?;
        let (orig_w, orig_h) = img.dimensions();
        let width = self.covers.thumb_width;
        let height = thumb_height(width, orig_w, orig_h);

        let resized = img.resize_exact(width, height, FilterType::Lanczos3);
        resized.save(thumb)?;
        Ok((width, height))
    }

    fn cover_path(&self, slug: &str) -> PathBuf {
        self.covers_dir.join(format!("{slug}.jpg"))
    }

    fn thumb_path(&self, slug: &str) -> PathBuf {
        self.covers_dir.join(format!("{slug}{THUMB_SUFFIX}.jpg"))
    }
}

/// Thumbnail height preserving the original aspect ratio at the target
/// width.
pub fn thumb_height(width: u32, orig_w: u32, orig_h: u32) -> u32 {
    (f64::from(width) * f64::from(orig_h) / f64::from(orig_w)).round() as u32
}

/// Ingest covers for the catalog artifact on disk.
pub fn run(config: &Config) -> Result<IngestSummary> {
    let books = catalog::read(&config.output.catalog_path)?;
    tracing::info!(books = books.len(), "start cover ingestion");

    let summary = ImageIngestor::new(config)?.run(&books);
    tracing::info!(
        fetched = summary.fetched,
        unavailable = summary.unavailable,
        failed = summary.failed,
        skipped = summary.skipped,
        "cover ingestion finished"
    );
    Ok(summary)
}
