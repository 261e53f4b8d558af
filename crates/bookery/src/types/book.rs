//! The normalized book entity

use serde::{Deserialize, Serialize};

/// A single normalized book record.
///
/// Constructed once by the record normalizer, then only read: serialized
/// into the catalog artifact and consumed by the image ingestor. Unset
/// optional fields are omitted from the JSON representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// 10-character ISBN, left-zero-padded
    pub isbn: String,
    /// Derived 13-digit ISBN, never supplied by input
    pub isbn13: String,
    /// Display title
    pub title: String,
    pub author: String,
    pub genre: String,
    pub reviewer: String,
    /// Review text; may be empty (warned, not rejected)
    pub text: String,
    /// URL-safe identifier derived from the title, at most 254 characters
    pub slug: String,
    /// Controlled-vocabulary slugs in first-seen order, not deduplicated
    pub tags: Vec<String>,
    /// Downstream display flag; never populated by the normalizer
    #[serde(default)]
    pub hide_ibooks: bool,
    /// Opaque integer-string id into the external content system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_seamus_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_seamus_id: Option<String>,
    /// Headline fetched for `author_seamus_id`, when the lookup succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_seamus_headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_seamus_id: Option<String>,
    /// Headline fetched for `review_seamus_id`, when the lookup succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_seamus_headline: Option<String>,
}

impl Book {
    /// Whether the entity carries enough identity for asset work.
    ///
    /// The catalog pre-filter already guarantees this for freshly built
    /// catalogs; the image ingestor re-checks defensively when reading an
    /// artifact from disk.
    pub fn has_identity(&self) -> bool {
        !self.title.is_empty() && !self.isbn.is_empty()
    }
}
