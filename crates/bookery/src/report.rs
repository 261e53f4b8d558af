//! Structured warning channel
//!
//! The normalizer and the image ingestor never print; they record issues
//! with row context and hand them to the caller, which decides how to
//! surface them (the CLI logs each through `tracing`).

use std::fmt;

/// What went wrong with a single row or asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// Review text was empty after cleaning
    MissingText,
    /// An id field did not parse as an integer; the field was left unset
    InvalidId { field: &'static str, value: String },
    /// The headline lookup found no content region (or failed in transport)
    MissingHeadline { field: &'static str, id: String },
    /// A tag was not in the controlled vocabulary and was omitted
    UnknownTag { tag: String },
    /// The ISBN contained a non-digit, so no ISBN-13 could be derived;
    /// the row was excluded from the catalog
    InvalidIsbn { isbn: String },
    /// The fetched cover was implausibly small
    CoverUnavailable { isbn: String },
}

/// A recoverable problem attached to the row it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// The row's `#` column value (or record index)
    pub row_ref: String,
    /// The row's title, for context in logs
    pub title: String,
    pub kind: IssueKind,
}

impl Issue {
    pub fn new(row_ref: impl Into<String>, title: impl Into<String>, kind: IssueKind) -> Self {
        Self {
            row_ref: row_ref.into(),
            title: title.into(),
            kind,
        }
    }

    /// Emit this issue as a structured warning.
    pub fn log(&self) {
        tracing::warn!(row = %self.row_ref, title = %self.title, "{}", self);
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::MissingText => {
                write!(f, "#{} Missing text (review) for {}.", self.row_ref, self.title)
            }
            IssueKind::InvalidId { field, value } => {
                write!(f, "#{} Invalid {}: \"{}\"", self.row_ref, field, value)
            }
            IssueKind::MissingHeadline { field, id } => {
                write!(f, "#{} Invalid headline for {} {}", self.row_ref, field, id)
            }
            IssueKind::UnknownTag { tag } => {
                write!(f, "#{} Unknown tag: '{}'", self.row_ref, tag)
            }
            IssueKind::InvalidIsbn { isbn } => {
                write!(f, "#{} Invalid ISBN: \"{}\"", self.row_ref, isbn)
            }
            IssueKind::CoverUnavailable { isbn } => {
                write!(f, "Image not available for ISBN: {}", isbn)
            }
        }
    }
}
