//! bookery: book catalog production pipeline
//!
//! Turns a spreadsheet of book metadata into a validated JSON catalog plus a
//! set of resized cover images keyed by URL-safe slug. Two pipelines run in
//! sequence: record normalization (raw row -> validated [`Book`], including
//! ISBN-13 derivation, tag resolution, and slug generation) and image
//! ingestion (cover fetch -> plausibility check -> proportional thumbnail).

pub mod catalog;
pub mod config;
pub mod error;
pub mod headline;
pub mod images;
pub mod ingestion;
pub mod normalize;
pub mod report;
pub mod types;
pub mod vocab;

pub use config::Config;
pub use error::{Error, Result};
pub use report::{Issue, IssueKind};
pub use types::{book::Book, row::RawRow};
pub use vocab::TagVocabulary;
