//! Controlled tag vocabulary
//!
//! Loaded once per run from a named sheet of the copy workbook and then
//! passed by reference everywhere; nothing mutates it after construction.

use std::collections::HashMap;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::{Error, Result};

/// The two inverse mappings of the controlled vocabulary.
#[derive(Debug, Clone, Default)]
pub struct TagVocabulary {
    tags_to_slugs: HashMap<String, String>,
    slugs_to_tags: HashMap<String, String>,
}

impl TagVocabulary {
    /// Load the vocabulary from a workbook sheet of `(slug, display tag)`
    /// rows, one header row first.
    ///
    /// A missing workbook or sheet is fatal for the whole run; there is no
    /// meaningful fallback.
    pub fn load(workbook_path: &Path, sheet: &str) -> Result<Self> {
        let mut workbook = open_workbook_auto(workbook_path).map_err(|e| {
            Error::Vocabulary(format!(
                "cannot open {}: {}",
                workbook_path.display(),
                e
            ))
        })?;
        let range = workbook.worksheet_range(sheet).map_err(|e| {
            Error::Vocabulary(format!("missing sheet '{}': {}", sheet, e))
        })?;

        let mut vocab = Self::default();
        for row in range.rows().skip(1) {
            let slug = row.first().map(cell_text).unwrap_or_default();
            let tag = row.get(1).map(cell_text).unwrap_or_default();
            if slug.is_empty() && tag.is_empty() {
                continue;
            }
            vocab.insert(&slug, &tag);
        }

        tracing::info!(
            path = %workbook_path.display(),
            sheet,
            tags = vocab.len(),
            "loaded tag vocabulary"
        );
        Ok(vocab)
    }

    /// Build a vocabulary from in-memory `(slug, display tag)` pairs,
    /// applying the same trimming and apostrophe normalization as
    /// [`TagVocabulary::load`].
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut vocab = Self::default();
        for (slug, tag) in pairs {
            vocab.insert(slug, tag);
        }
        vocab
    }

    // Rows are processed in source order; a duplicate slug or tag simply
    // overwrites the earlier entry in that direction.
    fn insert(&mut self, slug: &str, tag: &str) {
        let slug = slug.trim().to_string();
        let tag = tag.replace('\u{2019}', "'").trim().to_string();
        self.slugs_to_tags.insert(slug.clone(), tag.clone());
        self.tags_to_slugs.insert(tag, slug);
    }

    /// Resolve a display tag to its slug.
    pub fn slug_for(&self, tag: &str) -> Option<&str> {
        self.tags_to_slugs.get(tag).map(String::as_str)
    }

    /// Resolve a slug back to its display tag.
    pub fn tag_for(&self, slug: &str) -> Option<&str> {
        self.slugs_to_tags.get(slug).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slugs_to_tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs_to_tags.is_empty()
    }
}

/// Render a spreadsheet cell as text.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        _ => String::new(),
    }
}
