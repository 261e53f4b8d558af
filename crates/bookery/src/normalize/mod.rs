//! Record normalization: raw row -> validated [`Book`]
//!
//! Every textual value is cleaned (typographic quotes normalized, trimmed)
//! before type-specific handling. Malformed id fields, unknown tags, missing
//! review text, and failed headline lookups are recoverable: they produce an
//! [`Issue`] and leave the field unset. Only an ISBN that cannot carry a
//! checksum excludes the row.

pub mod clean;
pub mod isbn;
pub mod slug;

use crate::headline::HeadlineSource;
use crate::report::{Issue, IssueKind};
use crate::types::{Book, RawRow};
use crate::vocab::TagVocabulary;

pub use clean::clean_field;
pub use isbn::{derive_isbn13, pad_isbn10};
pub use slug::slugify;

/// Normalize one raw row into a [`Book`], collecting every issue found on
/// the way.
///
/// The caller is expected to have applied the title/ISBN pre-filter; this
/// function assumes the row is meant to become an entity. `None` is
/// returned only when no ISBN-13 could be derived.
pub fn book_from_row(
    row: &RawRow,
    vocab: &TagVocabulary,
    headlines: &dyn HeadlineSource,
) -> (Option<Book>, Vec<Issue>) {
    let mut issues = Vec::new();
    let row_ref = row.row_ref.trim().to_string();
    let title = clean_field(&row.title);

    let text = clean_field(&row.text);
    if text.is_empty() {
        issues.push(Issue::new(&row_ref, &title, IssueKind::MissingText));
    }

    let book_seamus_id = valid_id(
        "book_seamus_id",
        &clean_field(&row.book_seamus_id),
        &row_ref,
        &title,
        &mut issues,
    );
    let (author_seamus_id, author_seamus_headline) = enriched_id(
        "author_seamus_id",
        &clean_field(&row.author_seamus_id),
        headlines,
        &row_ref,
        &title,
        &mut issues,
    );
    let (review_seamus_id, review_seamus_headline) = enriched_id(
        "review_seamus_id",
        &clean_field(&row.review_seamus_id),
        headlines,
        &row_ref,
        &title,
        &mut issues,
    );

    let isbn = pad_isbn10(&clean_field(&row.isbn));
    let tags = resolve_tags(&clean_field(&row.tags), vocab, &row_ref, &title, &mut issues);

    let Some(isbn13) = derive_isbn13(&isbn) else {
        issues.push(Issue::new(&row_ref, &title, IssueKind::InvalidIsbn { isbn }));
        return (None, issues);
    };

    let slug = slugify(&title);

    let book = Book {
        isbn,
        isbn13,
        author: clean_field(&row.author),
        genre: clean_field(&row.genre),
        reviewer: clean_field(&row.reviewer),
        text,
        slug,
        tags,
        hide_ibooks: false,
        book_seamus_id,
        author_seamus_id,
        author_seamus_headline,
        review_seamus_id,
        review_seamus_headline,
        title,
    };

    (Some(book), issues)
}

/// Validate an id field. Empty means absent; a non-integer value is warned
/// about and dropped.
fn valid_id(
    field: &'static str,
    value: &str,
    row_ref: &str,
    title: &str,
    issues: &mut Vec<Issue>,
) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    if value.parse::<i64>().is_err() {
        issues.push(Issue::new(row_ref, title, IssueKind::InvalidId {
            field,
            value: value.to_string(),
        }));
        return None;
    }
    Some(value.to_string())
}

/// Validate an id field and, when valid, look up the sibling headline.
///
/// A lookup miss or transport failure leaves the headline unset but keeps
/// the id.
fn enriched_id(
    field: &'static str,
    value: &str,
    headlines: &dyn HeadlineSource,
    row_ref: &str,
    title: &str,
    issues: &mut Vec<Issue>,
) -> (Option<String>, Option<String>) {
    let Some(id) = valid_id(field, value, row_ref, title, issues) else {
        return (None, None);
    };

    let headline = match headlines.headline(&id) {
        Ok(Some(headline)) => Some(headline),
        Ok(None) => None,
        Err(error) => {
            tracing::debug!(%error, field, id = %id, "headline lookup failed");
            None
        }
    };
    if headline.is_none() {
        issues.push(Issue::new(row_ref, title, IssueKind::MissingHeadline {
            field,
            id: id.clone(),
        }));
    }

    (Some(id), headline)
}

/// Resolve a comma-separated display-tag field against the controlled
/// vocabulary. Unknown tags are warned about and omitted; order is
/// preserved and duplicates are kept.
fn resolve_tags(
    field: &str,
    vocab: &TagVocabulary,
    row_ref: &str,
    title: &str,
    issues: &mut Vec<Issue>,
) -> Vec<String> {
    let mut slugs = Vec::new();
    for tag in field.split(',') {
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        match vocab.slug_for(tag) {
            Some(slug) => slugs.push(slug.to_string()),
            None => issues.push(Issue::new(row_ref, title, IssueKind::UnknownTag {
                tag: tag.to_string(),
            })),
        }
    }
    slugs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::headline::NoHeadlines;

    /// Headline source with a fixed answer per id.
    struct Canned(&'static str);

    impl HeadlineSource for Canned {
        fn headline(&self, _id: &str) -> Result<Option<String>> {
            Ok(Some(self.0.to_string()))
        }
    }

    /// Headline source whose transport always fails.
    struct Broken;

    impl HeadlineSource for Broken {
        fn headline(&self, _id: &str) -> Result<Option<String>> {
            Err(Error::Internal("connection refused".to_string()))
        }
    }

    fn vocab() -> TagVocabulary {
        TagVocabulary::from_pairs([("fic", "Fiction"), ("bio", "Biography")])
    }

    fn row(title: &str, isbn: &str) -> RawRow {
        RawRow {
            row_ref: "1".to_string(),
            title: title.to_string(),
            isbn: isbn.to_string(),
            text: "A review.".to_string(),
            ..RawRow::default()
        }
    }

    #[test]
    fn unknown_tags_are_dropped_in_order() {
        let mut raw = row("The Paris Wife", "0307476464");
        raw.tags = "Fiction, Mystery, Biography".to_string();
        let (book, issues) = book_from_row(&raw, &vocab(), &NoHeadlines);
        assert_eq!(book.unwrap().tags, vec!["fic", "bio"]);
        assert_eq!(issues, vec![Issue::new("1", "The Paris Wife", IssueKind::UnknownTag {
            tag: "Mystery".to_string(),
        })]);
    }

    // Documented policy, possibly accidental in the source data model:
    // a tag listed twice resolves twice.
    #[test]
    fn duplicate_tags_are_preserved() {
        let mut raw = row("The Paris Wife", "0307476464");
        raw.tags = "Fiction, Fiction".to_string();
        let (book, issues) = book_from_row(&raw, &vocab(), &NoHeadlines);
        assert_eq!(book.unwrap().tags, vec!["fic", "fic"]);
        assert!(issues.is_empty());
    }

    #[test]
    fn isbn_is_padded_and_isbn13_derived() {
        let raw = row("The Paris Wife", "307476464");
        let (book, _) = book_from_row(&raw, &vocab(), &NoHeadlines);
        let book = book.unwrap();
        assert_eq!(book.isbn, "0307476464");
        assert_eq!(book.isbn13, "9780307476463");
    }

    #[test]
    fn non_numeric_isbn_excludes_the_row() {
        let raw = row("The Paris Wife", "not-an-isbn");
        let (book, issues) = book_from_row(&raw, &vocab(), &NoHeadlines);
        assert!(book.is_none());
        assert!(issues.iter().any(|i| matches!(i.kind, IssueKind::InvalidIsbn { .. })));
    }

    #[test]
    fn invalid_id_is_skipped_and_row_continues() {
        let mut raw = row("The Paris Wife", "0307476464");
        raw.book_seamus_id = "n/a".to_string();
        let (book, issues) = book_from_row(&raw, &vocab(), &NoHeadlines);
        let book = book.unwrap();
        assert_eq!(book.book_seamus_id, None);
        assert_eq!(issues, vec![Issue::new("1", "The Paris Wife", IssueKind::InvalidId {
            field: "book_seamus_id",
            value: "n/a".to_string(),
        })]);
    }

    #[test]
    fn valid_id_gets_a_headline() {
        let mut raw = row("The Paris Wife", "0307476464");
        raw.review_seamus_id = "140428724".to_string();
        let (book, issues) = book_from_row(&raw, &vocab(), &Canned("Best Books Of 2011"));
        let book = book.unwrap();
        assert_eq!(book.review_seamus_id.as_deref(), Some("140428724"));
        assert_eq!(book.review_seamus_headline.as_deref(), Some("Best Books Of 2011"));
        assert!(issues.is_empty());
    }

    #[test]
    fn headline_miss_keeps_the_id() {
        let mut raw = row("The Paris Wife", "0307476464");
        raw.author_seamus_id = "140428724".to_string();
        let (book, issues) = book_from_row(&raw, &vocab(), &NoHeadlines);
        let book = book.unwrap();
        assert_eq!(book.author_seamus_id.as_deref(), Some("140428724"));
        assert_eq!(book.author_seamus_headline, None);
        assert_eq!(issues, vec![Issue::new("1", "The Paris Wife", IssueKind::MissingHeadline {
            field: "author_seamus_id",
            id: "140428724".to_string(),
        })]);
    }

    #[test]
    fn transport_failure_is_recoverable() {
        let mut raw = row("The Paris Wife", "0307476464");
        raw.author_seamus_id = "140428724".to_string();
        let (book, issues) = book_from_row(&raw, &vocab(), &Broken);
        let book = book.unwrap();
        assert_eq!(book.author_seamus_id.as_deref(), Some("140428724"));
        assert_eq!(book.author_seamus_headline, None);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn missing_text_warns_but_does_not_reject() {
        let mut raw = row("The Paris Wife", "0307476464");
        raw.text = "   ".to_string();
        let (book, issues) = book_from_row(&raw, &vocab(), &NoHeadlines);
        assert!(book.is_some());
        assert_eq!(issues, vec![Issue::new("1", "The Paris Wife", IssueKind::MissingText)]);
    }

    #[test]
    fn fields_are_cleaned() {
        let mut raw = row("  \u{201C}Bossypants\u{201D}  ", "0316056863");
        raw.author = " Tina Fey\u{2019}s ghost ".to_string();
        let (book, _) = book_from_row(&raw, &vocab(), &NoHeadlines);
        let book = book.unwrap();
        assert_eq!(book.title, "\"Bossypants\"");
        assert_eq!(book.author, "Tina Fey's ghost");
        assert_eq!(book.slug, "bossypants");
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut raw = row("The Paris Wife", "0307476464");
        raw.tags = "Fiction, Biography".to_string();
        let v = vocab();
        let (first, first_issues) = book_from_row(&raw, &v, &NoHeadlines);
        let (second, second_issues) = book_from_row(&raw, &v, &NoHeadlines);
        assert_eq!(first, second);
        assert_eq!(first_issues, second_issues);
    }
}
