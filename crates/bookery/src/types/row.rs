//! Typed raw spreadsheet row

/// One raw spreadsheet row, validated into a named-field schema at the
/// ingestion boundary.
///
/// Values are carried exactly as they appear in the source; all cleaning
/// happens in the normalizer. Columns not listed in [`RawRow::from_fields`]
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// Row identifier from the `#` column, or the 1-based record index
    /// when the sheet has no such column. Used to reference the row in
    /// warnings.
    pub row_ref: String,
    pub title: String,
    pub isbn: String,
    pub author: String,
    pub genre: String,
    pub reviewer: String,
    pub text: String,
    /// Comma-separated display tags, unresolved
    pub tags: String,
    pub book_seamus_id: String,
    pub author_seamus_id: String,
    pub review_seamus_id: String,
}

impl RawRow {
    /// Build a row from `(column name, value)` pairs.
    ///
    /// Recognized columns are mapped by exact header name; anything else is
    /// dropped here rather than absorbed into the entity. A missing `#`
    /// column falls back to `index` (1-based) as the row reference.
    pub fn from_fields<'a, I>(index: usize, fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        let mut row = Self {
            row_ref: index.to_string(),
            ..Self::default()
        };

        for (column, value) in fields {
            match column {
                "#" => row.row_ref = value,
                "title" => row.title = value,
                "isbn" => row.isbn = value,
                "author" => row.author = value,
                "genre" => row.genre = value,
                "reviewer" => row.reviewer = value,
                "text" => row.text = value,
                "tags" => row.tags = value,
                "book_seamus_id" => row.book_seamus_id = value,
                "author_seamus_id" => row.author_seamus_id = value,
                "review_seamus_id" => row.review_seamus_id = value,
                // Unrecognized column: ignored explicitly.
                _ => {}
            }
        }

        row
    }

    /// Rows without a title or ISBN never become entities.
    pub fn has_identity(&self) -> bool {
        !self.title.is_empty() && !self.isbn.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_recognized_columns() {
        let row = RawRow::from_fields(
            3,
            vec![
                ("#", "12".to_string()),
                ("title", "Salvage the Bones".to_string()),
                ("isbn", "1608195228".to_string()),
                ("tags", "Fiction".to_string()),
            ],
        );
        assert_eq!(row.row_ref, "12");
        assert_eq!(row.title, "Salvage the Bones");
        assert_eq!(row.isbn, "1608195228");
        assert_eq!(row.tags, "Fiction");
        assert_eq!(row.author, "");
    }

    #[test]
    fn unrecognized_columns_are_ignored() {
        let row = RawRow::from_fields(
            1,
            vec![
                ("title", "Bossypants".to_string()),
                ("publisher", "Little, Brown".to_string()),
            ],
        );
        assert_eq!(row.title, "Bossypants");
        // No field absorbed the unknown column.
        assert_eq!(
            row,
            RawRow {
                row_ref: "1".to_string(),
                title: "Bossypants".to_string(),
                ..RawRow::default()
            }
        );
    }

    #[test]
    fn missing_row_column_falls_back_to_index() {
        let row = RawRow::from_fields(7, vec![("title", "Pulphead".to_string())]);
        assert_eq!(row.row_ref, "7");
    }

    #[test]
    fn identity_requires_title_and_isbn() {
        let mut row = RawRow::from_fields(
            1,
            vec![
                ("title", "Blue Nights".to_string()),
                ("isbn", "0307267679".to_string()),
            ],
        );
        assert!(row.has_identity());
        row.isbn.clear();
        assert!(!row.has_identity());
    }
}
