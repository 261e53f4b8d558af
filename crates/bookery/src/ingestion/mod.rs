//! Books spreadsheet ingestion

mod fetch;
mod rows;

pub use fetch::{fetch_books_csv, published_csv_url};
pub use rows::{read_rows, rows_from_reader};
