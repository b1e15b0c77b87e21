//! `title:author:isbn:copies` line format.
//!
//! Fields are not escaped, so a title or author containing `:` cannot be
//! written and read back as the same record.

use crate::domain::model::BookRecord;
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{validate_isbn, validate_positive_copies};

pub const FIELD_SEPARATOR: char = ':';
pub const FIELD_COUNT: usize = 4;

/// Splits on every separator, keeping empty trailing fields.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_SEPARATOR).collect()
}

pub fn has_record_shape(value: &str) -> bool {
    value.split(FIELD_SEPARATOR).count() == FIELD_COUNT
}

pub fn parse(line: &str) -> Result<BookRecord> {
    let fields = split_fields(line);
    if fields.len() != FIELD_COUNT {
        return Err(TrackerError::FieldCount {
            found: fields.len(),
        });
    }

    let title = fields[0].trim();
    let author = fields[1].trim();
    let isbn = fields[2].trim();
    let copies = fields[3].trim();

    if title.is_empty() {
        return Err(TrackerError::EmptyTitle);
    }
    if author.is_empty() {
        return Err(TrackerError::EmptyAuthor);
    }

    validate_isbn(isbn)?;
    let copies = validate_positive_copies(copies)?;

    Ok(BookRecord::new(
        title.to_string(),
        author.to_string(),
        isbn.to_string(),
        copies,
    ))
}

pub fn serialize(record: &BookRecord) -> String {
    record.to_string()
}
