use crate::utils::error::{Result, TrackerError};
use regex::Regex;
use std::sync::LazyLock;

/// Exactly thirteen ASCII digits. `\d` would also accept other Unicode digits.
static ISBN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{13}$").expect("ISBN pattern is valid")
});

static DIGITS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*$").expect("digit pattern is valid"));

pub fn is_isbn(value: &str) -> bool {
    ISBN_PATTERN.is_match(value)
}

/// Format-only check; no checksum.
pub fn validate_isbn(isbn: &str) -> Result<()> {
    if is_isbn(isbn) {
        return Ok(());
    }

    if !DIGITS_ONLY.is_match(isbn) {
        return Err(TrackerError::NonNumericIsbn {
            isbn: isbn.to_string(),
        });
    }

    Err(TrackerError::IsbnLength {
        isbn: isbn.to_string(),
        length: isbn.len(),
    })
}

pub fn validate_file_suffix(file_name: &str, suffix: &str) -> Result<()> {
    if !file_name.ends_with(suffix) {
        return Err(TrackerError::InvalidFileName {
            name: file_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_copies(raw: &str) -> Result<u32> {
    let copies: i32 = raw.parse().map_err(|_| TrackerError::CopiesNotInteger {
        raw: raw.to_string(),
    })?;

    if copies <= 0 {
        return Err(TrackerError::CopiesNotPositive { copies });
    }
    Ok(copies as u32)
}
