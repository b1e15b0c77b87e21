use crate::domain::model::{BookRecord, Catalog, IsbnLookup, RunStatistics};
use crate::utils::error::{Result, TrackerError};

/// Exact ISBN match. More than one hit is a `DuplicateIsbn` failure and
/// leaves the statistics untouched.
pub fn search_by_isbn(catalog: &Catalog, isbn: &str, stats: &mut RunStatistics) -> Result<IsbnLookup> {
    let matches: Vec<&BookRecord> = catalog
        .records()
        .iter()
        .filter(|record| record.isbn() == isbn)
        .collect();

    match matches.as_slice() {
        [] => {
            stats.search_results = 0;
            Ok(IsbnLookup::NotFound)
        }
        [record] => {
            stats.search_results = 1;
            Ok(IsbnLookup::Found((*record).clone()))
        }
        _ => Err(TrackerError::DuplicateIsbn {
            isbn: isbn.to_string(),
            count: matches.len(),
        }),
    }
}

/// Case-insensitive substring match on titles, in catalog order. An empty
/// keyword matches everything.
pub fn search_by_keyword(catalog: &Catalog, keyword: &str, stats: &mut RunStatistics) -> Vec<BookRecord> {
    let needle = keyword.to_lowercase();
    let matches: Vec<BookRecord> = catalog
        .records()
        .iter()
        .filter(|record| record.title().to_lowercase().contains(&needle))
        .cloned()
        .collect();

    stats.search_results = matches.len();
    matches
}
