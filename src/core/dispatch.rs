use crate::core::add::add_book;
use crate::core::search::{search_by_isbn, search_by_keyword};
use crate::domain::codec::has_record_shape;
use crate::domain::model::{Catalog, OperationOutcome, RunStatistics};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use crate::utils::validation::is_isbn;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    IsbnSearch(String),
    AddBook(String),
    KeywordSearch(String),
}

impl Operation {
    /// Thirteen digits is an ISBN lookup, four colon-separated fields is an
    /// entry to add, anything else (including an empty string) is a keyword.
    pub fn classify(raw: &str) -> Self {
        if is_isbn(raw) {
            Operation::IsbnSearch(raw.to_string())
        } else if has_record_shape(raw) {
            Operation::AddBook(raw.to_string())
        } else {
            Operation::KeywordSearch(raw.to_string())
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            Operation::IsbnSearch(s) | Operation::AddBook(s) | Operation::KeywordSearch(s) => s,
        }
    }
}

pub async fn execute<S: Storage>(
    operation: &Operation,
    catalog: &mut Catalog,
    storage: &S,
    path: &Path,
    stats: &mut RunStatistics,
) -> Result<OperationOutcome> {
    tracing::debug!("Executing {:?}", operation);
    match operation {
        Operation::IsbnSearch(isbn) => {
            let lookup = search_by_isbn(catalog, isbn, stats)?;
            Ok(OperationOutcome::Isbn {
                isbn: isbn.clone(),
                lookup,
            })
        }
        Operation::AddBook(entry) => {
            let record = add_book(catalog, entry, storage, path, stats).await?;
            Ok(OperationOutcome::Added(record))
        }
        Operation::KeywordSearch(keyword) => {
            let matches = search_by_keyword(catalog, keyword, stats);
            Ok(OperationOutcome::Keyword {
                keyword: keyword.clone(),
                matches,
            })
        }
    }
}
