use std::fmt;

/// One catalog line. Fields are validated by [`crate::domain::codec::parse`];
/// a record is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    title: String,
    author: String,
    isbn: String,
    copies: u32,
}

impl BookRecord {
    pub(crate) fn new(title: String, author: String, isbn: String, copies: u32) -> Self {
        Self {
            title,
            author,
            isbn,
            copies,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn copies(&self) -> u32 {
        self.copies
    }
}

impl fmt::Display for BookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", self.title, self.author, self.isbn, self.copies)
    }
}

/// In-memory catalog for a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<BookRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends in load order, without sorting.
    pub fn push(&mut self, record: BookRecord) {
        self.records.push(record);
    }

    /// Appends then re-sorts by lowercase title. `sort_by_cached_key` is
    /// stable, so equal titles keep their relative order.
    pub fn insert_sorted(&mut self, record: BookRecord) {
        self.records.push(record);
        self.records.sort_by_cached_key(|r| r.title.to_lowercase());
    }
}

impl FromIterator<BookRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = BookRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// A catalog line that was skipped during loading.
#[derive(Debug)]
pub struct LoadError {
    pub line: String,
    pub reason: crate::utils::error::TrackerError,
}

#[derive(Debug)]
pub struct LoadReport {
    pub catalog: Catalog,
    pub rejected: Vec<LoadError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IsbnLookup {
    Found(BookRecord),
    NotFound,
}

/// What the operate phase produced, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    Isbn { isbn: String, lookup: IsbnLookup },
    Keyword { keyword: String, matches: Vec<BookRecord> },
    Added(BookRecord),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStatistics {
    pub valid_records: usize,
    pub search_results: usize,
    pub books_added: usize,
    pub errors: usize,
}
