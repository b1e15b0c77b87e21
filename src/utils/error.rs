use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Insufficient arguments. Usage: book-tracker <catalogFile.txt> <operation>")]
    InsufficientArguments,

    #[error("Catalog file must end with '.txt': {name}")]
    InvalidFileName { name: String },

    #[error("Entry must have exactly 4 fields separated by ':' (found {found})")]
    FieldCount { found: usize },

    #[error("Title is empty")]
    EmptyTitle,

    #[error("Author is empty")]
    EmptyAuthor,

    #[error("Copies is not a valid integer: \"{raw}\"")]
    CopiesNotInteger { raw: String },

    #[error("Copies must be a positive integer greater than zero (got {copies})")]
    CopiesNotPositive { copies: i32 },

    #[error("ISBN must contain only numeric characters: \"{isbn}\"")]
    NonNumericIsbn { isbn: String },

    #[error("ISBN must be exactly 13 digits (got {length}): \"{isbn}\"")]
    IsbnLength { isbn: String, length: usize },

    #[error("Multiple books ({count}) share ISBN: {isbn}")]
    DuplicateIsbn { isbn: String, count: usize },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{message}")]
    Unexpected { message: String },
}

impl TrackerError {
    /// Name of the failure family, as printed on the console and in `errors.log`.
    pub fn kind(&self) -> &'static str {
        match self {
            TrackerError::InsufficientArguments => "InsufficientArguments",
            TrackerError::InvalidFileName { .. } => "InvalidFileName",
            TrackerError::FieldCount { .. }
            | TrackerError::EmptyTitle
            | TrackerError::EmptyAuthor
            | TrackerError::CopiesNotInteger { .. }
            | TrackerError::CopiesNotPositive { .. } => "MalformedEntry",
            TrackerError::NonNumericIsbn { .. } | TrackerError::IsbnLength { .. } => "InvalidISBN",
            TrackerError::DuplicateIsbn { .. } => "DuplicateISBN",
            TrackerError::Io(_) => "IOError",
            TrackerError::Unexpected { .. } => "UnexpectedError",
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
