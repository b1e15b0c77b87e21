use crate::domain::model::{BookRecord, IsbnLookup, OperationOutcome, RunStatistics};

const RULE_WIDTH: usize = 73;

pub fn header() -> String {
    format!(
        "{:<30} {:<20} {:<15} {:>5}\n{}\n",
        "Title",
        "Author",
        "ISBN",
        "Copies",
        "-".repeat(RULE_WIDTH)
    )
}

pub fn row(record: &BookRecord) -> String {
    format!(
        "{:<30} {:<20} {:<15} {:>5}\n",
        record.title(),
        record.author(),
        record.isbn(),
        record.copies()
    )
}

pub fn render_outcome(outcome: &OperationOutcome) -> String {
    let mut out = header();
    match outcome {
        OperationOutcome::Isbn { lookup: IsbnLookup::Found(record), .. } => out.push_str(&row(record)),
        OperationOutcome::Isbn { isbn, lookup: IsbnLookup::NotFound } => {
            out.push_str(&format!("No book found with ISBN: {}\n", isbn));
        }
        OperationOutcome::Keyword { keyword, matches } if matches.is_empty() => {
            out.push_str(&format!("No books found matching keyword: \"{}\"\n", keyword));
        }
        OperationOutcome::Keyword { matches, .. } => {
            for record in matches {
                out.push_str(&row(record));
            }
        }
        OperationOutcome::Added(record) => out.push_str(&row(record)),
    }
    out
}

pub fn statistics(stats: &RunStatistics) -> String {
    format!(
        "\n--- Statistics ---\n\
         Valid records processed : {}\n\
         Search results          : {}\n\
         Books added             : {}\n\
         Errors encountered      : {}\n\
         Thank you for using the Library Book Tracker.\n",
        stats.valid_records, stats.search_results, stats.books_added, stats.errors
    )
}
