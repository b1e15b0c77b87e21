use crate::domain::codec;
use crate::domain::model::{BookRecord, Catalog, RunStatistics};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::Path;

/// Parses `entry`, inserts it into the catalog in title order and rewrites the
/// catalog file from scratch.
///
/// A parse failure leaves the catalog untouched. A write failure does not: the
/// record is already in memory when the error is returned, so the caller must
/// treat it as fatal for the run.
pub async fn add_book<S: Storage>(
    catalog: &mut Catalog,
    entry: &str,
    storage: &S,
    path: &Path,
    stats: &mut RunStatistics,
) -> Result<BookRecord> {
    let record = codec::parse(entry)?;

    catalog.insert_sorted(record.clone());
    write_catalog(catalog, storage, path).await?;

    stats.books_added = 1;
    tracing::debug!("Added {} ({} records on disk)", record.isbn(), catalog.len());
    Ok(record)
}

pub async fn write_catalog<S: Storage>(catalog: &Catalog, storage: &S, path: &Path) -> Result<()> {
    let mut content = String::new();
    for record in catalog.records() {
        content.push_str(&codec::serialize(record));
        content.push('\n');
    }
    storage.write_file(path, content.as_bytes()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{MockStorage, ReadOnlyStorage};
    use crate::utils::error::TrackerError;

    #[tokio::test]
    async fn test_add_to_empty_catalog_writes_single_line() {
        let path = Path::new("books.txt");
        let storage = MockStorage::with_file(path, "").await;
        let mut catalog = Catalog::new();
        let mut stats = RunStatistics::default();

        let record = add_book(
            &mut catalog,
            "New Book:Jane Doe:1234567890123:5",
            &storage,
            path,
            &mut stats,
        )
        .await
        .unwrap();

        assert_eq!(
            storage.get_file(path).await.unwrap(),
            "New Book:Jane Doe:1234567890123:5\n"
        );
        assert_eq!(catalog.records(), &[record.clone()]);
        assert_eq!(stats.books_added, 1);
        assert_eq!(
            codec::parse("New Book:Jane Doe:1234567890123:5").unwrap(),
            record
        );
    }

    #[tokio::test]
    async fn test_added_books_are_sorted_by_title() {
        let path = Path::new("books.txt");
        let storage = MockStorage::new();
        let mut catalog = Catalog::new();
        let mut stats = RunStatistics::default();

        add_book(&mut catalog, "Zebra Tales:Ann:1111111111111:1", &storage, path, &mut stats)
            .await
            .unwrap();
        add_book(&mut catalog, "Apple Pie:Bob:2222222222222:2", &storage, path, &mut stats)
            .await
            .unwrap();

        assert_eq!(
            storage.get_file(path).await.unwrap(),
            "Apple Pie:Bob:2222222222222:2\nZebra Tales:Ann:1111111111111:1\n"
        );
    }

    #[tokio::test]
    async fn test_sort_ignores_case_and_is_stable() {
        let path = Path::new("books.txt");
        let storage = MockStorage::new();
        let mut catalog: Catalog = [
            "beta:First:1111111111111:1",
            "Alpha:A:2222222222222:1",
        ]
        .iter()
        .map(|line| codec::parse(line).unwrap())
        .collect();
        let mut stats = RunStatistics::default();

        add_book(&mut catalog, "BETA:Second:3333333333333:1", &storage, path, &mut stats)
            .await
            .unwrap();

        let authors: Vec<&str> = catalog.records().iter().map(|r| r.author()).collect();
        assert_eq!(authors, vec!["A", "First", "Second"]);
    }

    #[tokio::test]
    async fn test_invalid_entry_leaves_catalog_and_file_alone() {
        let path = Path::new("books.txt");
        let storage = MockStorage::with_file(path, "Dune:Frank Herbert:9780441013593:3\n").await;
        let mut catalog: Catalog = std::iter::once(
            codec::parse("Dune:Frank Herbert:9780441013593:3").unwrap(),
        )
        .collect();
        let mut stats = RunStatistics::default();

        let err = add_book(&mut catalog, "Title:Author:12345:3", &storage, path, &mut stats)
            .await
            .unwrap_err();

        assert!(matches!(err, TrackerError::IsbnLength { length: 5, .. }));
        assert_eq!(catalog.len(), 1);
        assert_eq!(stats.books_added, 0);
        assert_eq!(
            storage.get_file(path).await.unwrap(),
            "Dune:Frank Herbert:9780441013593:3\n"
        );
    }

    #[tokio::test]
    async fn test_write_failure_keeps_record_in_memory() {
        let path = Path::new("books.txt");
        let storage = ReadOnlyStorage::default();
        let mut catalog = Catalog::new();
        let mut stats = RunStatistics::default();

        let err = add_book(&mut catalog, "Emma:Jane Austen:9780141439587:2", &storage, path, &mut stats)
            .await
            .unwrap_err();

        assert!(matches!(err, TrackerError::Io(_)));
        assert_eq!(catalog.len(), 1);
        assert_eq!(stats.books_added, 0);
    }
}
