//! In-memory book catalog.
//!
//! Lookups return the first book with a matching id; ids are not checked for
//! uniqueness on insert or update.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::error::LibraryError;
use super::models::{Book, BookDetail, BookSummary, seed_books};

const BOOK_NOT_FOUND: LibraryError = LibraryError::NotFound("Book not found");

#[derive(Debug)]
pub struct LibraryStore {
    books: RwLock<Vec<Book>>,
}

impl LibraryStore {
    pub fn seeded() -> Self {
        Self::with_books(seed_books())
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Book>> {
        self.books.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Book>> {
        self.books.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append as given, duplicates included.
    pub fn create(&self, book: Book) -> BookDetail {
        self.write().push(book.clone());
        book.into()
    }

    pub fn list(&self) -> Vec<BookSummary> {
        self.read().iter().map(BookSummary::from).collect()
    }

    pub fn get(&self, book_id: i64) -> Result<BookDetail, LibraryError> {
        self.read()
            .iter()
            .find(|b| b.id == book_id)
            .cloned()
            .map(BookDetail::from)
            .ok_or(BOOK_NOT_FOUND)
    }

    /// Replace the whole record found at `book_id`. The new record keeps
    /// its own id even when it differs from `book_id`.
    pub fn update(&self, book_id: i64, book: Book) -> Result<BookDetail, LibraryError> {
        let mut books = self.write();
        let slot = books
            .iter_mut()
            .find(|b| b.id == book_id)
            .ok_or(BOOK_NOT_FOUND)?;
        *slot = book.clone();
        Ok(book.into())
    }

    pub fn delete(&self, book_id: i64) -> Result<Book, LibraryError> {
        let mut books = self.write();
        let pos = books
            .iter()
            .position(|b| b.id == book_id)
            .ok_or(BOOK_NOT_FOUND)?;
        Ok(books.remove(pos))
    }
}

impl Default for LibraryStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune(id: i64) -> Book {
        Book::new(id, "Dune", "Frank Herbert", "Desert planet.", 1965)
    }

    #[test]
    fn test_list_seeded_summaries() {
        let store = LibraryStore::seeded();
        let list = store.list();
        assert_eq!(
            list,
            vec![
                BookSummary {
                    title: "1984".to_string(),
                    author: "George Orwell".to_string()
                },
                BookSummary {
                    title: "The Hobbit".to_string(),
                    author: "J.R.R. Tolkien".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_list_empty_store_is_ok() {
        let store = LibraryStore::with_books(Vec::new());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_create_returns_detail() {
        let store = LibraryStore::seeded();
        let detail = store.create(dune(3));
        assert_eq!(detail.id, 3);
        assert_eq!(detail.year, 1965);
        assert_eq!(store.list().len(), 3);
        assert_eq!(store.get(3).unwrap(), detail);
    }

    #[test]
    fn test_create_allows_duplicate_ids() {
        let store = LibraryStore::seeded();
        store.create(dune(1));
        assert_eq!(store.list().len(), 3);
        // first match wins
        assert_eq!(store.get(1).unwrap().title, "1984");
    }

    #[test]
    fn test_get_missing() {
        let store = LibraryStore::seeded();
        assert_eq!(store.get(42), Err(LibraryError::NotFound("Book not found")));
    }

    #[test]
    fn test_update_replaces_whole_record() {
        let store = LibraryStore::seeded();
        let detail = store.update(2, dune(2)).unwrap();
        assert_eq!(detail.title, "Dune");
        assert_eq!(detail.description, "Desert planet.");
        assert_eq!(store.get(2).unwrap(), detail);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_update_with_mismatched_body_id() {
        let store = LibraryStore::seeded();
        let detail = store.update(1, dune(10)).unwrap();
        assert_eq!(detail.id, 10);

        // position of book 1 now holds book 10
        assert!(store.get(1).is_err());
        assert_eq!(store.get(10).unwrap().title, "Dune");
        assert_eq!(store.list()[0].title, "Dune");
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_update_missing() {
        let store = LibraryStore::seeded();
        assert!(matches!(
            store.update(9, dune(9)),
            Err(LibraryError::NotFound(_))
        ));
        assert!(store.get(9).is_err());
    }

    #[test]
    fn test_delete() {
        let store = LibraryStore::seeded();
        let removed = store.delete(1).unwrap();
        assert_eq!(removed.title, "1984");
        assert_eq!(store.list().len(), 1);
        assert!(store.get(1).is_err());
        assert_eq!(store.delete(1), Err(LibraryError::NotFound("Book not found")));
    }
}
