use crate::domain::{Book, Isbn};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Book repository port.
///
/// The store is the system of record for book entities. The lending engine
/// only reads books and requests updates (availability flips) through this
/// interface; it never owns the records.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Persist a new book.
    async fn save(&self, book: &Book) -> Result<()>;

    /// Look up a book by its ISBN.
    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Book>>;

    /// All books in the catalog.
    async fn find_all(&self) -> Result<Vec<Book>>;

    /// Books currently available for loan.
    async fn find_available(&self) -> Result<Vec<Book>>;

    /// Persist changes to an existing book, availability flips included.
    async fn update(&self, book: &Book) -> Result<()>;

    /// Remove a book from the catalog.
    async fn delete(&self, isbn: &Isbn) -> Result<()>;
}
