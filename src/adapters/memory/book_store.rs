use crate::domain::{Book, Isbn};
use crate::ports::book_store::{BookStore as BookStoreTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// BookStoreのインメモリ実装
///
/// Mutex<HashMap>で書籍を保持する。テストダブルとして、また永続化を
/// 必要としない起動モードのバックエンドとして使用する。
pub struct BookStore {
    books: Mutex<HashMap<Isbn, Book>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookStoreTrait for BookStore {
    async fn save(&self, book: &Book) -> Result<()> {
        self.books
            .lock()
            .unwrap()
            .insert(book.isbn.clone(), book.clone());
        Ok(())
    }

    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Book>> {
        Ok(self.books.lock().unwrap().get(isbn).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Book>> {
        Ok(self.books.lock().unwrap().values().cloned().collect())
    }

    async fn find_available(&self) -> Result<Vec<Book>> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .values()
            .filter(|book| book.available)
            .cloned()
            .collect())
    }

    async fn update(&self, book: &Book) -> Result<()> {
        self.books
            .lock()
            .unwrap()
            .insert(book.isbn.clone(), book.clone());
        Ok(())
    }

    async fn delete(&self, isbn: &Isbn) -> Result<()> {
        self.books.lock().unwrap().remove(isbn);
        Ok(())
    }
}
