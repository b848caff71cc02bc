use crate::domain::{Book, Isbn};
use crate::ports::book_store::{BookStore as BookStoreTrait, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// PostgreSQLの行データをBookに変換する
fn map_row_to_book(row: &PgRow) -> Book {
    Book {
        isbn: Isbn::new(row.get::<String, _>("isbn")),
        title: row.get("title"),
        author: row.get("author"),
        publication_year: row.get("publication_year"),
        available: row.get("available"),
    }
}

/// BookStoreのPostgreSQL実装
pub struct BookStore {
    pool: PgPool,
}

impl BookStore {
    /// PostgreSQLコネクションプールから新しいBookStoreを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStoreTrait for BookStore {
    async fn save(&self, book: &Book) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO books (isbn, title, author, publication_year, available)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(book.isbn.as_str())
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.publication_year)
        .bind(book.available)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_isbn(&self, isbn: &Isbn) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            SELECT isbn, title, author, publication_year, available
            FROM books
            WHERE isbn = $1
            "#,
        )
        .bind(isbn.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(map_row_to_book))
    }

    async fn find_all(&self) -> Result<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT isbn, title, author, publication_year, available
            FROM books
            ORDER BY title ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_book).collect())
    }

    async fn find_available(&self) -> Result<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT isbn, title, author, publication_year, available
            FROM books
            WHERE available = TRUE
            ORDER BY title ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(map_row_to_book).collect())
    }

    async fn update(&self, book: &Book) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE books
            SET title = $2,
                author = $3,
                publication_year = $4,
                available = $5
            WHERE isbn = $1
            "#,
        )
        .bind(book.isbn.as_str())
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.publication_year)
        .bind(book.available)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, isbn: &Isbn) -> Result<()> {
        sqlx::query("DELETE FROM books WHERE isbn = $1")
            .bind(isbn.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
