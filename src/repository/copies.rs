//! Book copies repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::copy::BookCopy};

#[derive(Clone)]
pub struct CopiesRepository {
    pool: Pool<Postgres>,
}

impl CopiesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List the copies of a single book
    pub async fn list_by_book(&self, book_id: i32) -> AppResult<Vec<BookCopy>> {
        let copies = sqlx::query_as::<_, BookCopy>(
            "SELECT * FROM book_copies WHERE book_id = $1 ORDER BY copy_id",
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(copies)
    }

    /// Batch-load the copies of a set of books in one query, for the list
    /// view (keyed join instead of one lookup per book).
    pub async fn list_by_books(&self, book_ids: &[i32]) -> AppResult<Vec<BookCopy>> {
        if book_ids.is_empty() {
            return Ok(Vec::new());
        }

        let copies = sqlx::query_as::<_, BookCopy>(
            "SELECT * FROM book_copies WHERE book_id = ANY($1) ORDER BY book_id, copy_id",
        )
        .bind(book_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(copies)
    }
}
