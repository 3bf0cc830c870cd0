//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

/// Turn a free-text needle into a LIKE pattern, escaping the wildcard
/// characters so they match literally.
fn like_pattern(q: &str) -> String {
    let escaped = q
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List books, optionally filtered by a free-text needle matched
    /// case-insensitively against title, author, category or ISBN. A blank
    /// needle matches everything.
    pub async fn search(&self, q: Option<&str>) -> AppResult<Vec<Book>> {
        let q = q.map(str::trim).unwrap_or("");

        let books = if q.is_empty() {
            sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
                .fetch_all(&self.pool)
                .await?
        } else {
            sqlx::query_as::<_, Book>(
                r#"
                SELECT * FROM books
                WHERE title ILIKE $1
                   OR author ILIKE $1
                   OR category ILIKE $1
                   OR isbn ILIKE $1
                ORDER BY id
                "#,
            )
            .bind(like_pattern(q))
            .fetch_all(&self.pool)
            .await?
        };

        Ok(books)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn wraps_needle_in_wildcards() {
        assert_eq!(like_pattern("rust"), "%rust%");
    }

    #[test]
    fn escapes_like_metacharacters() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c\\d"), "%c\\\\d%");
    }
}
