//! Loans repository for database operations

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres, Row};

use crate::{
    error::AppResult,
    models::{
        book::Book,
        copy::CopyStatus,
        loan::{LoanCopy, LoanDetails},
        user::{User, UserType},
    },
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List loans joined to their user and copy (with the copy's book),
    /// optionally filtered by user.
    pub async fn list(&self, user_id: Option<i32>) -> AppResult<Vec<LoanDetails>> {
        let base = r#"
            SELECT l.id, l.loan_date, l.due_date, l.date_returned,
                   c.id AS copy_pk, c.copy_id, c.shelf_location,
                   c.status AS copy_status, c.last_seen_zone,
                   b.id AS book_id, b.isbn, b.title, b.description, b.author,
                   b.category, b.total_copies, b.cover_image,
                   b.created_at AS book_created_at, b.updated_at AS book_updated_at,
                   u.id AS user_id, u.student_id, u.name, u.user_type,
                   u.current_fine_total, u.email,
                   u.created_at AS user_created_at, u.updated_at AS user_updated_at
            FROM loans l
            JOIN book_copies c ON l.copy_id = c.id
            JOIN books b ON c.book_id = b.id
            JOIN users u ON l.user_id = u.id
        "#;

        let rows = match user_id {
            Some(user_id) => {
                let query = format!("{} WHERE l.user_id = $1 ORDER BY l.loan_date", base);
                sqlx::query(&query).bind(user_id).fetch_all(&self.pool).await?
            }
            None => {
                let query = format!("{} ORDER BY l.loan_date", base);
                sqlx::query(&query).fetch_all(&self.pool).await?
            }
        };

        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            result.push(LoanDetails {
                id: row.get("id"),
                book_copy: LoanCopy {
                    id: row.get("copy_pk"),
                    copy_id: row.get("copy_id"),
                    shelf_location: row.get("shelf_location"),
                    status: row.get::<CopyStatus, _>("copy_status"),
                    last_seen_zone: row.get("last_seen_zone"),
                    book: Book {
                        id: row.get("book_id"),
                        isbn: row.get("isbn"),
                        title: row.get("title"),
                        description: row.get("description"),
                        author: row.get("author"),
                        category: row.get("category"),
                        total_copies: row.get("total_copies"),
                        cover_image: row.get("cover_image"),
                        created_at: row.get::<DateTime<Utc>, _>("book_created_at"),
                        updated_at: row.get::<DateTime<Utc>, _>("book_updated_at"),
                    },
                },
                user: User {
                    id: row.get("user_id"),
                    student_id: row.get("student_id"),
                    name: row.get("name"),
                    user_type: row.get::<UserType, _>("user_type"),
                    current_fine_total: row.get::<Decimal, _>("current_fine_total"),
                    email: row.get("email"),
                    password_hash: None,
                    created_at: row.get::<DateTime<Utc>, _>("user_created_at"),
                    updated_at: row.get::<DateTime<Utc>, _>("user_updated_at"),
                },
                loan_date: row.get("loan_date"),
                due_date: row.get("due_date"),
                date_returned: row.get("date_returned"),
            });
        }

        Ok(result)
    }
}
