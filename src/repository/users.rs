//! Users repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::user::{User, UserType},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all users
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    /// Check if email already exists
    pub async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(email) = LOWER($1))")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Create a new user
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        user_type: UserType,
        student_id: Option<&str>,
    ) -> AppResult<User> {
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (
                name, email, password_hash, user_type, student_id,
                current_fine_total, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, 0, $6, $6)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(user_type)
        .bind(student_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, "user", "Email"))?;

        Ok(user)
    }
}
