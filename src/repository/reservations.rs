//! Reservations repository for database operations

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::Book,
        reservation::{
            NewReservation, Reservation, ReservationDetails, ReservationStatus, UpdateReservation,
        },
        user::{User, UserType},
    },
};

const DETAILS_SELECT: &str = r#"
    SELECT r.id, r.reserve_date, r.queue_position, r.status, r.pickup_deadline,
           r.created_at, r.updated_at,
           b.id AS book_id, b.isbn, b.title, b.description, b.author,
           b.category, b.total_copies, b.cover_image,
           b.created_at AS book_created_at, b.updated_at AS book_updated_at,
           u.id AS user_id, u.student_id, u.name, u.user_type,
           u.current_fine_total, u.email,
           u.created_at AS user_created_at, u.updated_at AS user_updated_at
    FROM reservations r
    JOIN books b ON r.book_id = b.id
    JOIN users u ON r.user_id = u.id
"#;

fn details_from_row(row: &PgRow) -> ReservationDetails {
    ReservationDetails {
        id: row.get("id"),
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
        reserve_date: row.get("reserve_date"),
        queue_position: row.get("queue_position"),
        status: row.get::<ReservationStatus, _>("status"),
        pickup_deadline: row.get("pickup_deadline"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[derive(Clone)]
pub struct ReservationsRepository {
    pool: Pool<Postgres>,
}

impl ReservationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List reservations joined to their book and user, optionally filtered
    /// by user.
    pub async fn list(&self, user_id: Option<i32>) -> AppResult<Vec<ReservationDetails>> {
        let rows = match user_id {
            Some(user_id) => {
                let query = format!("{} WHERE r.user_id = $1 ORDER BY r.id", DETAILS_SELECT);
                sqlx::query(&query).bind(user_id).fetch_all(&self.pool).await?
            }
            None => {
                let query = format!("{} ORDER BY r.id", DETAILS_SELECT);
                sqlx::query(&query).fetch_all(&self.pool).await?
            }
        };

        Ok(rows.iter().map(details_from_row).collect())
    }

    /// Get a reservation by ID, joined to its book and user
    pub async fn get_details(&self, id: i32) -> AppResult<ReservationDetails> {
        let query = format!("{} WHERE r.id = $1", DETAILS_SELECT);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        Ok(details_from_row(&row))
    }

    /// Get the raw reservation record by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))
    }

    /// Create a new reservation
    pub async fn create(&self, new: &NewReservation) -> AppResult<Reservation> {
        let now = Utc::now();

        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (
                book_id, user_id, reserve_date, queue_position, status,
                pickup_deadline, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING *
            "#,
        )
        .bind(new.book_id)
        .bind(new.user_id)
        .bind(new.reserve_date)
        .bind(new.queue_position)
        .bind(new.status)
        .bind(new.pickup_deadline)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, "book/user", "Reservation"))?;

        Ok(reservation)
    }

    /// Update a reservation: only the provided fields are replaced
    pub async fn update(&self, id: i32, update: &UpdateReservation) -> AppResult<Reservation> {
        let now = Utc::now();

        // Build dynamic update query
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut param_idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, param_idx));
                    param_idx += 1;
                }
            };
        }

        add_field!(update.book, "book_id");
        add_field!(update.user, "user_id");
        add_field!(update.reserve_date, "reserve_date");
        add_field!(update.queue_position, "queue_position");
        add_field!(update.status, "status");
        add_field!(update.pickup_deadline, "pickup_deadline");

        let query = format!(
            "UPDATE reservations SET {} WHERE id = {}",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(update.book);
        bind_field!(update.user);
        bind_field!(update.reserve_date);
        bind_field!(update.queue_position);
        bind_field!(update.status);
        bind_field!(update.pickup_deadline);

        builder
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_write(e, "book/user", "Reservation"))?;

        self.get_by_id(id).await
    }

    /// Delete a reservation, returning the removed record
    pub async fn delete(&self, id: i32) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>("DELETE FROM reservations WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))
    }
}
