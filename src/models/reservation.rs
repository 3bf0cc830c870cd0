//! Reservation model and queue lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};

use super::book::Book;
use super::user::User;

/// Reservation lifecycle status. DB stores as smallint.
///
/// Pending is the only non-terminal state; Collected, Cancelled and Expired
/// are terminal and admit no further transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[repr(i16)]
pub enum ReservationStatus {
    Pending = 0,
    Collected = 1,
    Cancelled = 2,
    Expired = 3,
}

impl ReservationStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReservationStatus::Pending)
    }

    /// Whether moving to `next` is a legal lifecycle transition.
    ///
    /// A no-op (same status) is always allowed so that full-document
    /// updates which restate the current status keep working.
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        *self == next || !self.is_terminal()
    }
}

impl Default for ReservationStatus {
    fn default() -> Self {
        ReservationStatus::Pending
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ReservationStatus::Pending => "Pending",
            ReservationStatus::Collected => "Collected",
            ReservationStatus::Cancelled => "Cancelled",
            ReservationStatus::Expired => "Expired",
        };
        write!(f, "{}", label)
    }
}

/// Full reservation model (DB + API).
///
/// `queue_position` orders a book's pending reservations. Positions are
/// caller-supplied and are never renumbered when earlier reservations leave
/// the queue; neither uniqueness nor contiguity per book is enforced.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reservation {
    pub id: i32,
    pub book_id: i32,
    pub user_id: i32,
    pub reserve_date: DateTime<Utc>,
    pub queue_position: i32,
    pub status: ReservationStatus,
    pub pickup_deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reservation joined to its book and user, for read endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReservationDetails {
    pub id: i32,
    pub book: Book,
    pub user: User,
    pub reserve_date: DateTime<Utc>,
    pub queue_position: i32,
    pub status: ReservationStatus,
    pub pickup_deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create reservation request.
///
/// Required fields are optional at the serde level so that a missing field
/// produces the endpoint's own validation message instead of a generic
/// body-rejection error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReservation {
    /// Book ID
    pub book: Option<i32>,
    /// User ID
    pub user: Option<i32>,
    pub reserve_date: Option<DateTime<Utc>>,
    pub queue_position: Option<i32>,
    /// Optional; defaults to Pending
    pub status: Option<ReservationStatus>,
    pub pickup_deadline: Option<DateTime<Utc>>,
}

/// A reservation request that passed required-field validation
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub book_id: i32,
    pub user_id: i32,
    pub reserve_date: DateTime<Utc>,
    pub queue_position: i32,
    pub status: ReservationStatus,
    pub pickup_deadline: Option<DateTime<Utc>>,
}

impl CreateReservation {
    /// Check required-field presence, first missing field wins.
    pub fn validate(&self) -> AppResult<NewReservation> {
        let book_id = self
            .book
            .ok_or_else(|| AppError::Validation("book is required".to_string()))?;
        let user_id = self
            .user
            .ok_or_else(|| AppError::Validation("user is required".to_string()))?;
        let reserve_date = self
            .reserve_date
            .ok_or_else(|| AppError::Validation("reserve_date is required".to_string()))?;
        let queue_position = self
            .queue_position
            .ok_or_else(|| AppError::Validation("queue_position is required".to_string()))?;

        Ok(NewReservation {
            book_id,
            user_id,
            reserve_date,
            queue_position,
            status: self.status.unwrap_or_default(),
            pickup_deadline: self.pickup_deadline,
        })
    }
}

/// Update reservation request: any provided field replaces the stored one,
/// absent fields are left untouched.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateReservation {
    pub book: Option<i32>,
    pub user: Option<i32>,
    pub reserve_date: Option<DateTime<Utc>>,
    pub queue_position: Option<i32>,
    pub status: Option<ReservationStatus>,
    pub pickup_deadline: Option<DateTime<Utc>>,
}

/// Reservation list query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ReservationQuery {
    /// Filter by user ID
    pub user: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_reach_every_terminal_state() {
        for next in [
            ReservationStatus::Collected,
            ReservationStatus::Cancelled,
            ReservationStatus::Expired,
        ] {
            assert!(ReservationStatus::Pending.can_transition_to(next));
        }
    }

    #[test]
    fn terminal_states_admit_no_transition() {
        for from in [
            ReservationStatus::Collected,
            ReservationStatus::Cancelled,
            ReservationStatus::Expired,
        ] {
            assert!(from.is_terminal());
            assert!(!from.can_transition_to(ReservationStatus::Pending));
            for next in [
                ReservationStatus::Collected,
                ReservationStatus::Cancelled,
                ReservationStatus::Expired,
            ] {
                assert_eq!(from.can_transition_to(next), from == next);
            }
        }
    }

    #[test]
    fn restating_the_current_status_is_allowed() {
        assert!(ReservationStatus::Collected.can_transition_to(ReservationStatus::Collected));
        assert!(ReservationStatus::Pending.can_transition_to(ReservationStatus::Pending));
    }

    #[test]
    fn create_validation_reports_first_missing_field() {
        let mut req = CreateReservation {
            book: None,
            user: None,
            reserve_date: None,
            queue_position: None,
            status: None,
            pickup_deadline: None,
        };
        let err = req.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: book is required");

        req.book = Some(1);
        let err = req.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: user is required");

        req.user = Some(2);
        let err = req.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: reserve_date is required");

        req.reserve_date = Some(Utc::now());
        let err = req.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: queue_position is required");

        req.queue_position = Some(1);
        let new = req.validate().unwrap();
        assert_eq!(new.book_id, 1);
        assert_eq!(new.queue_position, 1);
        // Status defaults to Pending when omitted.
        assert_eq!(new.status, ReservationStatus::Pending);
    }
}
