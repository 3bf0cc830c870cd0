//! Loan model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::book::Book;
use super::copy::CopyStatus;
use super::user::User;

/// A loan's copy joined to its book, for display
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoanCopy {
    pub id: i32,
    pub copy_id: String,
    pub shelf_location: String,
    pub status: CopyStatus,
    pub last_seen_zone: Option<String>,
    pub book: Book,
}

/// Loan joined to its user and copy (with book), for the list endpoint.
///
/// `date_returned` null means the copy is currently out.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoanDetails {
    pub id: i32,
    pub book_copy: LoanCopy,
    pub user: User,
    pub loan_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub date_returned: Option<DateTime<Utc>>,
}

/// Loan list query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct LoanQuery {
    /// Filter by user ID
    pub user: Option<String>,
}
