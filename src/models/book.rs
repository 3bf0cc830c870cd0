//! Book (catalog entry) model and the availability resolver

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use super::copy::{BookCopy, CopyStatus};

/// Derived book-level availability, computed from copy statuses at read
/// time and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AvailabilityStatus {
    Available,
    Reserved,
    #[serde(rename = "On Loan")]
    OnLoan,
    Unavailable,
}

impl AvailabilityStatus {
    /// Derive a book's availability from its copies.
    ///
    /// First match wins, in priority order: one Available copy makes the
    /// whole book Available regardless of how many others are out; with no
    /// Available copy a Reserved one wins over On Loan; a book with no
    /// copies at all is Unavailable. The single-signal resolution (not a
    /// proportional one) is the documented contract.
    pub fn from_copies<I>(copies: I) -> Self
    where
        I: IntoIterator<Item = CopyStatus>,
    {
        let mut any_reserved = false;
        let mut any_on_loan = false;

        for status in copies {
            match status {
                CopyStatus::Available => return AvailabilityStatus::Available,
                CopyStatus::Reserved => any_reserved = true,
                CopyStatus::OnLoan => any_on_loan = true,
            }
        }

        if any_reserved {
            AvailabilityStatus::Reserved
        } else if any_on_loan {
            AvailabilityStatus::OnLoan
        } else {
            AvailabilityStatus::Unavailable
        }
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AvailabilityStatus::Available => "Available",
            AvailabilityStatus::Reserved => "Reserved",
            AvailabilityStatus::OnLoan => "On Loan",
            AvailabilityStatus::Unavailable => "Unavailable",
        };
        write!(f, "{}", label)
    }
}

/// Full book model (DB + API).
///
/// `total_copies` is a denormalized count; it is not reconciled against the
/// actual number of copy records.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub isbn: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub category: String,
    pub total_copies: i32,
    pub cover_image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Book with derived availability, for list views
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookWithStatus {
    #[serde(flatten)]
    pub book: Book,
    pub status: AvailabilityStatus,
}

/// Book with derived availability and its copies, for the detail view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookDetails {
    #[serde(flatten)]
    pub book: Book,
    pub status: AvailabilityStatus,
    pub copies: Vec<BookCopy>,
}

/// Book list query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct BookQuery {
    /// Free-text filter matched against title, author, category and ISBN
    pub q: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(statuses: &[CopyStatus]) -> AvailabilityStatus {
        AvailabilityStatus::from_copies(statuses.iter().copied())
    }

    #[test]
    fn no_copies_is_unavailable() {
        assert_eq!(derive(&[]), AvailabilityStatus::Unavailable);
    }

    #[test]
    fn one_available_copy_wins_over_everything() {
        // 9 copies out, 1 on the shelf: the book reports Available.
        let mut statuses = vec![CopyStatus::OnLoan; 9];
        statuses.push(CopyStatus::Available);
        assert_eq!(derive(&statuses), AvailabilityStatus::Available);

        assert_eq!(
            derive(&[CopyStatus::Reserved, CopyStatus::Available, CopyStatus::OnLoan]),
            AvailabilityStatus::Available
        );
    }

    #[test]
    fn reserved_wins_over_on_loan() {
        assert_eq!(
            derive(&[CopyStatus::OnLoan, CopyStatus::Reserved, CopyStatus::OnLoan]),
            AvailabilityStatus::Reserved
        );
    }

    #[test]
    fn only_on_loan_copies() {
        assert_eq!(
            derive(&[CopyStatus::OnLoan, CopyStatus::OnLoan]),
            AvailabilityStatus::OnLoan
        );
    }

    #[test]
    fn serializes_with_original_labels() {
        assert_eq!(
            serde_json::to_string(&AvailabilityStatus::OnLoan).unwrap(),
            "\"On Loan\""
        );
        assert_eq!(
            serde_json::to_string(&AvailabilityStatus::Unavailable).unwrap(),
            "\"Unavailable\""
        );
    }
}
