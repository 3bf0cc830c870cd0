//! Book copy (physical item) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Status of a single physical copy. DB stores as smallint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[repr(i16)]
pub enum CopyStatus {
    Available = 0,
    #[serde(rename = "On Loan")]
    OnLoan = 1,
    Reserved = 2,
}

impl Default for CopyStatus {
    fn default() -> Self {
        CopyStatus::Available
    }
}

impl std::fmt::Display for CopyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CopyStatus::Available => "Available",
            CopyStatus::OnLoan => "On Loan",
            CopyStatus::Reserved => "Reserved",
        };
        write!(f, "{}", label)
    }
}

/// Full book copy model (DB + API).
///
/// `copy_id` is the externally visible copy label (barcode) and is unique
/// across the collection; `id` is the internal key. A book's `total_copies`
/// counter is not reconciled against the actual copy records.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookCopy {
    pub id: i32,
    pub copy_id: String,
    pub book_id: i32,
    pub shelf_location: String,
    pub status: CopyStatus,
    pub last_seen_zone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
