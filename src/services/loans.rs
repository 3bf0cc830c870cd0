//! Loan listing service

use crate::{error::AppResult, models::loan::LoanDetails, repository::Repository};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List loans with their user and copy details, optionally filtered by
    /// user.
    pub async fn list_loans(&self, user_id: Option<i32>) -> AppResult<Vec<LoanDetails>> {
        self.repository.loans.list(user_id).await
    }
}
