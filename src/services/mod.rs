//! Business logic services

pub mod catalog;
pub mod loans;
pub mod reservations;
pub mod users;

use crate::{error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub loans: loans::LoansService,
    pub reservations: reservations::ReservationsService,
    pub users: users::UsersService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            loans: loans::LoansService::new(repository.clone()),
            reservations: reservations::ReservationsService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            repository,
        }
    }

    /// Round-trip the database connection, for the readiness probe
    pub async fn ping_database(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.repository.pool)
            .await?;

        Ok(())
    }
}
