//! Reservation queue service

use crate::{
    error::{AppError, AppResult},
    models::reservation::{
        CreateReservation, Reservation, ReservationDetails, UpdateReservation,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct ReservationsService {
    repository: Repository,
}

impl ReservationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List reservations, optionally filtered by user
    pub async fn list(&self, user_id: Option<i32>) -> AppResult<Vec<ReservationDetails>> {
        self.repository.reservations.list(user_id).await
    }

    /// Get a reservation with its book and user
    pub async fn get(&self, id: i32) -> AppResult<ReservationDetails> {
        self.repository.reservations.get_details(id).await
    }

    /// Create a reservation.
    ///
    /// `queue_position` is taken from the caller as-is; positions are never
    /// recomputed or renumbered server-side.
    pub async fn create(&self, request: CreateReservation) -> AppResult<Reservation> {
        let new = request.validate()?;
        self.repository.reservations.create(&new).await
    }

    /// Update a reservation, enforcing the status lifecycle: the three
    /// terminal states (Collected, Cancelled, Expired) admit no further
    /// transition.
    pub async fn update(&self, id: i32, update: UpdateReservation) -> AppResult<Reservation> {
        let current = self.repository.reservations.get_by_id(id).await?;

        if let Some(next) = update.status {
            if !current.status.can_transition_to(next) {
                return Err(AppError::BusinessRule(format!(
                    "Cannot change reservation status from {} to {}",
                    current.status, next
                )));
            }
        }

        self.repository.reservations.update(id, &update).await
    }

    /// Delete a reservation, returning the removed record. Remaining queue
    /// positions for the book are left as they are.
    pub async fn delete(&self, id: i32) -> AppResult<Reservation> {
        self.repository.reservations.delete(id).await
    }
}
