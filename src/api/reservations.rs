//! Reservation endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::reservation::{
        CreateReservation, Reservation, ReservationDetails, ReservationQuery, UpdateReservation,
    },
};

use super::{parse_id, AppJson};

/// Delete response carrying the removed record
#[derive(Serialize, ToSchema)]
pub struct DeleteReservationResponse {
    pub message: String,
    pub reservation: Reservation,
}

/// List reservations joined to their book and user
#[utoipa::path(
    get,
    path = "/reservation",
    tag = "reservations",
    params(ReservationQuery),
    responses(
        (status = 200, description = "List of reservations", body = Vec<ReservationDetails>),
        (status = 400, description = "Malformed user id"),
        (status = 500, description = "Server error")
    )
)]
pub async fn list_reservations(
    State(state): State<crate::AppState>,
    Query(query): Query<ReservationQuery>,
) -> AppResult<Json<Vec<ReservationDetails>>> {
    let user_id = match query.user.as_deref() {
        Some(raw) => Some(parse_id(raw, "user")?),
        None => None,
    };

    let reservations = state.services.reservations.list(user_id).await?;
    Ok(Json(reservations))
}

/// Get a reservation by ID
#[utoipa::path(
    get,
    path = "/reservation/{id}",
    tag = "reservations",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation found", body = ReservationDetails),
        (status = 400, description = "Malformed reservation id"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn get_reservation(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ReservationDetails>> {
    let id = parse_id(&id, "reservation")?;
    let reservation = state.services.reservations.get(id).await?;
    Ok(Json(reservation))
}

/// Create a new reservation
#[utoipa::path(
    post,
    path = "/reservation",
    tag = "reservations",
    request_body = CreateReservation,
    responses(
        (status = 201, description = "Reservation created", body = Reservation),
        (status = 400, description = "Missing field or bad book/user reference")
    )
)]
pub async fn create_reservation(
    State(state): State<crate::AppState>,
    AppJson(request): AppJson<CreateReservation>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    let created = state.services.reservations.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a reservation
#[utoipa::path(
    put,
    path = "/reservation/{id}",
    tag = "reservations",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = UpdateReservation,
    responses(
        (status = 200, description = "Reservation updated", body = Reservation),
        (status = 400, description = "Malformed reservation id"),
        (status = 404, description = "Reservation not found"),
        (status = 422, description = "Illegal status transition")
    )
)]
pub async fn update_reservation(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    AppJson(request): AppJson<UpdateReservation>,
) -> AppResult<Json<Reservation>> {
    let id = parse_id(&id, "reservation")?;
    let updated = state.services.reservations.update(id, request).await?;
    Ok(Json(updated))
}

/// Delete a reservation
#[utoipa::path(
    delete,
    path = "/reservation/{id}",
    tag = "reservations",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation deleted", body = DeleteReservationResponse),
        (status = 400, description = "Malformed reservation id"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn delete_reservation(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteReservationResponse>> {
    let id = parse_id(&id, "reservation")?;
    let removed = state.services.reservations.delete(id).await?;

    Ok(Json(DeleteReservationResponse {
        message: "Reservation deleted successfully".to_string(),
        reservation: removed,
    }))
}
