//! Loan endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::loan::{LoanDetails, LoanQuery},
};

use super::parse_id;

/// List loans joined to their user and copy (with book)
#[utoipa::path(
    get,
    path = "/loan",
    tag = "loans",
    params(LoanQuery),
    responses(
        (status = 200, description = "List of loans", body = Vec<LoanDetails>),
        (status = 400, description = "Malformed user id"),
        (status = 500, description = "Server error")
    )
)]
pub async fn list_loans(
    State(state): State<crate::AppState>,
    Query(query): Query<LoanQuery>,
) -> AppResult<Json<Vec<LoanDetails>>> {
    let user_id = match query.user.as_deref() {
        Some(raw) => Some(parse_id(raw, "user")?),
        None => None,
    };

    let loans = state.services.loans.list_loans(user_id).await?;
    Ok(Json(loans))
}
