//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans, reservations, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SunnyBooks API",
        version = "1.0.0",
        description = "API documentation for SunnyBooks project"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        // Loans
        loans::list_loans,
        // Reservations
        reservations::list_reservations,
        reservations::get_reservation,
        reservations::create_reservation,
        reservations::update_reservation,
        reservations::delete_reservation,
        // Users
        users::list_users,
        users::create_user,
    ),
    components(
        schemas(
            health::HealthResponse,
            reservations::DeleteReservationResponse,
            crate::error::ErrorResponse,
            crate::models::book::Book,
            crate::models::book::BookWithStatus,
            crate::models::book::BookDetails,
            crate::models::book::AvailabilityStatus,
            crate::models::copy::BookCopy,
            crate::models::copy::CopyStatus,
            crate::models::loan::LoanCopy,
            crate::models::loan::LoanDetails,
            crate::models::reservation::Reservation,
            crate::models::reservation::ReservationDetails,
            crate::models::reservation::ReservationStatus,
            crate::models::reservation::CreateReservation,
            crate::models::reservation::UpdateReservation,
            crate::models::user::User,
            crate::models::user::UserType,
            crate::models::user::CreateUser,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "books", description = "Book catalog with derived availability"),
        (name = "loans", description = "Loan listing"),
        (name = "reservations", description = "Reservation queue"),
        (name = "users", description = "User management")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router, served at /api-docs
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
