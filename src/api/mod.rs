//! API handlers for SunnyBooks REST endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod reservations;
pub mod users;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
};

use crate::error::{AppError, AppResult};

/// JSON body extractor that keeps deserialization failures inside the API's
/// error contract: a rejected body becomes a 400 with a `{"message"}` JSON
/// body instead of axum's plain-text 422.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(AppJson(value))
    }
}

/// Parse a raw identifier from a path or query string.
///
/// A value that is not a well-formed record key is a client error, distinct
/// from a well-formed key that addresses no record (not-found).
pub(crate) fn parse_id(raw: &str, entity: &str) -> AppResult<i32> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} id format", entity)))
}

#[cfg(test)]
mod tests {
    use super::{parse_id, AppJson};
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::{header, Request, StatusCode};
    use axum::response::IntoResponse;

    use crate::models::reservation::CreateReservation;

    #[test]
    fn well_formed_ids_parse() {
        assert_eq!(parse_id("42", "book").unwrap(), 42);
        assert_eq!(parse_id(" 7 ", "user").unwrap(), 7);
    }

    #[test]
    fn malformed_ids_are_a_client_error_naming_the_entity() {
        let err = parse_id("abc", "reservation").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Bad request: Invalid reservation id format"
        );
    }

    #[tokio::test]
    async fn body_rejections_keep_the_json_error_contract() {
        // A reservation body whose book id is a string, not an integer.
        let request = Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"book":"abc","user":1,"reserve_date":"2025-11-01T00:00:00Z","queue_position":1}"#,
            ))
            .unwrap();

        let err = AppJson::<CreateReservation>::from_request(request, &())
            .await
            .err()
            .expect("malformed body must be rejected");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["message"].as_str().unwrap().contains("book"));
    }

    #[tokio::test]
    async fn well_formed_bodies_pass_through() {
        let request = Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"book":1,"user":2,"reserve_date":"2025-11-01T00:00:00Z","queue_position":3}"#,
            ))
            .unwrap();

        let AppJson(parsed) = AppJson::<CreateReservation>::from_request(request, &())
            .await
            .expect("valid body must parse");
        assert_eq!(parsed.book, Some(1));
        assert_eq!(parsed.queue_position, Some(3));
    }
}
