//! User model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// User roles. DB stores as smallint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[repr(i16)]
pub enum UserType {
    Student = 0,
    Librarian = 1,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            UserType::Student => "Student",
            UserType::Librarian => "Librarian",
        };
        write!(f, "{}", label)
    }
}

/// Full user model (DB + API).
///
/// `student_id` only carries meaning for Student accounts and is nulled for
/// librarians on creation. `current_fine_total` is stored but never mutated
/// by any operation here. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub student_id: Option<String>,
    pub name: String,
    pub user_type: UserType,
    #[schema(value_type = String)]
    pub current_fine_total: Decimal,
    pub email: String,
    #[serde(skip)]
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub password: Option<String>,
    pub user_type: Option<UserType>,
    /// Required when user_type is Student
    pub student_id: Option<String>,
}

impl CreateUser {
    /// Check required-field presence and the Student/student_id rule.
    pub fn check_required(&self) -> AppResult<()> {
        if self.name.is_none()
            || self.email.is_none()
            || self.password.is_none()
            || self.user_type.is_none()
        {
            return Err(AppError::Validation(
                "Name, email, password and role are required".to_string(),
            ));
        }

        if self.user_type == Some(UserType::Student) && self.student_id.is_none() {
            return Err(AppError::Validation(
                "Student ID is required for students".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateUser {
        CreateUser {
            name: Some("Ada".to_string()),
            email: Some("ada@example.org".to_string()),
            password: Some("hunter2".to_string()),
            user_type: Some(UserType::Student),
            student_id: Some("S-1001".to_string()),
        }
    }

    #[test]
    fn all_fields_present_passes() {
        assert!(full_request().check_required().is_ok());
    }

    #[test]
    fn any_missing_core_field_is_rejected() {
        for strip in 0..4 {
            let mut req = full_request();
            match strip {
                0 => req.name = None,
                1 => req.email = None,
                2 => req.password = None,
                _ => req.user_type = None,
            }
            let err = req.check_required().unwrap_err();
            assert_eq!(
                err.to_string(),
                "Validation error: Name, email, password and role are required"
            );
        }
    }

    #[test]
    fn student_without_student_id_is_rejected() {
        let mut req = full_request();
        req.student_id = None;
        let err = req.check_required().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Student ID is required for students"
        );
    }

    #[test]
    fn librarian_does_not_need_a_student_id() {
        let mut req = full_request();
        req.user_type = Some(UserType::Librarian);
        req.student_id = None;
        assert!(req.check_required().is_ok());
    }

    #[test]
    fn user_type_uses_original_labels() {
        assert_eq!(serde_json::to_string(&UserType::Student).unwrap(), "\"Student\"");
        let parsed: UserType = serde_json::from_str("\"Librarian\"").unwrap();
        assert_eq!(parsed, UserType::Librarian);
    }
}
