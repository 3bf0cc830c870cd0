//! User management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, User, UserType},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all users
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    /// Create a new user.
    ///
    /// Passwords are stored as argon2 hashes, never as plain text.
    /// `student_id` is only kept for Student accounts.
    pub async fn create_user(&self, request: CreateUser) -> AppResult<User> {
        request.check_required()?;
        request
            .validate()
            .map_err(|_| AppError::Validation("Invalid email format".to_string()))?;

        // check_required guarantees these are present
        let name = request.name.as_deref().unwrap_or_default();
        let email = request.email.as_deref().unwrap_or_default();
        let password = request.password.as_deref().unwrap_or_default();
        let user_type = request.user_type.unwrap_or(UserType::Student);

        if self.repository.users.email_exists(email).await? {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let password_hash = hash_password(password)?;

        let student_id = match user_type {
            UserType::Student => request.student_id.as_deref(),
            UserType::Librarian => None,
        };

        self.repository
            .users
            .create(name, email, &password_hash, user_type, student_id)
            .await
    }
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::hash_password;

    #[test]
    fn hashed_password_is_not_the_plain_text() {
        let hash = hash_password("hunter2").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(!hash.contains("hunter2"));
    }
}
