//! User account service — registration, login, profile lookup.

use std::sync::Arc;

use tracing::info;

use notehub_auth::password::PasswordHasher;
use notehub_core::error::AppError;
use notehub_database::repositories::user::UserRepository;
use notehub_entity::user::{CreateUser, User};

/// Manages user registration and credential verification.
///
/// The share subsystem never depends on this directly; a login merely
/// binds a user id to the viewer session.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Minimum password length for registration.
    password_min_length: usize,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        password_min_length: usize,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            password_min_length,
        }
    }

    /// Registers a new user. Duplicate username or email surfaces as
    /// Conflict from the repository.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        if password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }

        let hasher = Arc::clone(&self.hasher);
        let plaintext = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash_password(&plaintext))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {e}")))??;

        let user = self
            .user_repo
            .insert(&CreateUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Verifies credentials and returns the user on success.
    ///
    /// `login` accepts a username or an email. A missing user and a
    /// wrong password produce the same Authentication error so the
    /// response does not reveal which part failed.
    pub async fn login(&self, login: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .user_repo
            .find_by_login(login)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid username or password"))?;

        let hasher = Arc::clone(&self.hasher);
        let submitted = password.to_string();
        let hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || hasher.verify_password(&submitted, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Verification task failed: {e}")))??;

        if !matches {
            return Err(AppError::authentication("Invalid username or password"));
        }

        self.user_repo.touch_last_login(user.id).await?;
        info!(user_id = user.id, "User logged in");
        Ok(user)
    }

    /// Fetches a user by id.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
