use uuid::Uuid;
use validator::Validate;

use crate::entities::admin_user::{AdminUserInsert, LoginAdmin};
use crate::entities::token::AuthResponse;
use crate::errors::{AppError, AuthError};
use crate::auth::password::{hash_password, verify_password};
use crate::repositories::{admin_user::AdminRepository, token::TokenServiceRepository};

pub struct AuthHandler<R, T>
where
    R: AdminRepository,
    T: TokenServiceRepository,
{
    pub admin_repo: R,
    pub token_service: T,
}

impl<R, T> AuthHandler<R, T>
where
    R: AdminRepository,
    T: TokenServiceRepository,
{
    pub fn new(admin_repo: R, token_service: T) -> Self {
        AuthHandler {
            admin_repo,
            token_service
        }
    }

    /// Creates the admin account unless one with this email already exists.
    /// Returns the account's id either way.
    pub async fn ensure_admin(&self, email: &str, password: &str) -> Result<Uuid, AppError> {
        if let Some(existing) = self.admin_repo.get_admin_by_email(email).await? {
            tracing::debug!("Admin account {} already present", existing.email);
            return Ok(existing.id);
        }

        let password_hash = hash_password(password)?;
        let id = self.admin_repo
            .create_admin(&AdminUserInsert::new(email, password_hash))
            .await?;

        tracing::info!("Created admin account {}", email);
        Ok(id)
    }

    /// Logs an admin in by validating credentials and issuing a JWT
    pub async fn login(&self, request: LoginAdmin) -> Result<AuthResponse, AuthError> {
        request.validate()?;

        let admin = self.admin_repo.get_admin_by_email(&request.email)
            .await
            .map_err(|_e| AuthError::WrongCredentials)?
            .ok_or(AuthError::WrongCredentials)?;

        let is_password_valid = verify_password(&request.password, &admin.password_hash)
            .map_err(|e| {
                tracing::warn!("Password verification error: {}", e);
                AuthError::WrongCredentials
            })?;
        if !is_password_valid {
            tracing::warn!("Failed admin login for {}", admin.email);
            return Err(AuthError::WrongCredentials);
        }

        let access_token = self.token_service.create_jwt(&admin)
            .map_err(|e| {
                tracing::warn!("Failed to create JWT: {}", e);
                AuthError::TokenCreation
            })?;

        tracing::info!("Admin logged in successfully");
        Ok(AuthResponse::new(access_token, self.token_service.expires_in()))
    }
}
