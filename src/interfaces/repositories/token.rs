use jsonwebtoken::TokenData;
use crate::{entities::{admin_user::AdminUser, token::Claims}, errors::AuthError};

pub trait TokenServiceRepository: Send + Sync {
    /// Creates a new access JWT for the admin
    fn create_jwt(&self, admin: &AdminUser) -> Result<String, AuthError>;

    /// Decodes a JWT and returns the claims
    fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError>;

    /// Access token lifetime in seconds
    fn expires_in(&self) -> i64;
}
