use jsonwebtoken::{encode, Header, decode, Validation, TokenData, Algorithm};
use chrono::{Utc, Duration};
use crate::entities::token::Claims;
use crate::entities::admin_user::AdminUser;
use crate::repositories::token::TokenServiceRepository;
use crate::settings::{AppConfig, JwtKeys};
use crate::errors::AuthError;

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    access_expiration: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            access_expiration: Duration::minutes(config.jwt_expiration_minutes),
        }
    }

    pub fn create_jwt(&self, admin: &AdminUser) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = (now + self.access_expiration).timestamp() as usize;

        let claims = Claims {
            sub: admin.id.to_string(),
            email: admin.email.clone(),
            admin: true,
            exp,
            iat: now.timestamp() as usize,
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding).map_err(AuthError::from)
    }

    pub fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;

        decode::<Claims>(token, &self.keys.decoding, &validation).map_err(AuthError::from)
    }
}

impl TokenServiceRepository for JwtService {
    fn create_jwt(&self, admin: &AdminUser) -> Result<String, AuthError> {
        self.create_jwt(admin)
    }

    fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        self.decode_jwt(token)
    }

    fn expires_in(&self) -> i64 {
        self.access_expiration.num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AppEnvironment;
    use uuid::Uuid;

    fn config_with_secret(secret: &str) -> AppConfig {
        AppConfig {
            env: AppEnvironment::Testing,
            name: "test".into(),
            port: 0,
            host: "127.0.0.1".into(),
            worker_count: 1,
            cors_allowed_origins: vec!["*".into()],
            jwt_secret: secret.into(),
            jwt_expiration_minutes: 5,
            admin_email: "admin@campusprep.com".into(),
            admin_password: "admin12345".into(),
            seed_sample_data: false,
        }
    }

    fn admin() -> AdminUser {
        AdminUser {
            id: Uuid::new_v4(),
            email: "admin@campusprep.com".into(),
            password_hash: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn issued_token_carries_admin_claims() {
        let service = JwtService::new(&config_with_secret("first_secret_that_is_definitely_32_chars"));
        let admin = admin();

        let token = service.create_jwt(&admin).unwrap();
        let claims = service.decode_jwt(&token).unwrap().claims;

        assert_eq!(claims.sub, admin.id.to_string());
        assert!(claims.admin);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = JwtService::new(&config_with_secret("first_secret_that_is_definitely_32_chars"));
        let verifier = JwtService::new(&config_with_secret("other_secret_that_is_definitely_32_chars"));

        let token = issuer.create_jwt(&admin()).unwrap();

        assert!(matches!(verifier.decode_jwt(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn garbage_token_is_invalid() {
        let service = JwtService::new(&config_with_secret("first_secret_that_is_definitely_32_chars"));

        assert!(matches!(service.decode_jwt("not.a.jwt"), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn expires_in_reports_configured_lifetime() {
        let service = JwtService::new(&config_with_secret("first_secret_that_is_definitely_32_chars"));

        assert_eq!(TokenServiceRepository::expires_in(&service), 300);
    }
}
