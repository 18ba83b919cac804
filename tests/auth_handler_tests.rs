
use async_trait::async_trait;
use campus_backend::{
    auth::{jwt::JwtService, password::hash_password},
    entities::admin_user::{AdminUser, AdminUserInsert, LoginAdmin},
    errors::{AppError, AuthError},
    repositories::admin_user::AdminRepository,
    use_cases::auth::AuthHandler,
};
use chrono::Utc;
use mockall::mock;
use test_utils::{test_config, ADMIN_EMAIL, ADMIN_PASSWORD};
use uuid::Uuid;

mock! {
    pub AdminRepo {}

    #[async_trait]
    impl AdminRepository for AdminRepo {
        async fn get_admin_by_email(&self, email: &str) -> Result<Option<AdminUser>, AppError>;
        async fn create_admin(&self, admin: &AdminUserInsert) -> Result<Uuid, AppError>;
    }
}

fn jwt() -> JwtService {
    JwtService::new(&test_config())
}

fn stored_admin(password: &str) -> AdminUser {
    AdminUser {
        id: Uuid::new_v4(),
        email: ADMIN_EMAIL.to_string(),
        password_hash: hash_password(password).unwrap(),
        created_at: Utc::now(),
    }
}

fn login_request(email: &str, password: &str) -> LoginAdmin {
    LoginAdmin {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[actix_rt::test]
async fn login_succeeds_with_correct_password() {
    let admin = stored_admin(ADMIN_PASSWORD);
    let admin_id = admin.id;
    let mut repo = MockAdminRepo::new();
    repo.expect_get_admin_by_email()
        .withf(|email| email == ADMIN_EMAIL)
        .times(1)
        .returning(move |_| Ok(Some(admin.clone())));

    let handler = AuthHandler::new(repo, jwt());

    let response = handler.login(login_request(ADMIN_EMAIL, ADMIN_PASSWORD)).await.unwrap();

    assert_eq!(response.token_type, "Bearer");
    let claims = handler.token_service.decode_jwt(&response.access_token).unwrap().claims;
    assert_eq!(claims.sub, admin_id.to_string());
    assert!(claims.admin);
}

#[actix_rt::test]
async fn login_fails_for_wrong_password() {
    let admin = stored_admin(ADMIN_PASSWORD);
    let mut repo = MockAdminRepo::new();
    repo.expect_get_admin_by_email()
        .returning(move |_| Ok(Some(admin.clone())));

    let handler = AuthHandler::new(repo, jwt());

    let result = handler.login(login_request(ADMIN_EMAIL, "WrongPass#1")).await;

    assert!(matches!(result, Err(AuthError::WrongCredentials)));
}

#[actix_rt::test]
async fn login_fails_for_unknown_email() {
    let mut repo = MockAdminRepo::new();
    repo.expect_get_admin_by_email().returning(|_| Ok(None));

    let handler = AuthHandler::new(repo, jwt());

    let result = handler.login(login_request("nobody@campusprep.com", ADMIN_PASSWORD)).await;

    assert!(matches!(result, Err(AuthError::WrongCredentials)));
}

#[actix_rt::test]
async fn login_rejects_malformed_email_without_lookup() {
    let mut repo = MockAdminRepo::new();
    repo.expect_get_admin_by_email().never();

    let handler = AuthHandler::new(repo, jwt());

    let result = handler.login(login_request("not-an-email", ADMIN_PASSWORD)).await;

    assert!(matches!(result, Err(AuthError::InvalidPayload)));
}

#[actix_rt::test]
async fn ensure_admin_creates_missing_account() {
    let new_id = Uuid::new_v4();
    let mut repo = MockAdminRepo::new();
    repo.expect_get_admin_by_email().returning(|_| Ok(None));
    repo.expect_create_admin()
        .withf(|insert| insert.email == ADMIN_EMAIL && insert.password_hash.starts_with("$argon2id$"))
        .times(1)
        .returning(move |_| Ok(new_id));

    let handler = AuthHandler::new(repo, jwt());

    let id = handler.ensure_admin("Admin@CampusPrep.com", ADMIN_PASSWORD).await.unwrap();

    assert_eq!(id, new_id);
}

#[actix_rt::test]
async fn ensure_admin_is_idempotent() {
    let admin = stored_admin(ADMIN_PASSWORD);
    let existing_id = admin.id;
    let mut repo = MockAdminRepo::new();
    repo.expect_get_admin_by_email()
        .returning(move |_| Ok(Some(admin.clone())));
    repo.expect_create_admin().never();

    let handler = AuthHandler::new(repo, jwt());

    let id = handler.ensure_admin(ADMIN_EMAIL, ADMIN_PASSWORD).await.unwrap();

    assert_eq!(id, existing_id);
}

#[actix_rt::test]
async fn ensure_admin_rejects_short_password() {
    let mut repo = MockAdminRepo::new();
    repo.expect_get_admin_by_email().returning(|_| Ok(None));
    repo.expect_create_admin().never();

    let handler = AuthHandler::new(repo, jwt());

    let result = handler.ensure_admin(ADMIN_EMAIL, "short").await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}
