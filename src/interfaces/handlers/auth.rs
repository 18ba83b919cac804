use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::admin_user::LoginAdmin,
    errors::{AppError, AuthError},
    use_cases::extractors::AdminClaims,
    AppState,
};

#[instrument(skip(state, credentials))]
pub async fn login(
    state: web::Data<AppState>,
    credentials: web::Json<LoginAdmin>
) -> Result<impl Responder, AuthError> {
    let response = state.auth_handler.login(credentials.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(admin, state))]
pub async fn dashboard(
    admin: AdminClaims,
    state: web::Data<AppState>
) -> Result<impl Responder, AppError> {
    let summary = state.campus_handler.dashboard().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Welcome, admin {}", admin.0.email),
        "summary": summary
    })))
}
