use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::update::NewUpdate, errors::AppError, use_cases::extractors::AdminClaims, AppState};

#[instrument(skip(_claims, state))]
pub async fn list_updates(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let updates = state.campus_handler.list_updates().await?;

    Ok(HttpResponse::Ok().json(updates))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_update(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<NewUpdate>
) -> Result<impl Responder, AppError> {
    let update = state.campus_handler.create_update(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(update))
}

#[instrument(skip(_claims, state))]
pub async fn delete_update(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    update_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    state.campus_handler.delete_update(&update_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
