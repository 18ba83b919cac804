use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::company::NewCompany, errors::AppError, use_cases::extractors::AdminClaims, AppState};

#[instrument(skip(_claims, state))]
pub async fn list_companies(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let companies = state.campus_handler.list_companies().await?;

    Ok(HttpResponse::Ok().json(companies))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_company(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<NewCompany>
) -> Result<impl Responder, AppError> {
    let company = state.campus_handler.create_company(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(company))
}

#[instrument(skip(_claims, state))]
pub async fn get_company(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    company_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let company = state.campus_handler.get_company(&company_id).await?;

    Ok(HttpResponse::Ok().json(company))
}

#[instrument(skip(_claims, state))]
pub async fn delete_company(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    company_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    state.campus_handler.delete_company(&company_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
