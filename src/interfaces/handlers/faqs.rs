use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::faq::{FaqQuery, NewFaq},
    errors::AppError,
    use_cases::extractors::AdminClaims,
    AppState,
};

#[instrument(skip(_claims, state))]
pub async fn list_faqs(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    query: web::Query<FaqQuery>,
) -> Result<impl Responder, AppError> {
    let faqs = state.campus_handler.list_faqs(&query).await?;

    Ok(HttpResponse::Ok().json(faqs))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_faq(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<NewFaq>
) -> Result<impl Responder, AppError> {
    let faq = state.campus_handler.create_faq(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(faq))
}

#[instrument(skip(_claims, state))]
pub async fn delete_faq(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    faq_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    state.campus_handler.delete_faq(&faq_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
