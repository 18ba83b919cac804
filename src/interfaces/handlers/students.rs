use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::student::NewStudent, errors::AppError, use_cases::extractors::AdminClaims, AppState};

#[instrument(skip(_claims, state))]
pub async fn list_students(
    _claims: AdminClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let students = state.campus_handler.list_students().await?;

    Ok(HttpResponse::Ok().json(students))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_student(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    data: web::Json<NewStudent>
) -> Result<impl Responder, AppError> {
    let student = state.campus_handler.create_student(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(student))
}

#[instrument(skip(_claims, state))]
pub async fn get_student(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    student_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let student = state.campus_handler.get_student(&student_id).await?;

    Ok(HttpResponse::Ok().json(student))
}

#[instrument(skip(_claims, state))]
pub async fn delete_student(
    _claims: AdminClaims,
    state: web::Data<AppState>,
    student_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    state.campus_handler.delete_student(&student_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
