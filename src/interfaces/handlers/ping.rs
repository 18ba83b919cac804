use actix_web::{HttpResponse, Responder};

/// Liveness check. Answers as long as the server is accepting requests.
pub async fn ping() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "message": "pong" }))
}
