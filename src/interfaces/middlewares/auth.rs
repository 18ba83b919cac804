use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    web, Error, HttpMessage, HttpResponse, ResponseError,
};
use futures_util::future::{ok, Ready, LocalBoxFuture};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{constants::BEARER, errors::AuthError, routes::table::RouteTarget, AppState};

/// Guards everything the route table hands to the admin subsystem.
/// The login endpoint stays open; every other admin path needs an admin JWT.
pub struct AdminAuthMiddleware;

impl<S> Transform<S, ServiceRequest> for AdminAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminAuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AdminAuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AdminAuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for AdminAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if *req.method() == Method::OPTIONS {
                return service.call(req).await;
            }

            let state = req.app_data::<web::Data<AppState>>()
                .cloned()
                .ok_or_else(|| {
                    tracing::error!("AppState missing in middleware");
                    AuthError::MissingAppState
                })?;

            if !requires_admin(&state, &req) {
                return service.call(req).await;
            }

            let token = match extract_token(&req) {
                Some(token) => token,
                None => {
                    tracing::warn!("Missing or malformed Authorization header for {}", req.path());
                    return Ok(error_response(req, AuthError::MissingCredentials));
                }
            };

            let claims = match state.auth_handler.token_service.decode_jwt(&token) {
                Ok(decoded) => decoded.claims,
                Err(e) => {
                    tracing::warn!("Rejected admin token: {}", e);
                    return Ok(error_response(req, e));
                }
            };

            if !claims.admin {
                tracing::warn!("Admin access required for path: {}", req.path());
                return Ok(req.into_response(
                    HttpResponse::Forbidden().json(serde_json::json!({
                        "error": "Admin access required"
                    }))
                ));
            }

            req.extensions_mut().insert(claims);
            service.call(req).await
        })
    }
}

fn requires_admin(state: &AppState, req: &ServiceRequest) -> bool {
    match state.routes.dispatch(req.path()) {
        Some(matched) if matched.route.target() == RouteTarget::Admin => {
            !is_public_admin_path(matched.remainder, req.method())
        }
        _ => false,
    }
}

fn is_public_admin_path(remainder: &str, method: &Method) -> bool {
    remainder == "login/" && *method == Method::POST
}

fn extract_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| {
            let parts: Vec<&str> = header.split_whitespace().collect();
            if parts.len() == 2 && parts[0].eq_ignore_ascii_case(BEARER) {
                Some(parts[1].to_string())
            } else {
                None
            }
        })
}

fn error_response(req: ServiceRequest, err: AuthError) -> ServiceResponse<BoxBody> {
    req.into_response(err.error_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_login_post_is_public() {
        assert!(is_public_admin_path("login/", &Method::POST));
        assert!(!is_public_admin_path("login/", &Method::GET));
        assert!(!is_public_admin_path("", &Method::GET));
        assert!(!is_public_admin_path("companies/", &Method::POST));
    }
}
