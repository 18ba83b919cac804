use std::net::TcpListener;

use actix_web::{
    dev::Server,
    middleware::{NormalizePath, TrailingSlash},
    web, App, HttpServer,
};
use tracing_actix_web::TracingLogger;

use crate::{
    cors::build_cors,
    handlers::json_error::not_found,
    middlewares::auth::AdminAuthMiddleware,
    routes::configure_routes,
    settings::AppConfig,
    AppState,
};

/// Builds the HTTP server on an already-bound listener. The returned
/// server must be awaited (or spawned) to start serving.
pub fn run(
    listener: TcpListener,
    app_state: web::Data<AppState>,
    config: &AppConfig,
) -> std::io::Result<Server> {
    let cors_origins = config.cors_origins();

    let server = HttpServer::new(move || {
        let state = app_state.clone();

        App::new()
            .app_data(state.clone())
            .wrap(AdminAuthMiddleware)
            .wrap(NormalizePath::new(TrailingSlash::Always))
            .wrap(build_cors(&cors_origins))
            .wrap(TracingLogger::default())
            .configure(|cfg| configure_routes(cfg, &state.routes))
            .default_service(web::to(not_found))
    })
    .workers(config.worker_count.max(1))
    .listen(listener)?
    .run();

    Ok(server)
}
