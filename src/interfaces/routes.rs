use actix_web::web;

use crate::handlers::ping::ping;

pub mod table;
mod admin;
mod json_error;

use table::{RouteTable, RouteTarget};

/// Mounts every entry of the route table, in table order.
pub fn configure_routes(cfg: &mut web::ServiceConfig, table: &RouteTable) {
    for route in table.routes() {
        match route.target() {
            RouteTarget::Admin => cfg.service(
                web::scope(&route.mount_path())
                    .configure(admin::config_routes)
            ),
            RouteTarget::Ping => cfg.service(
                web::resource(route.resource_path())
                    .route(web::get().to(ping))
            ),
        };
    }

    cfg.configure(json_error::config_routes);
}
