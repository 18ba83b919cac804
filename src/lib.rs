mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod server;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{auth, cors, utils};

use auth::jwt::JwtService;
use errors::AppError;
use repositories::memory_repo::{MemoryAdminRepo, MemoryCampusRepo};
use routes::table::RouteTable;
use use_cases::{auth::AuthHandler, campus::CampusHandler};

pub struct AppState {
    pub routes: RouteTable,
    pub auth_handler: AppAuthHandler,
    pub campus_handler: AppCampusHandler,
}

pub type AppAuthHandler = AuthHandler<MemoryAdminRepo, JwtService>;
pub type AppCampusHandler = CampusHandler<MemoryCampusRepo>;

impl AppState {
    /// Builds the route table, bootstraps the admin account and, when
    /// configured, seeds the sample portal content.
    pub async fn new(config: &settings::AppConfig) -> Result<Self, AppError> {
        let routes = RouteTable::url_patterns()?;

        let auth_handler = AuthHandler::new(MemoryAdminRepo::new(), JwtService::new(config));
        auth_handler
            .ensure_admin(&config.admin_email, &config.admin_password)
            .await?;

        let campus_handler = CampusHandler::new(MemoryCampusRepo::default());
        if config.seed_sample_data {
            campus_handler.seed_sample_data().await?;
            tracing::info!("Sample portal content loaded");
        }

        Ok(AppState {
            routes,
            auth_handler,
            campus_handler,
        })
    }
}
