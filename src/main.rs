//! # Pet Care Tasks API
//!
//! Main entry point for the pet care task tracking API. Configures logging,
//! the SQLite connection pool, CORS and route handling.

#![recursion_limit = "256"]

pub mod api;
pub mod config;
pub mod consts;
pub mod logger;
pub mod models;
pub mod repo;
pub mod rest;
pub mod timestamp;
pub mod utils;

use ntex::web;
use ntex_cors::Cors;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    logger::setup_simple_logger()?;

    let app_config = &*config::APP_CONFIG;
    log::info!("starting pet-care-api (env: {})", app_config.env);

    // Initialize database connection pool and bootstrap the schema
    let sqlite_repo = repo::sqlite::SqlxSqliteRepo {
        db_pool: utils::setup_sqlite_db_pool().await?,
    };
    sqlite_repo.ensure_schema().await?;

    configure_and_run_server(sqlite_repo).await
}

/// Creates application state from the provided repository
fn create_app_state(sqlite_repo: repo::sqlite::SqlxSqliteRepo) -> rest::AppState {
    rest::AppState {
        repo: Box::new(sqlite_repo),
    }
}

/// Configures and starts the web server
async fn configure_and_run_server(
    sqlite_repo: repo::sqlite::SqlxSqliteRepo,
) -> anyhow::Result<()> {
    let app_config = &*config::APP_CONFIG;
    let server_addr = (
        app_config.web_server_host.as_str(),
        app_config.web_server_port,
    );

    let server = web::server(move || {
        // only the local dev frontend receives CORS headers
        let mut cors = Cors::new().allowed_methods(vec![
            "GET", "HEAD", "POST", "OPTIONS", "PUT", "PATCH", "DELETE",
        ]);
        for origin in consts::ALLOWED_FRONTEND_ORIGINS {
            cors = cors.allowed_origin(origin);
        }

        web::App::new()
            .wrap(cors.finish())
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(create_app_state(sqlite_repo.clone()))
            .configure(rest::routes::pets)
            .configure(rest::routes::tasks)
            .service(rest::server::index)
    });

    server
        .bind(server_addr)?
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("server error: {}", e))
}
