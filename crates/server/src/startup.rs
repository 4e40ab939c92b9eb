use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::auth::{password::Argon2PasswordEncoder, repo::seaorm::SeaOrmCredentialStore, token::JwtTokenIssuer, AuthService};
use service::category::{repository::SeaOrmCategoryRepository, CategoryService};
use service::inventory::{seaorm::SeaOrmInventoryRepository, InventoryService};

use crate::errors::StartupError;
use crate::routes::{self, auth::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Wire the database-backed stores into the services the router needs.
pub fn build_state(db: DatabaseConnection, cfg: &configs::AuthConfig) -> ServerState {
    let tokens = Arc::new(JwtTokenIssuer::from_config(cfg));
    let auth = AuthService::new(
        Arc::new(SeaOrmCredentialStore { db: db.clone() }),
        Arc::new(Argon2PasswordEncoder::new()),
        tokens.clone(),
    );
    ServerState {
        auth: Arc::new(auth),
        inventory: Arc::new(InventoryService::new(Arc::new(SeaOrmInventoryRepository { db: db.clone() }))),
        category: Arc::new(CategoryService::new(Arc::new(SeaOrmCategoryRepository { db }))),
        tokens,
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    migration::Migrator::up(&db, None).await?;

    let state = build_state(db, &cfg.auth);
    let app: Router = routes::build_router(state, build_cors());

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting koopos server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
