mod config;
mod db;
mod routes;
mod services;
mod state;
mod store;
mod template;
mod views;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use config::{AppConfig, StoreKind};
use store::{ContractTemplateStore, MemoryContractTemplateStore, PgContractTemplateStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().expect("invalid configuration");

    let store: Arc<dyn ContractTemplateStore> = match config.store {
        StoreKind::Postgres => {
            let database_url = config.database_url.as_deref().expect("DATABASE_URL checked by config");
            let pool = db::init_pool(database_url, config.db_max_connections)
                .await
                .expect("database init failed");
            Arc::new(PgContractTemplateStore::new(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; templates are lost on restart");
            Arc::new(MemoryContractTemplateStore::new())
        }
    };

    let state = state::AppState::new(store);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind((config.bind_addr, config.port))
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.bind_addr, port = config.port, "contract-templates listening");
    axum::serve(listener, app).await.expect("server failed");
}
