use crate::config::QuipuConfig;
use crate::database::sqlite::SqliteRepository;
use crate::database::PageRepository;
use crate::error::StoreError;
use crate::store::{CachedPageStore, PageStore};
use anyhow::anyhow;
use axum::Router;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::Sqlite;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

pub mod config;
mod database;
mod domain;
mod error;
mod features;
mod parser;
mod slug;
mod store;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PageStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // load centralized config; missing required variables are fatal
    let config = QuipuConfig::from_env();

    // verify db exists
    if !Sqlite::database_exists(&config.database_url)
        .await
        .unwrap_or(false)
    {
        tracing::info!(
            "Unable to connect to database at {}, creating...",
            config.database_url
        );
        Sqlite::create_database(&config.database_url)
            .await
            .map_err(|e| {
                anyhow!(
                    "Unable to create database at {}. Error details: {}",
                    config.database_url,
                    e
                )
            })?;
    }

    // connect to our db
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|e| anyhow!("Failed to create pool on {}: {}", config.database_url, e))?;

    // run migrations
    sqlx::migrate!().run(&pool).await?;

    let repo = SqliteRepository::new(pool);

    // refuse to start against an unreachable store
    repo.ping().await.map_err(StoreError::Unavailable)?;

    let store: Arc<dyn PageStore> = Arc::new(CachedPageStore::new(Box::new(repo)));

    // first hydration; every read is served from the cache from here on
    store.init().await;
    tracing::info!(
        "Page cache hydrated with {} pages.",
        store.get_pages().await.len()
    );

    let app_state = AppState {
        store: store.clone(),
    };

    // api router, where features are composed
    let api_router = Router::new().nest("/pages", features::pages::pages_router());

    let app = Router::new()
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Server listening on http://{}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
