//! Sarkari Jobs Backend
//!
//! REST backend for the job listing portal: a public search/browse API and a
//! password-gated admin API, backed by a key-value store on SQLite.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod filter;
mod models;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::{JobRepository, KeyValueStore, MemoryStore, SqliteStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<JobRepository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sarkari Jobs Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.admin_password.is_none() {
        tracing::warn!("No admin password configured (JOBS_ADMIN_PASSWORD). Admin API is open!");
    }

    // Initialize storage
    let store: Arc<dyn KeyValueStore> = if config.in_memory() {
        tracing::warn!("Using in-memory store, listings are lost on shutdown");
        Arc::new(MemoryStore::new())
    } else {
        let pool = db::init_database(&config.db_path).await?;
        Arc::new(SqliteStore::new(pool))
    };
    let repo = Arc::new(JobRepository::new(store));

    if repo.initialize().await? {
        tracing::info!("Fresh store, seed listings written");
    }
    tracing::info!("Job store holds {} listings", repo.list().await.len());

    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let password = state.config.admin_password.clone();

    // Public routes
    let public_routes = Router::new()
        .route("/jobs", get(api::list_jobs))
        .route("/jobs/{id}", get(api::get_job))
        .route("/headlines", get(api::get_headlines))
        .route("/options", get(api::get_options))
        .route("/login", post(api::login));

    // Admin routes behind the password gate
    let admin_routes = Router::new()
        .route("/jobs", post(api::create_job))
        .route("/jobs/{id}", put(api::update_job).delete(api::delete_job))
        .route("/stats", get(api::get_stats))
        .layer(middleware::from_fn(move |req, next| {
            auth::admin_auth_layer(password.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api/admin", admin_routes)
        .nest("/api", public_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
