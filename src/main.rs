use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod auth;
mod config;
mod db;
mod dto;
mod error;
mod handlers;
mod models;
mod services;

use config::{Config, StoreBackend};
use db::{FileMoodLogStore, InMemoryMoodLogStore, MoodLogStore, PgMoodLogStore};
use services::aggregate::Aggregator;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MoodLogStore>,
    pub config: Arc<Config>,
    pub aggregator: Arc<Aggregator>,
}

impl AppState {
    pub fn new(store: Arc<dyn MoodLogStore>, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
            aggregator: Arc::new(Aggregator::new()),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodmate_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env()?;
    tracing::info!(backend = config.store.name(), "Opening mood log store");
    let store = build_store(&config.store).await?;
    tracing::info!("Mood log store ready");

    let state = AppState::new(store, config);
    let cors = cors_layer(&state.config)?;
    let addr = state.config.listen_addr();

    let app = build_router(state).layer(cors);

    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

async fn build_store(backend: &StoreBackend) -> anyhow::Result<Arc<dyn MoodLogStore>> {
    let store: Arc<dyn MoodLogStore> = match backend {
        StoreBackend::Memory => Arc::new(InMemoryMoodLogStore::new()),
        StoreBackend::File(path) => Arc::new(FileMoodLogStore::new(path.clone())),
        StoreBackend::Postgres { database_url } => Arc::new(
            PgMoodLogStore::connect(database_url)
                .await
                .context("Failed to connect to the mood log database")?,
        ),
    };
    Ok(store)
}

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let mut origins = vec![config
        .frontend_url
        .parse::<HeaderValue>()
        .context("FRONTEND_URL is not a valid origin")?];
    for extra in &config.cors_extra_origins {
        match extra.parse::<HeaderValue>() {
            Ok(hv) => origins.push(hv),
            Err(_) => tracing::warn!(origin = %extra, "Ignoring invalid CORS origin"),
        }
    }

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true))
}

pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route("/api/auth/guest", post(handlers::auth::guest))
        .route("/api/moods", get(handlers::wellness::list_moods))
        .route("/api/wellness", get(handlers::wellness::get_wellness));

    let protected_routes = Router::new()
        .route(
            "/api/entries",
            post(handlers::entries::submit_entry).get(handlers::entries::list_entries),
        )
        .route("/api/dashboard", get(handlers::dashboard::get_dashboard))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
