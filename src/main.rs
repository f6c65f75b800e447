//! Service entrypoint.
//!
//! Loads configuration, connects to PostgreSQL, wires the membership
//! router and serves it over HTTP.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use loyalty_memberships::adapters::http::middleware::track_execution_time;
use loyalty_memberships::adapters::http::{membership_router, MembershipAppState};
use loyalty_memberships::adapters::postgres::PostgresMembershipStore;
use loyalty_memberships::config::AppConfig;
use loyalty_memberships::domain::point::RatePointPolicy;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let state = MembershipAppState {
        membership_store: Arc::new(PostgresMembershipStore::new(pool)),
        point_policy: Arc::new(RatePointPolicy::default()),
    };

    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    let cors = if !origins.is_empty() {
        CorsLayer::new().allow_origin(origins)
    } else if config.server.is_production() {
        // No configured origins in production means no cross-origin callers.
        CorsLayer::new()
    } else {
        CorsLayer::new().allow_origin(Any)
    };

    let app = membership_router()
        .with_state(state)
        .layer(axum::middleware::from_fn(track_execution_time))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr()?;
    info!(%addr, "starting membership service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
