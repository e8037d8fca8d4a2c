//! Campus Culture API server.

use std::sync::Arc;

use anyhow::Context;
use http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use campus_culture::adapters::http::{app_router, AnalyticsAppState, SurveyAppState};
use campus_culture::adapters::{InMemorySurveyStore, PostgresResponseReader, PostgresTenantReader};
use campus_culture::config::{AppConfig, CorsPolicy, ServerConfig};
use campus_culture::ports::{ResponseReader, TenantReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    let (response_reader, tenant_reader): (Arc<dyn ResponseReader>, Arc<dyn TenantReader>) =
        match &config.database {
            Some(database) => {
                let pool = database
                    .pool_options()
                    .connect(&database.url)
                    .await
                    .with_context(|| format!("failed to connect to {}", database.redacted_url()))?;
                info!(
                    url = %database.redacted_url(),
                    max_connections = database.pool.max_connections,
                    "PostgreSQL connected"
                );
                let responses: Arc<dyn ResponseReader> =
                    Arc::new(PostgresResponseReader::new(pool.clone()));
                let tenants: Arc<dyn TenantReader> = Arc::new(PostgresTenantReader::new(pool));
                (responses, tenants)
            }
            None => {
                warn!("No database configured, serving from the in-memory store");
                let store = Arc::new(InMemorySurveyStore::new());
                let responses: Arc<dyn ResponseReader> = store.clone();
                let tenants: Arc<dyn TenantReader> = store;
                (responses, tenants)
            }
        };

    let analytics_state = AnalyticsAppState::from_config(response_reader, &config.analytics)
        .context("invalid analytics configuration")?;
    let survey_state = SurveyAppState::new(tenant_reader);

    let app = app_router(analytics_state, survey_state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    info!(
        %addr,
        environment = ?config.server.environment,
        min_group_size = config.analytics.min_group_size,
        "Campus Culture API listening"
    );

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.server.json_logs() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    match server.cors_policy() {
        CorsPolicy::Permissive => base.allow_origin(Any),
        CorsPolicy::List(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(%origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            base.allow_origin(origins)
        }
    }
}
