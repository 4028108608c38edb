use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use remoview_core::config::{LayeredConfig, DEFAULT_CONFIG_FILE, DEFAULT_DATA_DIR};
use remoview_llm::GeminiGenerator;
use remoview_store::JsonFileHistoryStore;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use remoview_api::{create_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "remoview_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_config = ApiConfig::from_env();

    let config = LayeredConfig::with_defaults()
        .load_from_optional_file(Path::new(DEFAULT_DATA_DIR).join(DEFAULT_CONFIG_FILE))
        .context("Failed to load configuration file")?
        .load_from_env();
    config.warn_on_missing_credentials();

    let generator = match GeminiGenerator::from_config(&config) {
        Ok(generator) => generator,
        Err(e) => {
            tracing::error!("Cannot start without a Gemini API key: {}", e);
            tracing::error!(
                "Remediation:\n\
                1. Set REMOVIEW_API_KEY (or API_KEY)\n\
                2. Or add api_key to .remoview/config.toml"
            );
            std::process::exit(1);
        }
    };

    tracing::info!(
        port = api_config.port,
        model = %config.model.value,
        history = %config.history_path.value.display(),
        "Starting RemoView API server"
    );

    let history = JsonFileHistoryStore::new(config.history_path.value.clone());
    let state = Arc::new(AppState::new(Arc::new(generator), Arc::new(history)));

    let origin = api_config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid REMOVIEW_CORS_ORIGIN: {}", api_config.cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(state).layer(cors);

    let addr = api_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", api_config.cors_origin);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
