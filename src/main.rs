use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use calbot::config::AppConfig;
use calbot::handlers;
use calbot::services::cal::CalClient;
use calbot::services::completion::openai::OpenAiProvider;
use calbot::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    // Fail early: a service without a scheduling API key can't do anything.
    let cal = CalClient::new(&config)?;
    if config.openai_api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set; /chat will be unavailable");
    }
    let llm = OpenAiProvider::new(config.openai_api_key.clone(), config.openai_model.clone());
    tracing::info!(model = %config.openai_model, base_url = %config.cal_base_url, "external clients initialized");

    let state = Arc::new(AppState {
        config: config.clone(),
        cal: Box::new(cal),
        llm: Box::new(llm),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/chat", post(handlers::chat::chat))
        .route("/book", post(handlers::bookings::book))
        .route("/list", post(handlers::bookings::list))
        .route("/cancel", post(handlers::bookings::cancel))
        .route("/slots", post(handlers::bookings::slots))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
