use std::sync::Arc;

use snark_relay::{
    config::Config,
    routes,
    services::gemini::GeminiClient,
    state::AppState,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;

    if config.api_key.is_none() {
        // Keep serving; every chat call will fail until a key is provided.
        tracing::error!("FATAL ERROR: GEMINI_API_KEY environment variable not set.");
    }

    let client = GeminiClient::new(config.api_key.as_deref(), config.api_base.clone())?;
    let state = Arc::new(AppState::new(Arc::new(client)));

    let app = routes::create_router(&config.static_dir).with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!("Server running on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
