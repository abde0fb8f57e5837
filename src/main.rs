use medassist::api::{self, app_state::AppState};
use medassist::config::loader::ConfigLoader;
use medassist::services::{create_chemist_finder, create_triage_assembler};
use medassist::services::session_log::SessionLog;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    info!("Starting MedAssist...");

    let config = ConfigLoader::load()?;
    ConfigLoader::validate(&config)?;
    info!("Configuration loaded successfully");

    let session_log = Arc::new(SessionLog::new(config.session_log.capacity));
    info!(
        "Session log initialized (capacity: {})",
        session_log.capacity()
    );

    let assembler = create_triage_assembler(session_log.clone());
    info!("Triage assembler initialized");

    let chemist_finder = create_chemist_finder(config.places.clone())?;
    if config.places.api_key.is_empty() {
        info!("Places API key not configured, chemist search will use manual-search fallback");
    }
    info!("Chemist finder initialized");

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = AppState::new(config, assembler, chemist_finder, session_log);
    info!("Application state created");

    let router = api::create_router(app_state);
    info!("API router created");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
