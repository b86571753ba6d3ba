// This is the entry point of the slides service.
//
// **Architecture Overview:**
// - `core/` = Business logic (token lifecycle, slide batch building)
// - `infra/` = Implementations of core traits (Google OAuth, Slides API, token file)
// - `web/` = HTTP adapters (routes, pages, error mapping)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Build the router and serve it until Ctrl+C

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "infra/infra_layer.rs"]
mod infra;
#[path = "web/web_layer.rs"]
mod web;

mod config;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::auth::{AuthService, OAuthProvider, TokenPersistence};
use crate::core::slides::{SlidesApi, SlidesService};
use crate::infra::google_auth::{GoogleOAuthClient, JsonTokenFile};
use crate::infra::google_slides::GoogleSlidesClient;
use crate::web::routes::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load .env file if present
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;

    // OAuth client + token file back the auth service; a saved token is
    // picked up here so a restart does not force a new consent.
    let provider: Box<dyn OAuthProvider> = Box::new(GoogleOAuthClient::new(
        &config.client_id,
        &config.client_secret,
        &config.redirect_uri,
    ));
    let persistence: Box<dyn TokenPersistence> = Box::new(JsonTokenFile::new(&config.token_path));
    let auth = AuthService::new(provider, persistence).await;

    let slides_api: Box<dyn SlidesApi> = Box::new(GoogleSlidesClient::new());
    let slides = SlidesService::new(slides_api);

    let app = router(Arc::new(AppState { auth, slides }));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server running on http://localhost:{}", config.port);
    tracing::info!(
        "Visit http://localhost:{}/auth to authenticate with Google",
        config.port
    );
    tracing::info!("Token file: {}", config.token_path.display());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
