use habitat_designer_svc::app::{create_app, init_tracing};
use habitat_designer_svc::config::{Config, DEFAULT_LOG_FILTER};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing/logging; RUST_LOG overrides the default filter
    init_tracing(DEFAULT_LOG_FILTER);

    info!("Starting Habitat Designer Service...");

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };
    info!("Configuration loaded: {:?}", config);

    // Create the application
    let app = match create_app(&config) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to create app: {}", e);
            std::process::exit(1);
        }
    };

    // Create TCP listener
    let listener = match tokio::net::TcpListener::bind(&config.bind_address()).await {
        Ok(listener) => {
            info!("Server running on {}", config.server_url());
            info!("Health check: GET /health");
            info!("Designer endpoint: POST / (alias POST /api/habitat-designer)");
            info!("Catalog: GET /api/catalog, resources: POST /api/resources");
            listener
        }
        Err(e) => {
            error!("Failed to bind to {}: {}", config.bind_address(), e);
            std::process::exit(1);
        }
    };

    // Start the server
    info!("Server starting...");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    } else {
        info!("Server shutdown gracefully");
    }
}
