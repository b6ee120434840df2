use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use socialnet_api::api::{self, AppState};
use socialnet_api::config::Settings;
use socialnet_api::infrastructure::database;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env().expect("Invalid configuration");

    // Connect to database
    let pool = database::connect(&settings.database)
        .await
        .expect("Failed to connect to database");

    database::migrate(&pool)
        .await
        .expect("Failed to run database migrations");

    // Configure CORS
    let cors = match settings.server.cors_origin.as_deref() {
        Some(origin) => CorsLayer::new().allow_origin(
            origin
                .parse::<HeaderValue>()
                .expect("CORS_ORIGIN is not a valid header value"),
        ),
        None => CorsLayer::new().allow_origin(Any),
    }
    .allow_methods(Any)
    .allow_headers(Any);

    let app = api::router(AppState::postgres(pool.clone())).layer(cors);

    // Start server
    let listener = tokio::net::TcpListener::bind((settings.server.host.as_str(), settings.server.port))
        .await
        .expect("Failed to bind address");
    tracing::info!(
        "Server listening on {}",
        listener.local_addr().expect("Listener has no local address")
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");

    pool.close().await;
    tracing::info!("Database pool closed");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
