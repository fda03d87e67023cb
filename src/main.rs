use sea_orm::Database;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use training_registry::{app, config::AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().inspect_err(|e| error!("Invalid configuration: {e}"))?;

    let db = Database::connect(&config.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    app::create_tables(&db).await?;

    let router = app::build_router(&db, &config.api_prefix).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(
        "Serving {} at http://{}{} (docs at /docs)",
        env!("CARGO_PKG_NAME"),
        config.bind_addr,
        config.api_prefix
    );
    axum::serve(listener, router).await?;

    Ok(())
}
