//! Book Inventory Server
//!
//! Serves the in-memory book catalog over HTTP.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use book_inventory_server::{
    api,
    config::{AppConfig, LoggingConfig},
    repository::{books::BooksRepository, Repository},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    init_tracing(&config.logging);

    tracing::info!("Starting Book Inventory Server v{}", env!("CARGO_PKG_VERSION"));

    let books = if config.catalog.seed {
        BooksRepository::seeded()
    } else {
        BooksRepository::new()
    };
    tracing::info!("Catalog loaded with {} books", books.len()?);

    let addr = config.listen_addr();

    // Create repository, services and application state
    let state = AppState::new(config, Repository::new(books));

    // Build router
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("book_inventory_server={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
