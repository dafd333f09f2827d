use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::info;

use vehicles_api::clients::{HttpMapsClient, HttpPriceClient};
use vehicles_api::config::environment::EnvironmentConfig;
use vehicles_api::database::connection::create_pool;
use vehicles_api::repositories::{CarStore, InMemoryCarStore, PostgresCarStore};
use vehicles_api::routes;
use vehicles_api::services::CarService;
use vehicles_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 Vehicles API");
    info!("===============");

    let config = EnvironmentConfig::from_env();

    let store: Arc<dyn CarStore> = match &config.database_url {
        Some(database_url) => {
            let pool = create_pool(database_url).await?;
            let store = PostgresCarStore::new(pool);
            store.ensure_schema().await.map_err(|e| {
                anyhow::anyhow!("failed to bootstrap the cars schema: {}", e)
            })?;
            info!("✅ PostgreSQL store ready");
            Arc::new(store)
        }
        None => {
            info!("⚠️ DATABASE_URL not set, using the in-memory store");
            Arc::new(InMemoryCarStore::new())
        }
    };

    let prices = Arc::new(HttpPriceClient::new(config.pricing_url.clone()));
    let maps = Arc::new(HttpMapsClient::new(config.maps_url.clone()));
    let cars = CarService::new(store, prices, maps);

    let addr: SocketAddr = config.server_addr().parse()?;
    let app = routes::create_router(AppState::new(cars, config));

    info!("🌐 Server starting on http://{}", addr);
    info!("🔍 Available endpoints:");
    info!("   GET    /health - Health check");
    info!("   GET    /cars - List vehicles (enriched)");
    info!("   GET    /cars/:id - Get a vehicle (enriched)");
    info!("   POST   /cars - Create a vehicle");
    info!("   PUT    /cars/:id - Update a vehicle");
    info!("   DELETE /cars/:id - Delete a vehicle");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server stopped");
    Ok(())
}

/// Graceful shutdown on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 Termination signal received, shutting down...");
        },
    }
}
