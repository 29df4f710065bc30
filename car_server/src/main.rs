//! Car server: loads config from env (and `.env`), runs migrations, serves the car routes.
//!
//! Run from repo root: `cargo run -p car-server`

use car_resource::{apply_migrations, app, connect, AppState, CarService, ServerConfig, SqliteCarStore};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("car_resource=info,car_server=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let pool = connect(&config.database_url, config.max_connections).await?;
    apply_migrations(&pool).await?;

    let store = SqliteCarStore::new(pool);
    let state = AppState::new(CarService::new(Arc::new(store)));
    let router = app(state, &config);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        "car server listening on http://{} (cars at {})",
        listener.local_addr()?,
        config.base_path
    );
    axum::serve(listener, router).await?;
    Ok(())
}
