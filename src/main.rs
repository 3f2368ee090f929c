use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use prepx_admin_api::database::store::PgQuestionStore;
use prepx_admin_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and ADMIN_PASSWORD.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = prepx_admin_api::config::config();
    tracing::info!("Starting PrepX admin API in {:?} mode", config.environment);

    let database_url = config
        .database
        .url
        .as_deref()
        .context("DATABASE_URL is not set")?;
    // Refuse to start without a secret rather than gating on an empty string.
    let admin_password = config
        .security
        .admin_password
        .as_deref()
        .context("ADMIN_PASSWORD is not set")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(database_url)
        .await
        .context("failed to connect to Postgres")?;

    let store = PgQuestionStore::new(pool);
    store.ensure_schema().await.context("failed to ensure schema")?;

    let state = AppState::new(Arc::new(store), admin_password);
    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("PrepX admin API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}
