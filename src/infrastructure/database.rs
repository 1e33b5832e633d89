// src/infrastructure/database.rs
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Opens the shared pool. Callers own its lifetime and close it on shutdown.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    tracing::info!(max_connections, "database pool ready");
    Ok(pool)
}
