use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Opens the pool and verifies the server is reachable. A failure here
/// propagates out of `main`; the process must not serve without its store.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Pool that defers connecting until first use. Lets the application spin
/// up in tests that never touch the database.
pub fn connect_lazy(database_url: &str) -> PgPool {
    PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(database_url)
        .expect("valid database url")
}
