use sqlx::{PgPool, postgres::PgPoolOptions};

/// Configure and return a PostgreSQL connection pool
///
/// Creates a connection pool for the given database URL and runs all
/// pending migrations.
///
/// # Panics
/// Panics if unable to create the pool or run migrations
pub async fn configure_postgresql(database_url: &str) -> PgPool {
    let pg_pool = get_postgres_pool(database_url)
        .await
        .expect("Failed to create Postgres connection pool");

    // Run database migrations
    sqlx::migrate!()
        .run(&pg_pool)
        .await
        .expect("Failed to run migrations");

    pg_pool
}

/// Create a PostgreSQL connection pool
///
/// # Arguments
/// * `url` - Database connection URL
///
/// # Returns
/// Result containing the PgPool or an error
pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}
