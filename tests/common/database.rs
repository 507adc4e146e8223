//! Database test fixtures and utilities
//!
//! Tests that need Postgres call [`TestDatabase::connect`] and return early
//! when it yields `None`, so the suite still passes on machines without a
//! database. Set `DATABASE_URL` to run them.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Create a test database connection pool, if `DATABASE_URL` is set
pub async fn create_test_pool() -> Option<PgPool> {
    let database_url = std::env::var("DATABASE_URL").ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(20)
        .connect(&database_url)
        .await
        .expect("Failed to create test database pool");
    Some(pool)
}

/// Run database migrations for testing
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Remove all rows while preserving the schema
pub async fn cleanup_test_data(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("TRUNCATE TABLE links, users RESTART IDENTITY CASCADE")
        .execute(pool)
        .await?;
    Ok(())
}

/// Test database fixture
///
/// Connecting runs migrations and empties both tables. Tests using it are
/// marked `#[serial]` so they never see each other's rows.
pub struct TestDatabase {
    pool: PgPool,
}

impl TestDatabase {
    /// Connect, migrate and clean; `None` when no database is configured
    pub async fn connect() -> Option<Self> {
        let Some(pool) = create_test_pool().await else {
            eprintln!("DATABASE_URL not set; skipping database test");
            return None;
        };

        run_migrations(&pool).await.expect("Failed to run migrations");
        cleanup_test_data(&pool).await.expect("Failed to clean test data");
        Some(Self { pool })
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
