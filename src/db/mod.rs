use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePoolOptions, Pool, Sqlite};
use std::time::Duration;

pub mod listing_store;

pub type DbPool = Pool<Sqlite>;

/// Initialize the database connection pool
pub async fn init_db_pool(database_url: &str) -> Result<DbPool> {
    // Create the database if it doesn't exist
    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        Sqlite::create_database(database_url).await?;
    }

    // Create connection pool
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await?;

    ensure_schema_and_seed(&pool).await?;

    Ok(pool)
}

/// Create the cars table if needed and seed sample data on first run.
/// Safe to call on every start; a table that already has rows is left alone.
pub async fn ensure_schema_and_seed(pool: &DbPool) -> Result<()> {
    // Create cars table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cars (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            make TEXT NOT NULL,
            model TEXT NOT NULL,
            year INTEGER NOT NULL,
            price REAL NOT NULL,
            mileage INTEGER NOT NULL,
            condition TEXT NOT NULL,
            description TEXT,
            added_on TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )
    .execute(pool)
    .await?;

    tracing::debug!("Ensured cars table exists");

    // Add some sample listings if the table is empty
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cars")
        .fetch_one(pool)
        .await?;

    if count.0 == 0 {
        tracing::info!("Empty cars table, inserting sample listings");

        sqlx::query(
            r#"
            INSERT INTO cars (make, model, year, price, mileage, condition)
            VALUES ('Toyota', 'Camry', 2022, 25000, 30000, 'Excellent');
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO cars (make, model, year, price, mileage, condition)
            VALUES ('Honda', 'Civic', 2021, 22000, 45000, 'Good');
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO cars (make, model, year, price, mileage, condition)
            VALUES ('Ford', 'Mustang', 2020, 35000, 20000, 'Excellent');
            "#,
        )
        .execute(pool)
        .await?;
    }

    Ok(())
}
