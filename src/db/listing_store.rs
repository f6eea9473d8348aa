use async_trait::async_trait;

use crate::{
    db::DbPool,
    error::{AppError, Result},
    models::listing::{Listing, ListingDraft},
};

/// Storage operations for car listings, as handed to the presentation layer
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Get all listings, most recently added first
    async fn list_all(&self) -> Result<Vec<Listing>>;

    /// Persist a new listing; id and added_on are assigned by the database
    async fn insert(&self, draft: ListingDraft) -> Result<()>;

    /// Overwrite the editable fields of the listing with the given id
    async fn update(&self, id: i64, draft: ListingDraft) -> Result<()>;

    /// Remove the listing with the given id
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Listing store for database operations
pub struct ListingStore {
    pool: DbPool,
}

impl ListingStore {
    /// Create a new ListingStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingRepository for ListingStore {
    async fn list_all(&self) -> Result<Vec<Listing>> {
        // id breaks ties within the one-second granularity of added_on
        let listings = sqlx::query_as::<_, Listing>(
            r#"
            SELECT id, make, model, year, price, mileage, condition, description, added_on
            FROM cars
            ORDER BY added_on DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(listings)
    }

    async fn insert(&self, draft: ListingDraft) -> Result<()> {
        let draft = draft.validated()?;

        sqlx::query(
            r#"
            INSERT INTO cars (make, model, year, price, mileage, condition, description)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&draft.make)
        .bind(&draft.model)
        .bind(draft.year)
        .bind(draft.price)
        .bind(draft.mileage)
        .bind(draft.condition)
        .bind(&draft.description)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        tracing::debug!("Added listing {} {}", draft.make, draft.model);

        Ok(())
    }

    async fn update(&self, id: i64, draft: ListingDraft) -> Result<()> {
        let draft = draft.validated()?;

        let result = sqlx::query(
            r#"
            UPDATE cars
            SET make = ?, model = ?, year = ?, price = ?, mileage = ?, condition = ?, description = ?
            WHERE id = ?
            "#,
        )
        .bind(&draft.make)
        .bind(&draft.model)
        .bind(draft.year)
        .bind(draft.price)
        .bind(draft.mileage)
        .bind(draft.condition)
        .bind(&draft.description)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::ListingNotFound);
        }

        tracing::debug!("Updated listing {}", id);

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM cars WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::ListingNotFound);
        }

        tracing::info!("Deleted listing {}", id);

        Ok(())
    }
}
