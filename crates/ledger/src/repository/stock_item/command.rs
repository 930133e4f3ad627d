use crate::{
    abstract_trait::stock_item::repository::StockItemCommandRepositoryTrait,
    domain::requests::stock_item::UpsertStockItemRecord,
    model::stock_item::StockItem as StockItemModel,
    repository::stock_item::{STOCK_ITEM_COLUMNS, apply_quantity_delta},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct StockItemCommandRepository {
    db: ConnectionPool,
}

impl StockItemCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StockItemCommandRepositoryTrait for StockItemCommandRepository {
    async fn upsert_stock_item(
        &self,
        req: &UpsertStockItemRecord,
    ) -> Result<StockItemModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // created_at is only written by the INSERT arm, so edits keep the original.
        let result = sqlx::query_as::<_, StockItemModel>(&format!(
            r#"
            INSERT INTO stock_items (name, band, quantity, price_cents, created_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(name) DO UPDATE SET
                band        = excluded.band,
                quantity    = excluded.quantity,
                price_cents = excluded.price_cents
            RETURNING {STOCK_ITEM_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(&req.band)
        .bind(req.quantity)
        .bind(req.price_cents)
        .bind(req.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to upsert stock item '{}': {:?}", req.name, err);
            RepositoryError::from(err)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Stored stock item '{}' ({} x {} cents)",
            result.name, result.quantity, result.price_cents
        );
        Ok(result)
    }

    async fn adjust_quantity(
        &self,
        name: &str,
        delta: i64,
    ) -> Result<StockItemModel, RepositoryError> {
        info!("📦 Adjusting stock of '{}' by {}", name, -delta);

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let updated = apply_quantity_delta(&mut *tx, name, delta).await?;

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit stock adjustment for '{}': {:?}", name, e);
            RepositoryError::from(e)
        })?;

        Ok(updated)
    }

    async fn delete_stock_item(&self, name: &str) -> Result<bool, RepositoryError> {
        info!("🗑️ Deleting stock item: {}", name);

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM stock_items WHERE name = ?")
            .bind(name)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete stock item '{}': {:?}", name, e);
                RepositoryError::from(e)
            })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
