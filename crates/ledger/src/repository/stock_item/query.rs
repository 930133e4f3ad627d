use crate::{
    abstract_trait::stock_item::repository::StockItemQueryRepositoryTrait,
    model::stock_item::StockItem as StockItemModel,
    repository::stock_item::{STOCK_ITEM_COLUMNS, fetch_stock_item},
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct StockItemQueryRepository {
    db: ConnectionPool,
}

impl StockItemQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StockItemQueryRepositoryTrait for StockItemQueryRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<StockItemModel>, RepositoryError> {
        info!("🆔 Fetching stock item by name: {}", name);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        fetch_stock_item(&mut *conn, name).await
    }

    async fn find_in_stock_created_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<StockItemModel>, RepositoryError> {
        info!("🟢 Fetching stock created between {} and {}", start, end);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let items = sqlx::query_as::<_, StockItemModel>(&format!(
            r#"
            SELECT {STOCK_ITEM_COLUMNS}
            FROM stock_items
            WHERE quantity > 0
              AND created_at >= ?
              AND created_at < ?
            ORDER BY name ASC
            "#
        ))
        .bind(start)
        .bind(end)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch available stock: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(items)
    }
}
