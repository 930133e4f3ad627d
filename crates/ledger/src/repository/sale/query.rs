use crate::{abstract_trait::sale::repository::SaleQueryRepositoryTrait, model::sale::SaleWithItem};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct SaleQueryRepository {
    db: ConnectionPool,
}

impl SaleQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SaleQueryRepositoryTrait for SaleQueryRepository {
    async fn find_sold_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<SaleWithItem>, RepositoryError> {
        info!("🔍 Fetching sales between {} and {}", start, end);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let rows = sqlx::query_as::<_, SaleWithItem>(
            r#"
            SELECT
                s.id,
                s.stock_item_name,
                si.band,
                s.quantity,
                s.unit_price_cents,
                s.sold_at
            FROM sales s
            LEFT JOIN stock_items si ON si.name = s.stock_item_name
            WHERE s.sold_at >= ?
              AND s.sold_at < ?
            ORDER BY s.id ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch sales: {:?}", e);
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }
}
