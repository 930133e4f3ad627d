use crate::{
    abstract_trait::sale::repository::SaleCommandRepositoryTrait,
    domain::requests::sale::CreateSaleRecord,
    model::{sale::Sale as SaleModel, stock_item::StockItem as StockItemModel},
    repository::{
        sale::SALE_COLUMNS,
        stock_item::{apply_quantity_delta, fetch_stock_item},
    },
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info, warn};

pub struct SaleCommandRepository {
    db: ConnectionPool,
}

impl SaleCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SaleCommandRepositoryTrait for SaleCommandRepository {
    async fn record_sale(
        &self,
        req: &CreateSaleRecord,
    ) -> Result<(SaleModel, StockItemModel), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let item = fetch_stock_item(&mut *tx, &req.stock_item_name)
            .await?
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("stock item '{}'", req.stock_item_name))
            })?;

        if req.quantity > item.quantity {
            warn!(
                "🚫 Not enough '{}' to sell {}: {} left",
                item.name, req.quantity, item.quantity
            );
            return Err(RepositoryError::InsufficientStock {
                name: item.name,
                requested: req.quantity,
                available: item.quantity,
            });
        }

        let updated = apply_quantity_delta(&mut *tx, &item.name, req.quantity).await?;

        let sale = sqlx::query_as::<_, SaleModel>(&format!(
            r#"
            INSERT INTO sales (stock_item_name, quantity, unit_price_cents, sold_at)
            VALUES (?, ?, ?, ?)
            RETURNING {SALE_COLUMNS}
            "#
        ))
        .bind(&item.name)
        .bind(req.quantity)
        .bind(item.price_cents)
        .bind(req.sold_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to insert sale of '{}': {:?}",
                req.stock_item_name, err
            );
            RepositoryError::from(err)
        })?;

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit sale of '{}': {:?}", req.stock_item_name, e);
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Sale #{} recorded: {} x '{}' at {} cents, {} left",
            sale.id, sale.quantity, sale.stock_item_name, sale.unit_price_cents, updated.quantity
        );
        Ok((sale, updated))
    }

    async fn reverse_sale(
        &self,
        id: i64,
    ) -> Result<(SaleModel, Option<StockItemModel>), RepositoryError> {
        info!("↩️ Reversing sale #{}", id);

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let sale = sqlx::query_as::<_, SaleModel>(&format!(
            "DELETE FROM sales WHERE id = ? RETURNING {SALE_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete sale #{}: {:?}", id, e);
            RepositoryError::from(e)
        })?
        .ok_or_else(|| RepositoryError::NotFound(format!("sale #{id}")))?;

        let restored =
            match apply_quantity_delta(&mut *tx, &sale.stock_item_name, -sale.quantity).await {
                Ok(item) => Some(item),
                Err(RepositoryError::NotFound(_)) => {
                    warn!(
                        "⚠️ '{}' is no longer in the catalog, sale #{} removed without restocking",
                        sale.stock_item_name, sale.id
                    );
                    None
                }
                Err(e) => return Err(e),
            };

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit reversal of sale #{}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok((sale, restored))
    }
}
