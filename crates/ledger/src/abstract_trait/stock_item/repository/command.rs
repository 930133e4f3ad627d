use crate::{
    domain::requests::stock_item::UpsertStockItemRecord,
    model::stock_item::StockItem as StockItemModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynStockItemCommandRepository = Arc<dyn StockItemCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait StockItemCommandRepositoryTrait {
    async fn upsert_stock_item(
        &self,
        req: &UpsertStockItemRecord,
    ) -> Result<StockItemModel, RepositoryError>;
    async fn adjust_quantity(
        &self,
        name: &str,
        delta: i64,
    ) -> Result<StockItemModel, RepositoryError>;
    async fn delete_stock_item(&self, name: &str) -> Result<bool, RepositoryError>;
}
