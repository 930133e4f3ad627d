use crate::model::stock_item::StockItem as StockItemModel;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynStockItemQueryRepository = Arc<dyn StockItemQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait StockItemQueryRepositoryTrait {
    async fn find_by_name(&self, name: &str) -> Result<Option<StockItemModel>, RepositoryError>;
    async fn find_in_stock_created_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<StockItemModel>, RepositoryError>;
}
