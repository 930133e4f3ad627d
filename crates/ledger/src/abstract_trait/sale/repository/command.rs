use crate::{
    domain::requests::sale::CreateSaleRecord,
    model::{sale::Sale as SaleModel, stock_item::StockItem as StockItemModel},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynSaleCommandRepository = Arc<dyn SaleCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SaleCommandRepositoryTrait {
    /// Decrements stock and inserts the sale as one transaction. Returns the
    /// sale and the catalog row as it stands afterwards.
    async fn record_sale(
        &self,
        req: &CreateSaleRecord,
    ) -> Result<(SaleModel, StockItemModel), RepositoryError>;

    /// Deletes the sale and puts its units back as one transaction. The
    /// catalog row is `None` when it no longer exists and nothing was restored.
    async fn reverse_sale(
        &self,
        id: i64,
    ) -> Result<(SaleModel, Option<StockItemModel>), RepositoryError>;
}
