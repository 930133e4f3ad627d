use crate::domain::{
    requests::{
        sale::RecordSaleRequest,
        stock_item::{AdjustStockRequest, UpsertStockItemRequest},
    },
    response::{
        sale::{SaleResponse, SaleReversal},
        stock_item::StockItemResponse,
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynLedgerCommandService = Arc<dyn LedgerCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait LedgerCommandServiceTrait {
    async fn upsert_stock_item(
        &self,
        req: &UpsertStockItemRequest,
    ) -> Result<StockItemResponse, ServiceError>;
    async fn adjust_stock_quantity(
        &self,
        req: &AdjustStockRequest,
    ) -> Result<StockItemResponse, ServiceError>;
    async fn delete_stock_item(&self, name: &str) -> Result<bool, ServiceError>;
    async fn record_sale(&self, req: &RecordSaleRequest) -> Result<SaleResponse, ServiceError>;
    async fn reverse_sale(&self, sale_id: i64) -> Result<SaleReversal, ServiceError>;
}
