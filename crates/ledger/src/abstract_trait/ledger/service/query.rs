use crate::domain::response::{
    sale::SaleResponse,
    stock_item::StockItemResponse,
    totals::{BandTotals, DailyTotals},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynLedgerQueryService = Arc<dyn LedgerQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait LedgerQueryServiceTrait {
    async fn find_stock_item(&self, name: &str) -> Result<StockItemResponse, ServiceError>;
    async fn get_quantity(&self, name: &str) -> Result<i64, ServiceError>;
    async fn list_available_inventory(&self) -> Result<Vec<StockItemResponse>, ServiceError>;
    async fn list_todays_sales(&self) -> Result<Vec<SaleResponse>, ServiceError>;
    async fn compute_daily_totals(&self) -> Result<DailyTotals, ServiceError>;
    async fn compute_daily_totals_by_band(&self) -> Result<Vec<BandTotals>, ServiceError>;
}
