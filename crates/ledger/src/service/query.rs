use crate::{
    abstract_trait::{
        ledger::service::LedgerQueryServiceTrait,
        sale::repository::DynSaleQueryRepository,
        stock_item::repository::DynStockItemQueryRepository,
    },
    domain::response::{
        sale::SaleResponse,
        stock_item::StockItemResponse,
        totals::{BandTotals, DailyTotals},
    },
    service::complete_operation,
};
use async_trait::async_trait;
use chrono::FixedOffset;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{DayWindow, DynClock, Metrics, Operation},
};
use std::time::Instant;
use tracing::info;

#[derive(Clone)]
pub struct LedgerQueryService {
    pub stock_query: DynStockItemQueryRepository,
    pub sale_query: DynSaleQueryRepository,
    pub clock: DynClock,
    pub utc_offset: FixedOffset,
    pub metrics: Metrics,
}

impl LedgerQueryService {
    pub fn new(
        stock_query: DynStockItemQueryRepository,
        sale_query: DynSaleQueryRepository,
        clock: DynClock,
        utc_offset: FixedOffset,
        metrics: Metrics,
    ) -> Self {
        Self {
            stock_query,
            sale_query,
            clock,
            utc_offset,
            metrics,
        }
    }

    fn today(&self) -> DayWindow {
        DayWindow::containing(self.clock.now(), self.utc_offset)
    }

    async fn find(&self, name: &str) -> Result<StockItemResponse, ServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::Validation(vec!["name: must not be blank".into()]));
        }

        let item = self
            .stock_query
            .find_by_name(name)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("stock item '{name}'")))?;

        Ok(StockItemResponse::from(item))
    }

    async fn available(&self) -> Result<Vec<StockItemResponse>, ServiceError> {
        let window = self.today();

        let items = self
            .stock_query
            .find_in_stock_created_between(window.start, window.end)
            .await?;

        Ok(items.into_iter().map(StockItemResponse::from).collect())
    }

    async fn todays_sales(&self) -> Result<Vec<SaleResponse>, ServiceError> {
        let window = self.today();

        let rows = self
            .sale_query
            .find_sold_between(window.start, window.end)
            .await?;

        Ok(rows.into_iter().map(SaleResponse::from).collect())
    }
}

#[async_trait]
impl LedgerQueryServiceTrait for LedgerQueryService {
    async fn find_stock_item(&self, name: &str) -> Result<StockItemResponse, ServiceError> {
        info!("🔍 Finding stock item '{}'", name);

        let started = Instant::now();
        let result = self.find(name).await;
        complete_operation(&self.metrics, Operation::FindStockItem, started, &result);
        result
    }

    async fn get_quantity(&self, name: &str) -> Result<i64, ServiceError> {
        info!("🔢 Reading quantity of '{}'", name);

        let started = Instant::now();
        let result = self.find(name).await.map(|item| item.quantity);
        complete_operation(&self.metrics, Operation::GetQuantity, started, &result);
        result
    }

    async fn list_available_inventory(&self) -> Result<Vec<StockItemResponse>, ServiceError> {
        info!("📋 Listing today's available inventory");

        let started = Instant::now();
        let result = self.available().await;
        complete_operation(
            &self.metrics,
            Operation::ListAvailableInventory,
            started,
            &result,
        );
        result
    }

    async fn list_todays_sales(&self) -> Result<Vec<SaleResponse>, ServiceError> {
        info!("🧾 Listing today's sales");

        let started = Instant::now();
        let result = self.todays_sales().await;
        complete_operation(&self.metrics, Operation::ListTodaysSales, started, &result);
        result
    }

    async fn compute_daily_totals(&self) -> Result<DailyTotals, ServiceError> {
        info!("💰 Computing today's totals");

        let started = Instant::now();
        let result = self
            .todays_sales()
            .await
            .and_then(|sales| DailyTotals::from_sales(&sales));
        complete_operation(&self.metrics, Operation::ComputeDailyTotals, started, &result);
        result
    }

    async fn compute_daily_totals_by_band(&self) -> Result<Vec<BandTotals>, ServiceError> {
        info!("💰 Computing today's totals per band");

        let started = Instant::now();
        let result = self
            .todays_sales()
            .await
            .and_then(|sales| BandTotals::group(&sales));
        complete_operation(
            &self.metrics,
            Operation::ComputeDailyTotalsByBand,
            started,
            &result,
        );
        result
    }
}
