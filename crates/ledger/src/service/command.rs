use crate::{
    abstract_trait::{
        ledger::service::LedgerCommandServiceTrait,
        sale::repository::DynSaleCommandRepository,
        stock_item::repository::DynStockItemCommandRepository,
    },
    domain::{
        money::price_to_cents,
        requests::{
            sale::{CreateSaleRecord, RecordSaleRequest},
            stock_item::{AdjustStockRequest, UpsertStockItemRecord, UpsertStockItemRequest},
        },
        response::{
            sale::{SaleResponse, SaleReversal},
            stock_item::StockItemResponse,
        },
    },
    service::complete_operation,
};
use async_trait::async_trait;
use shared::{
    errors::ServiceError,
    utils::{DynClock, Metrics, Operation},
};
use std::time::Instant;
use tracing::info;
use validator::Validate;

#[derive(Clone)]
pub struct LedgerCommandService {
    pub stock_command: DynStockItemCommandRepository,
    pub sale_command: DynSaleCommandRepository,
    pub clock: DynClock,
    pub metrics: Metrics,
}

impl LedgerCommandService {
    pub fn new(
        stock_command: DynStockItemCommandRepository,
        sale_command: DynSaleCommandRepository,
        clock: DynClock,
        metrics: Metrics,
    ) -> Self {
        Self {
            stock_command,
            sale_command,
            clock,
            metrics,
        }
    }

    async fn upsert(&self, req: &UpsertStockItemRequest) -> Result<StockItemResponse, ServiceError> {
        req.validate()?;

        let price_cents = price_to_cents(req.price)
            .ok_or_else(|| ServiceError::Validation(vec!["price: out of range".into()]))?;

        let record = UpsertStockItemRecord {
            name: req.name.trim().to_string(),
            band: req.band.trim().to_string(),
            quantity: req.quantity,
            price_cents,
            created_at: self.clock.now().naive_utc(),
        };

        let item = self.stock_command.upsert_stock_item(&record).await?;
        Ok(StockItemResponse::from(item))
    }

    async fn adjust(&self, req: &AdjustStockRequest) -> Result<StockItemResponse, ServiceError> {
        req.validate()?;

        let item = self
            .stock_command
            .adjust_quantity(req.name.trim(), req.delta)
            .await?;
        Ok(StockItemResponse::from(item))
    }

    async fn sell(&self, req: &RecordSaleRequest) -> Result<SaleResponse, ServiceError> {
        req.validate()?;

        let record = CreateSaleRecord {
            stock_item_name: req.stock_item_name.trim().to_string(),
            quantity: req.quantity,
            sold_at: self.clock.now().naive_utc(),
        };

        let (sale, item) = self.sale_command.record_sale(&record).await?;
        Ok(SaleResponse::from_sale(sale, Some(item.band)))
    }

    async fn reverse(&self, sale_id: i64) -> Result<SaleReversal, ServiceError> {
        let (sale, item) = self.sale_command.reverse_sale(sale_id).await?;

        let stock_restored = item.is_some();
        let band = item.map(|i| i.band);

        Ok(SaleReversal {
            sale: SaleResponse::from_sale(sale, band),
            stock_restored,
        })
    }
}

#[async_trait]
impl LedgerCommandServiceTrait for LedgerCommandService {
    async fn upsert_stock_item(
        &self,
        req: &UpsertStockItemRequest,
    ) -> Result<StockItemResponse, ServiceError> {
        info!(
            "🏗️ Upserting stock item '{}' for {} | qty={}, price={}",
            req.name, req.band, req.quantity, req.price
        );

        let started = Instant::now();
        let result = self.upsert(req).await;
        complete_operation(&self.metrics, Operation::UpsertStockItem, started, &result);
        result
    }

    async fn adjust_stock_quantity(
        &self,
        req: &AdjustStockRequest,
    ) -> Result<StockItemResponse, ServiceError> {
        info!("✏️ Adjusting '{}' by delta={}", req.name, req.delta);

        let started = Instant::now();
        let result = self.adjust(req).await;
        complete_operation(&self.metrics, Operation::AdjustStockQuantity, started, &result);
        result
    }

    async fn delete_stock_item(&self, name: &str) -> Result<bool, ServiceError> {
        info!("🗑️ Deleting stock item '{}'", name);

        let started = Instant::now();
        let result = self
            .stock_command
            .delete_stock_item(name.trim())
            .await
            .map_err(ServiceError::from);
        complete_operation(&self.metrics, Operation::DeleteStockItem, started, &result);
        result
    }

    async fn record_sale(&self, req: &RecordSaleRequest) -> Result<SaleResponse, ServiceError> {
        info!(
            "🛒 Recording sale of {} x '{}'",
            req.quantity, req.stock_item_name
        );

        let started = Instant::now();
        let result = self.sell(req).await;
        complete_operation(&self.metrics, Operation::RecordSale, started, &result);
        result
    }

    async fn reverse_sale(&self, sale_id: i64) -> Result<SaleReversal, ServiceError> {
        info!("↩️ Reversing sale #{}", sale_id);

        let started = Instant::now();
        let result = self.reverse(sale_id).await;
        complete_operation(&self.metrics, Operation::ReverseSale, started, &result);
        result
    }
}
