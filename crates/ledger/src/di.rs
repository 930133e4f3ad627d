use crate::{
    abstract_trait::ledger::service::{DynLedgerCommandService, DynLedgerQueryService},
    repository::{
        sale::{SaleCommandRepository, SaleQueryRepository},
        stock_item::{StockItemCommandRepository, StockItemQueryRepository},
    },
    service::{command::LedgerCommandService, query::LedgerQueryService},
};
use chrono::FixedOffset;
use prometheus_client::registry::Registry;
use shared::{
    config::ConnectionPool,
    utils::{DynClock, Metrics},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub ledger_command: DynLedgerCommandService,
    pub ledger_query: DynLedgerQueryService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("ledger_command", &"LedgerCommandService")
            .field("ledger_query", &"LedgerQueryService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub clock: DynClock,
    pub utc_offset: FixedOffset,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps {
            pool,
            clock,
            utc_offset,
        } = deps;

        let metrics = Metrics::new();
        metrics.register(registry, "merch_ledger");

        let stock_query_repo = Arc::new(StockItemQueryRepository::new(pool.clone()));
        let stock_command_repo = Arc::new(StockItemCommandRepository::new(pool.clone()));
        let sale_query_repo = Arc::new(SaleQueryRepository::new(pool.clone()));
        let sale_command_repo = Arc::new(SaleCommandRepository::new(pool));

        let ledger_command = LedgerCommandService::new(
            stock_command_repo,
            sale_command_repo,
            clock.clone(),
            metrics.clone(),
        );

        let ledger_query = LedgerQueryService::new(
            stock_query_repo,
            sale_query_repo,
            clock,
            utc_offset,
            metrics,
        );

        Self {
            ledger_command: Arc::new(ledger_command),
            ledger_query: Arc::new(ledger_query),
        }
    }
}
