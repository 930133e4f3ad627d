use crate::{
    abstract_trait::ledger::service::{LedgerCommandServiceTrait, LedgerQueryServiceTrait},
    config::myconfig::Config,
    di::{DependenciesInject, DependenciesInjectDeps},
};
use anyhow::{Context, Result};
use chrono::FixedOffset;
use prometheus_client::registry::Registry;
use shared::{
    config::{ConnectionManager, ConnectionPool},
    utils::{DynClock, SystemClock, encode_registry},
};
use std::{fmt, sync::Arc};
use tracing::info;

/// Handle to one stock catalog and sales ledger. Build it once and pass it to
/// whatever needs the ledger; every operation borrows a pooled connection for
/// its own duration only.
#[derive(Clone)]
pub struct InventoryLedger {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pool: ConnectionPool,
}

impl fmt::Debug for InventoryLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryLedger")
            .field("di_container", &self.di_container)
            .field("registry", &self.registry)
            .finish()
    }
}

impl InventoryLedger {
    pub fn new(pool: ConnectionPool, clock: DynClock, utc_offset: FixedOffset) -> Self {
        let mut registry = Registry::default();

        let deps = DependenciesInjectDeps {
            pool: pool.clone(),
            clock,
            utc_offset,
        };

        let di_container = DependenciesInject::new(deps, &mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
            pool,
        }
    }

    pub async fn connect(config: &Config) -> Result<Self> {
        let pool = ConnectionManager::new_pool(&config.database_url, config.db_max_conn)
            .await
            .context("Failed to initialize database pool")?;

        let ledger = Self::new(pool, Arc::new(SystemClock), config.utc_offset);

        if config.run_migrations {
            ledger
                .migrate()
                .await
                .context("Failed to run database migrations")?;
        }

        Ok(ledger)
    }

    /// Fresh, migrated ledger that lives only as long as the handle.
    pub async fn in_memory(clock: DynClock, utc_offset: FixedOffset) -> Result<Self> {
        let pool = ConnectionManager::in_memory().await?;
        let ledger = Self::new(pool, clock, utc_offset);
        ledger.migrate().await?;
        Ok(ledger)
    }

    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("✅ Ledger schema is up to date");
        Ok(())
    }

    pub fn commands(&self) -> &(dyn LedgerCommandServiceTrait + Send + Sync) {
        self.di_container.ledger_command.as_ref()
    }

    pub fn queries(&self) -> &(dyn LedgerQueryServiceTrait + Send + Sync) {
        self.di_container.ledger_query.as_ref()
    }

    pub fn encode_metrics(&self) -> Result<String> {
        encode_registry(&self.registry).context("Failed to encode ledger metrics")
    }

    pub async fn close(self) {
        self.pool.close().await;
        info!("🔒 Database closed");
    }
}
