use anyhow::{Context, Result};
use merch_ledger::{
    InventoryLedger,
    config::myconfig::Config,
    domain::response::{
        sale::SaleResponse,
        stock_item::StockItemResponse,
        totals::{BandTotals, DailyTotals},
    },
};
use serde::Serialize;
use shared::{errors::ServiceError, utils::init_logger};
use tracing::{info, warn};

#[derive(Debug, Serialize)]
struct DailyReport {
    inventory: Vec<StockItemResponse>,
    sales: Vec<SaleResponse>,
    /// Absent on a day with sales for more than one band.
    totals: Option<DailyTotals>,
    totals_by_band: Vec<BandTotals>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;
    let _log_guard = init_logger("merch-ledger", config.dev_mode, config.enable_file_log);

    info!("🚀 Opening merch ledger at {}", config.database_url);

    let ledger = InventoryLedger::connect(&config)
        .await
        .context("Failed to open the ledger")?;

    let report = daily_report(&ledger).await;

    let metrics = ledger.encode_metrics();
    ledger.close().await;

    let report = report?;
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("Failed to serialize daily report")?
    );

    match metrics {
        Ok(text) => info!("📈 Ledger metrics:\n{text}"),
        Err(e) => warn!("Failed to encode metrics: {e:#}"),
    }

    Ok(())
}

async fn daily_report(ledger: &InventoryLedger) -> Result<DailyReport> {
    let queries = ledger.queries();

    let inventory = queries
        .list_available_inventory()
        .await
        .context("Failed to list today's inventory")?;

    let sales = queries
        .list_todays_sales()
        .await
        .context("Failed to list today's sales")?;

    let totals = match queries.compute_daily_totals().await {
        Ok(totals) => Some(totals),
        Err(ServiceError::MixedBands(bands)) => {
            warn!("⚠️ Sales for several bands today ({bands:?}), see totals_by_band");
            None
        }
        Err(e) => return Err(e).context("Failed to compute today's totals"),
    };

    let totals_by_band = queries
        .compute_daily_totals_by_band()
        .await
        .context("Failed to compute per-band totals")?;

    Ok(DailyReport {
        inventory,
        sales,
        totals,
        totals_by_band,
    })
}
