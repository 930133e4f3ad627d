pub mod command;
pub mod query;

use shared::{
    errors::{ErrorKind, ServiceError},
    utils::{Metrics, Operation, Status},
};
use std::time::Instant;
use tracing::{error, info, warn};

/// Logs the outcome of a ledger operation and records it in the metrics.
pub(crate) fn complete_operation<T>(
    metrics: &Metrics,
    operation: Operation,
    started: Instant,
    result: &Result<T, ServiceError>,
) {
    let elapsed = started.elapsed().as_secs_f64();

    match result {
        Ok(_) => {
            info!("✅ Operation completed successfully: {operation:?}");
            metrics.record(operation, Status::Success, elapsed);
        }
        Err(err) => {
            match err.kind() {
                ErrorKind::Storage | ErrorKind::Internal => {
                    error!("❌ Operation failed: {operation:?}: {err}")
                }
                _ => warn!("⚠️ Operation rejected: {operation:?}: {err}"),
            }
            metrics.record(operation, Status::Error, elapsed);
        }
    }
}
