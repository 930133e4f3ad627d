use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Operation {
    UpsertStockItem,
    AdjustStockQuantity,
    DeleteStockItem,
    RecordSale,
    ReverseSale,
    FindStockItem,
    GetQuantity,
    ListAvailableInventory,
    ListTodaysSales,
    ComputeDailyTotals,
    ComputeDailyTotalsByBand,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub operation: Operation,
    pub status: Status,
}

#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(vec![
                    0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
                ])
            }),
        }
    }

    pub fn register(&self, registry: &mut Registry, prefix: &str) {
        registry.register(
            format!("{prefix}_operations"),
            "Ledger operations by outcome",
            self.request_counter.clone(),
        );

        registry.register(
            format!("{prefix}_operation_duration_seconds"),
            "Ledger operation latency",
            self.request_duration.clone(),
        );
    }

    pub fn record(&self, operation: Operation, status: Status, duration_secs: f64) {
        let labels = Labels { operation, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }
}

pub fn encode_registry(registry: &Registry) -> Result<String, std::fmt::Error> {
    let mut buffer = String::new();
    encode(&mut buffer, registry)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_split_by_outcome() {
        let metrics = Metrics::new();
        metrics.record(Operation::RecordSale, Status::Success, 0.002);
        metrics.record(Operation::RecordSale, Status::Success, 0.003);
        metrics.record(Operation::RecordSale, Status::Error, 0.001);

        let ok = Labels {
            operation: Operation::RecordSale,
            status: Status::Success,
        };
        let failed = Labels {
            operation: Operation::RecordSale,
            status: Status::Error,
        };

        assert_eq!(metrics.request_counter.get_or_create(&ok).get(), 2);
        assert_eq!(metrics.request_counter.get_or_create(&failed).get(), 1);
    }

    #[test]
    fn encodes_registered_families() {
        let mut registry = Registry::default();
        let metrics = Metrics::new();
        metrics.register(&mut registry, "ledger");
        metrics.record(Operation::GetQuantity, Status::Success, 0.001);

        let text = encode_registry(&registry).unwrap();
        assert!(text.contains("ledger_operations_total"));
        assert!(text.contains("operation=\"GetQuantity\""));
    }
}
