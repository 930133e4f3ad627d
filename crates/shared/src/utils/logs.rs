use tracing::Subscriber;
use tracing_appender::{
    non_blocking,
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber. Console output follows `RUST_LOG` and falls
/// back to `info`. With `enable_file` a JSON log is also written to a daily
/// rolling file; keep the returned guard alive or buffered lines are lost.
pub fn init_logger(component: &str, is_dev: bool, enable_file: bool) -> Option<WorkerGuard> {
    let (file_writer, guard) = if enable_file {
        let log_dir = if is_dev { "./logs" } else { "/var/log/merch-ledger" };

        let file_name = format!("{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (writer, guard) = non_blocking(file_appender);
        (Some(writer), Some(guard))
    } else {
        (None, None)
    };

    subscriber(is_dev, file_writer).init();

    guard
}

fn subscriber(
    is_dev: bool,
    file_writer: Option<NonBlocking>,
) -> impl Subscriber + Send + Sync + 'static {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .with_target(false)
        .with_ansi(is_dev)
        .with_filter(console_filter);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"))
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        io::Write,
        sync::{Arc, Mutex},
    };

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn console_only_subscriber_accepts_events() {
        let subscriber = subscriber(false, None);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("📋 console only");
        });
    }

    #[test]
    fn file_layer_writes_json_lines() {
        let captured = Captured::default();
        let (writer, guard) = non_blocking(captured.clone());

        tracing::subscriber::with_default(subscriber(true, Some(writer)), || {
            tracing::info!(sale_id = 7, "↩️ sale reversed");
            tracing::debug!("below the file filter");
        });
        drop(guard);

        let text = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1, "{text}");
        assert!(lines[0].starts_with('{'));
        assert!(lines[0].contains("sale reversed"));
        assert!(lines[0].contains("\"sale_id\":7"));
    }
}
