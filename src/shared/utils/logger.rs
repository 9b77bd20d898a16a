use log::{debug, info};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("holocron", log::LevelFilter::Debug)
            .filter_module("holocron_lib", log::LevelFilter::Debug)
            .filter_module("reqwest", log::LevelFilter::Warn) // Reduce HTTP noise
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn)
            .parse_default_env() // RUST_LOG wins over the defaults above
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            // Results go to stdout, logs stay on stderr
            .target(env_logger::Target::Stderr)
            .init();

        info!("Logging system initialized");
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log a finished resource fetch
    pub fn fetch(url: &str, status: &str, duration_ms: u64) {
        debug!("SWAPI: GET {} {} in {}ms", url, status, duration_ms);
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => info!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.elapsed_ms();
        LogContext::performance_metric(&self.operation, duration, Some(info));
        duration
    }
}
