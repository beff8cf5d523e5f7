//! String table metrics.
//!
//! Counts lookups and resource loads. Counters are relaxed atomics so the
//! lookup path stays lock-free.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global lookup metrics singleton.
#[derive(Debug)]
pub struct LookupMetrics {
    /// Number of `lookup` calls across all tables
    lookups: AtomicUsize,

    /// Number of resource files loaded successfully
    resource_loads: AtomicUsize,

    /// Number of resource files rejected during load
    load_failures: AtomicUsize,
}

static METRICS: OnceLock<LookupMetrics> = OnceLock::new();

impl LookupMetrics {
    fn new() -> Self {
        Self {
            lookups: AtomicUsize::new(0),
            resource_loads: AtomicUsize::new(0),
            load_failures: AtomicUsize::new(0),
        }
    }

    /// Get the global metrics instance.
    pub fn global() -> &'static LookupMetrics {
        METRICS.get_or_init(LookupMetrics::new)
    }

    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_resource_load(&self) {
        self.resource_loads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_load_failure(&self) {
        self.load_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn resource_loads(&self) -> usize {
        self.resource_loads.load(Ordering::Relaxed)
    }

    pub fn load_failures(&self) -> usize {
        self.load_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let loads = self.resource_loads();
        let failures = self.load_failures();
        let attempts = loads + failures;
        let load_success_rate = if attempts > 0 {
            (loads as f64 / attempts as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups: self.lookups(),
            resource_loads: loads,
            load_failures: failures,
            load_success_rate,
        }
    }
}

/// Snapshot of the lookup metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,

    pub resource_loads: usize,

    pub load_failures: usize,

    /// Successful loads as a percentage of load attempts (0-100)
    pub load_success_rate: f64,
}
