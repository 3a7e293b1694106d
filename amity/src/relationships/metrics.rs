//! Store Metrics Tracking
//!
//! Counts introductions, rescales and rejected inserts on a shared store so
//! hosts can see how often the bounds actually bite.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics snapshot for a point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Persons introduced (new or updated values)
    pub introductions: u64,

    /// Introductions that triggered a whole-store rescale
    pub rescales: u64,

    /// Inserts rejected for duplicate ids or invalid values
    pub rejected: u64,

    /// Bulk multiply operations applied
    pub bulk_multiplies: u64,

    /// Timestamp of snapshot
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Store metrics collector
#[derive(Clone, Debug)]
pub struct StoreMetrics {
    introductions: Arc<AtomicU64>,
    rescales: Arc<AtomicU64>,
    rejected: Arc<AtomicU64>,
    bulk_multiplies: Arc<AtomicU64>,
}

impl StoreMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            introductions: Arc::new(AtomicU64::new(0)),
            rescales: Arc::new(AtomicU64::new(0)),
            rejected: Arc::new(AtomicU64::new(0)),
            bulk_multiplies: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a successful introduction and whether it rescaled the store
    pub fn record_introduction(&self, rescaled: bool) {
        self.introductions.fetch_add(1, Ordering::SeqCst);
        if rescaled {
            self.rescales.fetch_add(1, Ordering::SeqCst);
        }
    }

    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_bulk_multiply(&self) {
        self.bulk_multiplies.fetch_add(1, Ordering::SeqCst);
    }

    /// Get a snapshot of current metrics
    pub fn export_metrics(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            introductions: self.introductions.load(Ordering::SeqCst),
            rescales: self.rescales.load(Ordering::SeqCst),
            rejected: self.rejected.load(Ordering::SeqCst),
            bulk_multiplies: self.bulk_multiplies.load(Ordering::SeqCst),
            timestamp: chrono::Utc::now(),
        }
    }

    /// Percentage of introductions that rescaled the store
    pub fn rescale_percentage(&self) -> f64 {
        let rescales = self.rescales.load(Ordering::SeqCst) as f64;
        let total = self.introductions.load(Ordering::SeqCst) as f64;

        if total == 0.0 {
            0.0
        } else {
            (rescales / total) * 100.0
        }
    }

    /// Reset all metrics
    pub fn reset(&self) {
        self.introductions.store(0, Ordering::SeqCst);
        self.rescales.store(0, Ordering::SeqCst);
        self.rejected.store(0, Ordering::SeqCst);
        self.bulk_multiplies.store(0, Ordering::SeqCst);
    }

    /// Get a summary of metrics for human-readable output
    pub fn summary(&self) -> String {
        let snapshot = self.export_metrics();
        format!(
            "Store Metrics Snapshot\n\
             ======================\n\
             Introductions: {}\n\
             Rescales: {} ({:.1}%)\n\
             Rejected: {}\n\
             Bulk Multiplies: {}",
            snapshot.introductions,
            snapshot.rescales,
            self.rescale_percentage(),
            snapshot.rejected,
            snapshot.bulk_multiplies
        )
    }
}

impl Default for StoreMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_introductions() {
        let metrics = StoreMetrics::new();
        metrics.record_introduction(false);
        metrics.record_introduction(true);

        let snapshot = metrics.export_metrics();
        assert_eq!(snapshot.introductions, 2);
        assert_eq!(snapshot.rescales, 1);
        assert!((metrics.rescale_percentage() - 50.0).abs() < 0.1);
    }

    #[test]
    fn test_rescale_percentage_empty() {
        assert_eq!(StoreMetrics::new().rescale_percentage(), 0.0);
    }

    #[test]
    fn test_reset_metrics() {
        let metrics = StoreMetrics::new();
        metrics.record_rejected();
        metrics.record_bulk_multiply();
        metrics.reset();

        let after = metrics.export_metrics();
        assert_eq!(after.rejected, 0);
        assert_eq!(after.bulk_multiplies, 0);
    }

    #[test]
    fn test_metrics_clone_shares_counters() {
        let metrics = StoreMetrics::new();
        let cloned = metrics.clone();
        cloned.record_introduction(true);

        assert_eq!(metrics.export_metrics().rescales, 1);
        assert!(metrics.summary().contains("Rescales: 1"));
    }
}
