//! Optional metrics instrumentation for athanor reads.
//!
//! When the `observe` feature is enabled, read operations emit counters
//! and histograms via the [`metrics`] crate. A downstream application must
//! install a metrics recorder (e.g. `metrics-exporter-prometheus`) to
//! collect the data.
//!
//! When the feature is **not** enabled every function in this module is a
//! zero-cost no-op.

/// Record one completed stream read (counter + latency + row count).
///
/// - `athanor.read.total` – incremented on every completed read
/// - `athanor.read.duration_seconds` – histogram of read latency
/// - `athanor.read.rows_total` – rows materialized
#[inline]
pub fn record_stream_read(duration: std::time::Duration, rows: u64) {
    #[cfg(feature = "observe")]
    {
        metrics::counter!("athanor.read.total").increment(1);
        metrics::histogram!("athanor.read.duration_seconds").record(duration.as_secs_f64());
        metrics::counter!("athanor.read.rows_total").increment(rows);
    }
    #[cfg(not(feature = "observe"))]
    {
        let _ = (duration, rows);
    }
}

/// Record a cancelled suspension-capable read.
///
/// - `athanor.read.cancelled_total` – counter
#[inline]
pub fn record_read_cancelled() {
    #[cfg(feature = "observe")]
    {
        metrics::counter!("athanor.read.cancelled_total").increment(1);
    }
}
