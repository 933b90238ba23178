//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Search (outcomes, latency)
//! - History persistence
//! - Catalog loading
//!
//! Metrics are registered into the server's registry.

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts};

// =============================================================================
// Search Metrics
// =============================================================================

/// Search requests by outcome.
pub static SEARCHES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("cinestream_searches_total", "Total search requests"),
        &["outcome"], // "results", "no_results", "skipped"
    )
    .unwrap()
});

/// Time spent ranking the catalog for one query.
pub static SEARCH_DURATION: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "cinestream_search_duration_seconds",
            "Duration of catalog ranking per query",
        )
        .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1]),
    )
    .unwrap()
});

// =============================================================================
// History Metrics
// =============================================================================

/// History writes that failed and were dropped.
pub static HISTORY_WRITE_FAILURES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "cinestream_history_write_failures_total",
        "History writes that could not be persisted",
    )
    .unwrap()
});

// =============================================================================
// Catalog Metrics
// =============================================================================

/// Times the built-in sample catalog was served instead of the real one.
pub static CATALOG_FALLBACKS: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "cinestream_catalog_fallbacks_total",
        "Catalog loads that fell back to the built-in sample",
    )
    .unwrap()
});

/// Items in the loaded catalog.
pub static CATALOG_ITEMS: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new("cinestream_catalog_items", "Number of items in the catalog").unwrap()
});
