//! Basic metrics instrumentation for lead delivery.
//!
//! Provides counters for dispatches and per-channel outcomes, plus duration
//! tracking for the outbound HTTP requests.

use crate::client::ChannelKind;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by the dispatcher and its HTTP clients.
///
/// Cloning is cheap and every clone feeds the same counters.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of outbound HTTP requests
    http_requests_total: Arc<AtomicU64>,

    /// Total number of outbound HTTP requests that failed
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Dispatch calls (both modes)
    dispatches_total: Arc<AtomicU64>,

    /// Dispatch calls that returned an error to the caller
    dispatches_failed_total: Arc<AtomicU64>,

    email_successes_total: Arc<AtomicU64>,
    email_failures_total: Arc<AtomicU64>,
    webhook_successes_total: Arc<AtomicU64>,
    webhook_failures_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
            dispatches_total: Arc::new(AtomicU64::new(0)),
            dispatches_failed_total: Arc::new(AtomicU64::new(0)),
            email_successes_total: Arc::new(AtomicU64::new(0)),
            email_failures_total: Arc::new(AtomicU64::new(0)),
            webhook_successes_total: Arc::new(AtomicU64::new(0)),
            webhook_failures_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the outcome of one channel submission.
    pub fn record_channel_outcome(&self, kind: ChannelKind, success: bool) {
        let counter = match (kind, success) {
            (ChannelKind::Email, true) => &self.email_successes_total,
            (ChannelKind::Email, false) => &self.email_failures_total,
            (ChannelKind::Webhook, true) => &self.webhook_successes_total,
            (ChannelKind::Webhook, false) => &self.webhook_failures_total,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the aggregate result of a dispatch call.
    pub fn record_dispatch(&self, success: bool) {
        self.dispatches_total.fetch_add(1, Ordering::Relaxed);
        if !success {
            self.dispatches_failed_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get total HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP errors.
    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP duration in milliseconds.
    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn dispatches_total(&self) -> u64 {
        self.dispatches_total.load(Ordering::Relaxed)
    }

    pub fn dispatches_failed_total(&self) -> u64 {
        self.dispatches_failed_total.load(Ordering::Relaxed)
    }

    /// Successful submissions for a channel.
    pub fn channel_successes(&self, kind: ChannelKind) -> u64 {
        match kind {
            ChannelKind::Email => self.email_successes_total.load(Ordering::Relaxed),
            ChannelKind::Webhook => self.webhook_successes_total.load(Ordering::Relaxed),
        }
    }

    /// Failed submissions for a channel.
    pub fn channel_failures(&self, kind: ChannelKind) -> u64 {
        match kind {
            ChannelKind::Email => self.email_failures_total.load(Ordering::Relaxed),
            ChannelKind::Webhook => self.webhook_failures_total.load(Ordering::Relaxed),
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            dispatches_total: self.dispatches_total(),
            dispatches_failed_total: self.dispatches_failed_total(),
            email_successes_total: self.channel_successes(ChannelKind::Email),
            email_failures_total: self.channel_failures(ChannelKind::Email),
            webhook_successes_total: self.channel_successes(ChannelKind::Webhook),
            webhook_failures_total: self.channel_failures(ChannelKind::Webhook),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_avg_ms: f64,
    pub dispatches_total: u64,
    pub dispatches_failed_total: u64,
    pub email_successes_total: u64,
    pub email_failures_total: u64,
    pub webhook_successes_total: u64,
    pub webhook_failures_total: u64,
}

/// Helper for timing HTTP requests.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    /// Start timing an HTTP request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
        self.metrics.record_http_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.http_requests_total(), 0);
        assert_eq!(metrics.dispatches_total(), 0);
        assert_eq!(metrics.channel_successes(ChannelKind::Email), 0);
    }

    #[test]
    fn test_average_duration() {
        let metrics = Metrics::new();
        metrics.record_http_request(Duration::from_millis(100));
        metrics.record_http_request(Duration::from_millis(200));
        assert_eq!(metrics.http_requests_total(), 2);
        assert_eq!(metrics.http_duration_total_ms(), 300);
        assert_eq!(metrics.http_duration_avg_ms(), 150.0);
    }

    #[test]
    fn test_channel_outcomes_are_separate() {
        let metrics = Metrics::new();
        metrics.record_channel_outcome(ChannelKind::Email, false);
        metrics.record_channel_outcome(ChannelKind::Webhook, true);
        metrics.record_channel_outcome(ChannelKind::Webhook, true);

        assert_eq!(metrics.channel_failures(ChannelKind::Email), 1);
        assert_eq!(metrics.channel_successes(ChannelKind::Email), 0);
        assert_eq!(metrics.channel_successes(ChannelKind::Webhook), 2);
        assert_eq!(metrics.channel_failures(ChannelKind::Webhook), 0);
    }

    #[test]
    fn test_summary() {
        let metrics = Metrics::new();
        metrics.record_dispatch(true);
        metrics.record_dispatch(false);
        metrics.record_http_request(Duration::from_millis(100));
        metrics.record_http_error();

        let summary = metrics.summary();
        assert_eq!(summary.dispatches_total, 2);
        assert_eq!(summary.dispatches_failed_total, 1);
        assert_eq!(summary.http_requests_total, 1);
        assert_eq!(summary.http_errors_total, 1);
        assert_eq!(summary.http_duration_avg_ms, 100.0);
    }

    #[test]
    fn test_http_timer_with_error() {
        let metrics = Metrics::new();
        let timer = HttpTimer::new(metrics.clone());
        timer.complete_with_error();

        assert_eq!(metrics.http_requests_total(), 1);
        assert_eq!(metrics.http_errors_total(), 1);
    }

    #[test]
    fn test_concurrent_access() {
        let metrics = Metrics::new();
        let metrics1 = metrics.clone();
        let metrics2 = metrics.clone();

        let handle1 = thread::spawn(move || {
            for _ in 0..100 {
                metrics1.record_channel_outcome(ChannelKind::Email, true);
            }
        });

        let handle2 = thread::spawn(move || {
            for _ in 0..100 {
                metrics2.record_channel_outcome(ChannelKind::Email, true);
            }
        });

        handle1.join().unwrap();
        handle2.join().unwrap();

        assert_eq!(metrics.channel_successes(ChannelKind::Email), 200);
    }
}
