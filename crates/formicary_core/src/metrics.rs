//! Run statistics and logging setup.
//!
//! Provides structured logging and counters for monitoring a run without
//! touching the simulation state itself.

use crate::world::TickSummary;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Ticks between periodic `info` lines.
const LOG_INTERVAL: u64 = 1000;

/// Accumulates per-tick counters for a run.
#[derive(Debug)]
pub struct Metrics {
    tick_count: u64,
    pub pickups: u64,
    pub deliveries: u64,
    pub deposits: u64,
    pub expired: u64,
    busy: Duration,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: 0,
            pickups: 0,
            deliveries: 0,
            deposits: 0,
            expired: 0,
            busy: Duration::ZERO,
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&mut self, duration: Duration, summary: &TickSummary, pheromones: usize) {
        self.tick_count += 1;
        self.pickups += u64::from(summary.pickups);
        self.deliveries += u64::from(summary.deliveries);
        self.deposits += u64::from(summary.deposits);
        self.expired += summary.expired as u64;
        self.busy += duration;

        if self.tick_count % LOG_INTERVAL == 0 {
            tracing::info!(
                tick = self.tick_count,
                deliveries = self.deliveries,
                pheromones = pheromones,
                avg_tick_us = self.average_tick().as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    /// Gets the current tick count.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Mean wall time spent inside `World::update`.
    #[must_use]
    pub fn average_tick(&self) -> Duration {
        if self.tick_count == 0 {
            Duration::ZERO
        } else {
            self.busy.div_f64(self.tick_count as f64)
        }
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging. `RUST_LOG` overrides `default`.
pub fn init_logging(default: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new();
        assert_eq!(metrics.tick_count(), 0);
        assert_eq!(metrics.average_tick(), Duration::ZERO);
    }

    #[test]
    fn test_record_tick_accumulates() {
        let mut metrics = Metrics::new();
        let summary = TickSummary {
            pickups: 2,
            deliveries: 1,
            deposits: 3,
            expired: 4,
        };
        metrics.record_tick(Duration::from_millis(2), &summary, 10);
        metrics.record_tick(Duration::from_millis(4), &summary, 10);
        assert_eq!(metrics.tick_count(), 2);
        assert_eq!(metrics.pickups, 4);
        assert_eq!(metrics.deliveries, 2);
        assert_eq!(metrics.deposits, 6);
        assert_eq!(metrics.expired, 8);
        let avg = metrics.average_tick().as_nanos() as i128;
        assert!((avg - 3_000_000).abs() < 1_000);
    }

    #[test]
    fn test_average_tick_past_u32_ticks() {
        let mut metrics = Metrics::new();
        metrics.tick_count = u64::from(u32::MAX) + 1;
        metrics.busy = Duration::from_secs(1 << 32);
        let avg = metrics.average_tick().as_nanos() as i128;
        assert!((avg - 1_000_000_000).abs() < 1_000_000);
    }
}
