//! Performance metrics collection for the simulation.
//!
//! Provides structured logging and counters for monitoring tick cost and
//! population health.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Metrics collector shared by the world driver.
pub struct Metrics {
    tick_count: AtomicU64,
    boid_count: AtomicU64,
    predator_count: AtomicU64,
    kill_count: AtomicU64,
    last_tick_micros: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            boid_count: AtomicU64::new(0),
            predator_count: AtomicU64::new(0),
            kill_count: AtomicU64::new(0),
            last_tick_micros: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration and resulting population.
    pub fn record_tick(&self, duration: Duration, boids: usize, predators: usize) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.boid_count.store(boids as u64, Ordering::Relaxed);
        self.predator_count.store(predators as u64, Ordering::Relaxed);
        self.last_tick_micros
            .store(duration.as_micros() as u64, Ordering::Relaxed);

        // Log at info level every 1000 ticks
        if tick % 1000 == 0 {
            tracing::info!(
                tick = tick,
                boids = boids,
                predators = predators,
                kills = self.kill_count(),
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    pub fn record_kills(&self, kills: usize) {
        if kills > 0 {
            self.kill_count.fetch_add(kills as u64, Ordering::Relaxed);
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn boid_count(&self) -> u64 {
        self.boid_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn predator_count(&self) -> u64 {
        self.predator_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn kill_count(&self) -> u64 {
        self.kill_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn last_tick_duration(&self) -> Duration {
        Duration::from_micros(self.last_tick_micros.load(Ordering::Relaxed))
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize the tracing subscriber. `RUST_LOG` overrides the default
/// `info` level. Calling this twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
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
        assert_eq!(metrics.kill_count(), 0);
    }

    #[test]
    fn test_record_tick() {
        let metrics = Metrics::new();
        metrics.record_tick(Duration::from_millis(16), 100, 2);
        assert_eq!(metrics.tick_count(), 1);
        assert_eq!(metrics.boid_count(), 100);
        assert_eq!(metrics.predator_count(), 2);
        assert_eq!(metrics.last_tick_duration(), Duration::from_millis(16));
    }

    #[test]
    fn test_record_kills_accumulates() {
        let metrics = Metrics::new();
        metrics.record_kills(2);
        metrics.record_kills(0);
        metrics.record_kills(1);
        assert_eq!(metrics.kill_count(), 3);
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
    }
}
