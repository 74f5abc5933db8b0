pub mod report;

pub use report::{ColonyReport, SimulationReport, StopReason};

use anyhow::Result;
use std::time::{Duration, Instant};

use crate::model::config::AppConfig;
use crate::model::metrics::Metrics;
use crate::model::world::{TickSummary, World};

/// Headless shell around a [`World`]: feeds it a fixed frame delta until the
/// tick budget runs out, the food is gone or someone clears `running`.
pub struct App {
    pub running: bool,
    pub world: World,
    pub metrics: Metrics,
    frame_delta: f32,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let frame_delta = config.frame_delta();
        let world = World::new(config)?;
        tracing::info!(
            seed = ?world.config.world.seed,
            fingerprint = %world.config.fingerprint(),
            "Simulation initialised"
        );
        Ok(Self {
            running: true,
            world,
            metrics: Metrics::new(),
            frame_delta,
        })
    }

    #[must_use]
    pub fn frame_delta(&self) -> f32 {
        self.frame_delta
    }

    /// Close signal; the run loop exits before its next tick.
    pub fn close(&mut self) {
        self.running = false;
    }

    /// Advances one frame and records it.
    pub fn step(&mut self) -> TickSummary {
        let started = Instant::now();
        let summary = self.world.update(self.frame_delta);
        self.metrics
            .record_tick(started.elapsed(), &summary, self.world.pheromones.len());
        summary
    }

    /// Runs until `max_ticks` more ticks have passed (`None` means no
    /// budget), every food source is spent, or the app is closed.
    pub fn run(&mut self, max_ticks: Option<u64>) -> SimulationReport {
        let mut ticks = 0u64;
        let stop = loop {
            if !self.running {
                break StopReason::Closed;
            }
            if max_ticks.is_some_and(|budget| ticks >= budget) {
                break StopReason::TickBudget;
            }
            if self.world.is_exhausted() {
                break StopReason::Exhausted;
            }
            self.step();
            ticks += 1;
        };

        tracing::info!(
            ?stop,
            ticks,
            collected = self.world.total_food_collected(),
            "Simulation finished"
        );
        self.report(stop)
    }

    #[must_use]
    pub fn report(&self, stop: StopReason) -> SimulationReport {
        SimulationReport::collect(&self.world, &self.metrics, stop)
    }

    #[must_use]
    pub fn average_tick(&self) -> Duration {
        self.metrics.average_tick()
    }
}
