pub mod control;

pub use control::{ControlCommand, ControlOutcome};

use crate::model::config::SimulationConfig;
use crate::model::error::ConfigError;
use crate::model::snapshot::WorldSnapshot;
use crate::model::world::World;
use murmuration_core::Metrics;
use murmuration_data::LiveEvent;
use std::time::Instant;

/// Drives a [`World`]: pausing, single steps and metrics. Pausing is a
/// property of the driver; the world itself only ever advances when asked.
pub struct App {
    pub world: World,
    pub paused: bool,
    pub metrics: Metrics,
}

impl App {
    pub fn new(config: SimulationConfig) -> anyhow::Result<Self> {
        Ok(Self::with_world(World::new(config)?))
    }

    #[must_use]
    pub fn with_world(world: World) -> Self {
        Self {
            world,
            paused: false,
            metrics: Metrics::new(),
        }
    }

    pub fn apply(&mut self, command: ControlCommand) -> Result<ControlOutcome, ConfigError> {
        let outcome = match command {
            ControlCommand::Resize { width, height } => {
                self.world.resize(width, height)?;
                ControlOutcome::Applied
            }
            ControlCommand::SetPopulationTarget { target } => {
                ControlOutcome::Population(self.world.set_population_target(target))
            }
            ControlCommand::AddPredator => ControlOutcome::PredatorAdded(self.world.add_predator()),
            ControlCommand::RemovePredator => {
                ControlOutcome::PredatorRemoved(self.world.remove_predator())
            }
            ControlCommand::SetMaxSpeed { role, value } => {
                self.world.set_max_speed(role, value)?;
                ControlOutcome::Applied
            }
            ControlCommand::Pause => {
                self.paused = true;
                tracing::info!(tick = self.world.tick, "Paused");
                ControlOutcome::Applied
            }
            ControlCommand::Resume => {
                self.paused = false;
                tracing::info!(tick = self.world.tick, "Resumed");
                ControlOutcome::Applied
            }
            ControlCommand::Step => {
                let kills = self.tick().len();
                ControlOutcome::Stepped {
                    tick: self.world.tick,
                    kills,
                }
            }
        };
        Ok(outcome)
    }

    /// Advances one tick unless paused. Returns `None` while paused.
    pub fn frame(&mut self) -> Option<(WorldSnapshot, Vec<LiveEvent>)> {
        if self.paused {
            return None;
        }
        let events = self.tick();
        Some((self.world.snapshot(), events))
    }

    /// Runs `ticks` frames without rendering and returns all events.
    pub fn run_headless(&mut self, ticks: u64) -> Vec<LiveEvent> {
        let mut events = Vec::new();
        for _ in 0..ticks {
            if self.paused {
                break;
            }
            events.extend(self.tick());
        }
        events
    }

    fn tick(&mut self) -> Vec<LiveEvent> {
        let started = Instant::now();
        let events = self.world.update();
        self.metrics.record_kills(events.len());
        self.metrics.record_tick(
            started.elapsed(),
            self.world.population.boid_count(),
            self.world.population.predator_count(),
        );
        events
    }
}
