//! Runtime control surface of the world.
//!
//! Setters validate their input and write the live configuration; the next
//! tick picks the change up when it copies the configuration.

use crate::model::config::{validate_dimensions, validate_grid, validate_speed};
use crate::model::error::ConfigError;
use crate::model::population::PopulationChange;
use crate::model::snapshot::{AgentSnapshot, PopulationStats, WorldSnapshot};
use crate::model::world::World;
use murmuration_data::Role;
use uuid::Uuid;

impl World {
    /// Changes the world dimensions. Agents left outside the new bounds are
    /// steered back by boundary avoidance, never teleported.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), ConfigError> {
        let checked = validate_dimensions(width, height)
            .and_then(|()| validate_grid(width, height, self.config.world.tile_size));
        if let Err(e) = checked {
            tracing::warn!(width, height, error = %e, "Resize rejected");
            return Err(e);
        }
        self.config.world.width = width;
        self.config.world.height = height;
        tracing::info!(width, height, "World resized");
        Ok(())
    }

    /// Sets the ordinary-agent target and spawns or removes the difference
    /// right away. Shrinking drops the oldest agents.
    pub fn set_population_target(&mut self, target: usize) -> PopulationChange {
        let change =
            self.population
                .set_target_count(target, &self.config, self.tick, &mut self.rng);
        tracing::info!(
            target,
            spawned = change.spawned.len(),
            removed = change.removed.len(),
            "Population target changed"
        );
        change
    }

    pub fn add_predator(&mut self) -> Uuid {
        let id = self
            .population
            .add_predator(&self.config, self.tick, &mut self.rng);
        tracing::info!(predator = %id, predators = self.population.predator_count(), "Predator added");
        id
    }

    /// Removes the most recently added predator, if any.
    pub fn remove_predator(&mut self) -> Option<Uuid> {
        let removed = self.population.remove_predator().map(|p| p.id);
        if let Some(id) = removed {
            tracing::info!(predator = %id, predators = self.population.predator_count(), "Predator removed");
        }
        removed
    }

    pub fn set_max_speed(&mut self, role: Role, value: f64) -> Result<(), ConfigError> {
        if let Err(e) = validate_speed(role, value) {
            tracing::warn!(%role, value, error = %e, "Max speed rejected");
            return Err(e);
        }
        self.config.role_mut(role).max_speed = value;
        tracing::info!(%role, value, "Max speed changed");
        Ok(())
    }

    #[must_use]
    pub fn stats(&self) -> PopulationStats {
        PopulationStats {
            boids: self.population.boid_count(),
            predators: self.population.predator_count(),
            target: self.population.target,
            kills_total: self.kills_total,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            width: self.config.world.width,
            height: self.config.world.height,
            agents: self.population.iter().map(AgentSnapshot::from).collect(),
            splashes: self.splashes.clone(),
            stats: self.stats(),
        }
    }
}
