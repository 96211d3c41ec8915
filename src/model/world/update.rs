use crate::model::config::{RoleConfig, SimulationConfig};
use crate::model::snapshot::WorldSnapshot;
use crate::model::systems::{self, movement, RuleContext};
use crate::model::world::World;
use murmuration_data::{Agent, LiveEvent, Vector2};
use rayon::prelude::*;

impl World {
    /// Advances the simulation by one tick.
    ///
    /// Pipeline:
    /// - Capture pre-tick bodies and rebuild the tile index
    /// - Evaluate rules 1-5 against the captured bodies
    /// - Apply the summed deltas and the speed limit
    /// - Integrate positions and update trails
    /// - Resolve kills, decay splashes and reconcile the population
    ///
    /// # Returns
    /// Events (kills) that occurred this tick
    pub fn update(&mut self) -> Vec<LiveEvent> {
        self.tick += 1;
        let config = self.config.clone();

        self.pass_spatial_indexing(&config);

        let output = {
            let ctx = RuleContext::new(&config, &self.body_buffer, &self.index);
            systems::evaluate(&ctx)
        };

        self.pass_movement(&config, &output.deltas);
        self.finalize_tick(&config, output.kills)
    }

    /// Runs one tick and returns the resulting snapshot with its events.
    pub fn step(&mut self) -> (WorldSnapshot, Vec<LiveEvent>) {
        let events = self.update();
        (self.snapshot(), events)
    }

    fn pass_spatial_indexing(&mut self, config: &SimulationConfig) {
        self.population.capture_bodies(&mut self.body_buffer);
        self.position_buffer.clear();
        self.position_buffer
            .extend(self.body_buffer.iter().map(|b| b.position));
        self.index.build(
            &self.position_buffer,
            config.world.width,
            config.world.height,
        );
    }

    fn pass_movement(&mut self, config: &SimulationConfig, deltas: &[Vector2]) {
        let (boid_deltas, predator_deltas) = deltas.split_at(self.population.boid_count());
        move_agents(&mut self.population.boids, boid_deltas, &config.boid);
        move_agents(&mut self.population.predators, predator_deltas, &config.predator);
    }
}

fn move_agents(agents: &mut [Agent], deltas: &[Vector2], role: &RoleConfig) {
    agents
        .par_iter_mut()
        .zip(deltas.par_iter())
        .for_each(|(agent, delta)| {
            agent.velocity = movement::limit_speed(agent.velocity + *delta, role.max_speed);
            movement::integrate(agent, role.history_length);
        });
}
