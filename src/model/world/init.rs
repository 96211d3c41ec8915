use crate::model::config::SimulationConfig;
use crate::model::population::Population;
use crate::model::spatial_index::TileIndex;
use crate::model::world::World;
use murmuration_data::Agent;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

impl World {
    /// Validates `config` and spawns `config.world.initial_population`
    /// ordinary agents along the world edges.
    pub fn new(config: SimulationConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let rng = if let Some(seed) = config.world.seed {
            ChaCha8Rng::seed_from_u64(seed)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let index = TileIndex::new(
            config.world.tile_size,
            config.world.width,
            config.world.height,
        );

        let mut world = Self {
            config,
            tick: 0,
            population: Population::new(),
            index,
            splashes: Vec::new(),
            kills_total: 0,
            rng,
            body_buffer: Vec::new(),
            position_buffer: Vec::new(),
        };

        let initial = world.config.world.initial_population;
        world
            .population
            .set_target_count(initial, &world.config, 0, &mut world.rng);

        tracing::info!(
            width = world.config.world.width,
            height = world.config.world.height,
            boids = initial,
            seed = ?world.config.world.seed,
            fingerprint = %world.config.fingerprint(),
            "World created"
        );
        Ok(world)
    }

    /// Adds a pre-built agent. An ordinary agent also raises the population
    /// target by one so it survives the next reconcile.
    pub fn insert_agent(&mut self, agent: Agent) {
        self.population.insert(agent);
    }
}
