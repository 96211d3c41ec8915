pub mod macros;

use murmuration_data::{Agent, Role, Vector2};
use murmuration_lib::model::config::SimulationConfig;
use murmuration_lib::model::world::World;
use uuid::Uuid;

#[allow(dead_code)]
pub struct WorldBuilder {
    config: SimulationConfig,
    agents: Vec<Agent>,
    predators: usize,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        let mut config = SimulationConfig::default();
        config.world.initial_population = 0;
        config.world.seed = Some(0);
        Self {
            config,
            agents: Vec::new(),
            predators: 0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimulationConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// Spawned along the edges like a normal start-up population.
    pub fn with_population(mut self, n: usize) -> Self {
        self.config.world.initial_population = n;
        self
    }

    pub fn with_edge_predators(mut self, n: usize) -> Self {
        self.predators = n;
        self
    }

    /// Removes speed jitter so displacement equals velocity.
    pub fn without_jitter(mut self) -> Self {
        self.config.behavior.velocity_jitter = 0.0;
        self
    }

    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new(self.config).expect("Failed to create world in test builder");
        for _ in 0..self.predators {
            world.add_predator();
        }
        for agent in self.agents {
            world.insert_agent(agent);
        }
        world
    }
}

#[allow(dead_code)]
pub struct AgentBuilder {
    role: Role,
    position: Vector2,
    velocity: Vector2,
    id: Option<Uuid>,
    speed_multiplier: f64,
}

#[allow(dead_code)]
impl AgentBuilder {
    pub fn new() -> Self {
        Self {
            role: Role::Ordinary,
            position: Vector2::new(600.0, 400.0),
            velocity: Vector2::ZERO,
            id: None,
            speed_multiplier: 1.0,
        }
    }

    pub fn predator() -> Self {
        Self {
            role: Role::Predator,
            ..Self::new()
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Vector2::new(x, y);
        self
    }

    pub fn velocity(mut self, vx: f64, vy: f64) -> Self {
        self.velocity = Vector2::new(vx, vy);
        self
    }

    pub fn speed_multiplier(mut self, m: f64) -> Self {
        self.speed_multiplier = m;
        self
    }

    pub fn build(self) -> Agent {
        let mut agent = Agent::new(
            self.id.unwrap_or_else(Uuid::new_v4),
            self.role,
            self.position,
            self.velocity,
        );
        agent.speed_multiplier = self.speed_multiplier;
        agent
    }
}

#[allow(dead_code)]
pub fn find_agent(world: &World, id: Uuid) -> Option<&Agent> {
    world.population.iter().find(|a| a.id == id)
}
