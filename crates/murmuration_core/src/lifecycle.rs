use murmuration_data::{Agent, Role, Vector2};
use rand::Rng;
use uuid::Uuid;

/// Distance from the world edge at which new agents appear.
pub const SPAWN_INSET: f64 = 1.0;

/// World edge an agent enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Unit normal pointing into the world.
    #[must_use]
    pub fn inward(self) -> Vector2 {
        match self {
            Edge::Left => Vector2::new(1.0, 0.0),
            Edge::Right => Vector2::new(-1.0, 0.0),
            Edge::Top => Vector2::new(0.0, 1.0),
            Edge::Bottom => Vector2::new(0.0, -1.0),
        }
    }
}

/// Draws a speed multiplier from `[1 - jitter/2, 1 + jitter/2)`.
pub fn speed_multiplier_with_rng<R: Rng>(jitter: f64, rng: &mut R) -> f64 {
    rng.gen::<f64>() * jitter + (1.0 - jitter / 2.0)
}

pub fn create_agent_with_rng<R: Rng>(
    role: Role,
    position: Vector2,
    velocity: Vector2,
    tick: u64,
    jitter: f64,
    rng: &mut R,
) -> Agent {
    let id = Uuid::from_u128(rng.gen::<u128>());
    let mut agent = Agent::new(id, role, position, velocity);
    agent.speed_multiplier = speed_multiplier_with_rng(jitter, rng);
    agent.born_tick = tick;
    agent
}

/// Places a new agent just inside a random world edge, heading inward.
///
/// The inward velocity component is in `(0.1, 1]`, the tangential one in
/// `[-1, 1)`, so agents drift into view instead of popping up mid-field.
pub fn spawn_on_edge<R: Rng>(
    role: Role,
    width: f64,
    height: f64,
    tick: u64,
    jitter: f64,
    rng: &mut R,
) -> Agent {
    let edge = Edge::ALL[rng.gen_range(0..Edge::ALL.len())];
    let along: f64 = rng.gen();
    let inset_x = SPAWN_INSET.min(width * 0.5);
    let inset_y = SPAWN_INSET.min(height * 0.5);

    let position = match edge {
        Edge::Left => Vector2::new(inset_x, along * height),
        Edge::Right => Vector2::new(width - inset_x, along * height),
        Edge::Top => Vector2::new(along * width, inset_y),
        Edge::Bottom => Vector2::new(along * width, height - inset_y),
    };

    let inward_speed = 1.0 - rng.gen::<f64>() * 0.9;
    let lateral = rng.gen_range(-1.0..1.0);
    let n = edge.inward();
    let tangent = Vector2::new(-n.y, n.x);
    let velocity = n.scale(inward_speed) + tangent.scale(lateral);

    create_agent_with_rng(role, position, velocity, tick, jitter, rng)
}
