use murmuration_data::{Agent, Role, Splash, Vector2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable pre-tick view of one agent.
///
/// Rules read only bodies, so every rule observes the same state no matter
/// which rules ran before it or how the work is split across threads.
#[derive(Clone, Copy, Debug)]
pub struct Body {
    pub id: Uuid,
    pub role: Role,
    pub position: Vector2,
    pub velocity: Vector2,
}

impl From<&Agent> for Body {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id,
            role: agent.role,
            position: agent.position,
            velocity: agent.velocity,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AgentSnapshot {
    pub id: Uuid,
    pub role: Role,
    pub position: Vector2,
    pub velocity: Vector2,
    pub last_position: Vector2,
    pub history: Vec<Vector2>,
}

impl From<&Agent> for AgentSnapshot {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id,
            role: agent.role,
            position: agent.position,
            velocity: agent.velocity,
            last_position: agent.last_position,
            history: agent.history.iter().copied().collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PopulationStats {
    pub boids: usize,
    pub predators: usize,
    pub target: usize,
    pub kills_total: u64,
}

/// Read-only state handed to renderers after each tick.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub width: f64,
    pub height: f64,
    /// Ordinary agents in spawn order, then predators in spawn order.
    pub agents: Vec<AgentSnapshot>,
    pub splashes: Vec<Splash>,
    pub stats: PopulationStats,
}

impl WorldSnapshot {
    pub fn by_role(&self, role: Role) -> impl Iterator<Item = &AgentSnapshot> {
        self.agents.iter().filter(move |a| a.role == role)
    }
}
