use super::vector::Vector2;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use uuid::Uuid;

/// Behavioral role of an agent, fixed for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    #[default]
    Ordinary,
    Predator,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Ordinary => write!(f, "boid"),
            Role::Predator => write!(f, "predator"),
        }
    }
}

/// A single flocking agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: Uuid,
    pub role: Role,
    pub position: Vector2,
    pub velocity: Vector2,
    /// Position before the most recent integration step.
    pub last_position: Vector2,
    /// Jitter applied to position integration only, never to the speed limit.
    pub speed_multiplier: f64,
    /// Recent positions, oldest first.
    pub history: VecDeque<Vector2>,
    pub born_tick: u64,
}

impl Agent {
    #[must_use]
    pub fn new(id: Uuid, role: Role, position: Vector2, velocity: Vector2) -> Self {
        Self {
            id,
            role,
            position,
            velocity,
            last_position: position,
            speed_multiplier: 1.0,
            history: VecDeque::new(),
            born_tick: 0,
        }
    }

    #[must_use]
    pub fn is_predator(&self) -> bool {
        self.role == Role::Predator
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }
}
