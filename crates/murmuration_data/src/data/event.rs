use super::vector::Vector2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Short-lived marker left where a predator caught its prey.
///
/// Purely a rendering hint; nothing in the simulation reads it back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Splash {
    pub location: Vector2,
    pub remaining_ticks: u32,
}

impl Splash {
    #[must_use]
    pub fn new(location: Vector2, lifetime: u32) -> Self {
        Self {
            location,
            remaining_ticks: lifetime,
        }
    }

    /// Counts down one tick. Returns `true` while the splash is still visible.
    pub fn decay(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks > 0
    }
}

/// Events emitted by a tick for renderers and logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LiveEvent {
    /// A predator caught an ordinary agent.
    Killed {
        victim: Uuid,
        predator: Uuid,
        location: Vector2,
        tick: u64,
    },
}

impl LiveEvent {
    #[must_use]
    pub fn location(&self) -> Vector2 {
        match self {
            LiveEvent::Killed { location, .. } => *location,
        }
    }
}
