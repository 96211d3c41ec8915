use crate::model::population::PopulationChange;
use murmuration_data::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Control actions a front end can send to the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ControlCommand {
    Resize { width: f64, height: f64 },
    SetPopulationTarget { target: usize },
    AddPredator,
    RemovePredator,
    SetMaxSpeed { role: Role, value: f64 },
    Pause,
    Resume,
    /// Advance one tick even while paused.
    Step,
}

/// What applying a command changed.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlOutcome {
    Applied,
    Population(PopulationChange),
    PredatorAdded(Uuid),
    PredatorRemoved(Option<Uuid>),
    Stepped { tick: u64, kills: usize },
}
