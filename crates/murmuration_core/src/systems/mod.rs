//! Interaction rules evaluated once per tick.
//!
//! Every rule reads the same pre-tick [`Body`] slice and adds its velocity
//! adjustments into a shared delta buffer, one slot per body. Rules never see
//! each other's deltas; the world applies the summed buffer after all of them
//! have run. Within a rule each body's delta is computed by exactly one
//! worker, so results do not depend on the rayon thread count.

pub mod boundary;
pub mod flocking;
pub mod movement;
pub mod predation;

use crate::config::SimulationConfig;
use crate::snapshot::Body;
use crate::spatial_index::TileIndex;
use murmuration_data::{Role, Vector2};
use rayon::prelude::*;
use uuid::Uuid;

/// Read-only inputs shared by all rules of one tick.
pub struct RuleContext<'a> {
    pub config: &'a SimulationConfig,
    /// Ordinary agents first (`0..boid_count`), predators after.
    pub bodies: &'a [Body],
    pub boid_count: usize,
    pub index: &'a TileIndex,
}

impl<'a> RuleContext<'a> {
    pub fn new(config: &'a SimulationConfig, bodies: &'a [Body], index: &'a TileIndex) -> Self {
        let boid_count = bodies
            .iter()
            .position(|b| b.role == Role::Predator)
            .unwrap_or(bodies.len());
        Self {
            config,
            bodies,
            boid_count,
            index,
        }
    }

    /// Index range of the predator bodies.
    pub fn predators(&self) -> std::ops::Range<usize> {
        self.boid_count..self.bodies.len()
    }

    /// Candidate bodies near body `i`, body `i` itself included.
    pub fn candidates(&self, i: usize) -> impl Iterator<Item = (usize, &'a Body)> + '_ {
        let bodies = self.bodies;
        self.index
            .neighbors_of(bodies[i].position)
            .map(move |j| (j, &bodies[j]))
    }
}

/// A catch decided by the hunt rule, applied after all rules ran.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kill {
    pub predator: Uuid,
    /// Index of the victim among the ordinary agents.
    pub victim_idx: usize,
    pub victim: Uuid,
    /// Victim position as seen by the hunter, before this tick's movement.
    pub location: Vector2,
}

#[derive(Debug, Clone, Default)]
pub struct RuleOutput {
    pub deltas: Vec<Vector2>,
    pub kills: Vec<Kill>,
}

/// Adds `rule(i)` to `deltas[i]` for every body index in `range`.
pub(crate) fn accumulate<F>(deltas: &mut [Vector2], range: std::ops::Range<usize>, rule: F)
where
    F: Fn(usize) -> Vector2 + Sync,
{
    let start = range.start;
    deltas[range]
        .par_iter_mut()
        .enumerate()
        .for_each(|(k, delta)| *delta += rule(start + k));
}

/// Runs rules 1-5 in their fixed order and returns the summed deltas and the
/// catches. Speed limiting is applied by the caller once deltas are added.
pub fn evaluate(ctx: &RuleContext) -> RuleOutput {
    let mut deltas = vec![Vector2::ZERO; ctx.bodies.len()];

    flocking::cohesion(ctx, &mut deltas);
    flocking::separation(ctx, &mut deltas);
    flocking::velocity_matching(ctx, &mut deltas);
    boundary::stay_within_bounds(ctx, &mut deltas);
    predation::avoid_predators(ctx, &mut deltas);
    let kills = predation::hunt(ctx, &mut deltas);

    RuleOutput { deltas, kills }
}
