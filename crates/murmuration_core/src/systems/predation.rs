//! Predator avoidance and hunting.

use super::{accumulate, Kill, RuleContext};
use murmuration_data::{Role, Vector2};
use rayon::prelude::*;

/// Rule 5a: ordinary agents flee every predator within their view distance.
pub fn avoid_predators(ctx: &RuleContext, deltas: &mut [Vector2]) {
    if ctx.predators().is_empty() {
        return;
    }
    let factor = ctx.config.factors.predator_avoidance;
    let view = ctx.config.boid.view_distance;
    accumulate(deltas, 0..ctx.boid_count, |i| {
        let me = &ctx.bodies[i];
        let away = ctx.bodies[ctx.predators()]
            .iter()
            .map(|p| me.position - p.position)
            .filter(|offset| offset.magnitude() < view)
            .fold(Vector2::ZERO, |acc, offset| acc + offset);
        away.scale(factor)
    });
}

/// What one predator decided to do this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pursuit {
    Idle,
    Chase(Vector2),
    Catch(Kill),
}

/// Nearest ordinary agent strictly inside `predator_idx`'s view distance.
///
/// Equal distances resolve to the lowest body index, independent of the
/// order the tile index yields candidates in.
pub fn nearest_prey(ctx: &RuleContext, predator_idx: usize) -> Option<(usize, f64)> {
    let hunter = &ctx.bodies[predator_idx];
    let view = ctx.config.predator.view_distance;
    let mut best: Option<(usize, f64)> = None;
    for (j, other) in ctx.candidates(predator_idx) {
        if other.role != Role::Ordinary {
            continue;
        }
        let distance = hunter.position.distance(other.position);
        if distance >= view {
            continue;
        }
        best = match best {
            Some((k, d)) if d < distance || (d == distance && k < j) => Some((k, d)),
            _ => Some((j, distance)),
        };
    }
    best
}

pub fn pursue(ctx: &RuleContext, predator_idx: usize) -> Pursuit {
    let Some((prey_idx, distance)) = nearest_prey(ctx, predator_idx) else {
        return Pursuit::Idle;
    };
    let hunter = &ctx.bodies[predator_idx];
    let prey = &ctx.bodies[prey_idx];

    if distance < ctx.config.predation.kill_distance {
        return Pursuit::Catch(Kill {
            predator: hunter.id,
            victim_idx: prey_idx,
            victim: prey.id,
            location: prey.position,
        });
    }

    let factors = &ctx.config.factors;
    let close_in = (hunter.position - prey.position).scale(-factors.hunt);
    let lead = prey.velocity.scale(-factors.predator_matching);
    Pursuit::Chase(close_in + lead)
}

/// Rule 5b: each predator chases or catches its nearest visible prey.
///
/// Decisions are made in parallel against the pre-tick bodies. Catches are
/// returned in predator order and not applied here; two predators may report
/// the same victim.
pub fn hunt(ctx: &RuleContext, deltas: &mut [Vector2]) -> Vec<Kill> {
    let decisions: Vec<Pursuit> = ctx
        .predators()
        .into_par_iter()
        .map(|p| pursue(ctx, p))
        .collect();

    let mut kills = Vec::new();
    for (p, decision) in ctx.predators().zip(decisions) {
        match decision {
            Pursuit::Idle => {}
            Pursuit::Chase(delta) => deltas[p] += delta,
            Pursuit::Catch(kill) => kills.push(kill),
        }
    }
    kills
}
