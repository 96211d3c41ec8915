//! Cohesion, separation and velocity matching.

use super::{accumulate, RuleContext};
use crate::config::MatchingScope;
use murmuration_data::{Role, Vector2};

/// Pull toward the centroid of `count` positions summing to `sum`.
///
/// An empty neighborhood yields no pull.
pub fn centroid_pull(position: Vector2, sum: Vector2, count: usize, factor: f64) -> Vector2 {
    if count == 0 {
        return Vector2::ZERO;
    }
    let centroid = sum.scale(1.0 / count as f64);
    (position - centroid).scale(-factor)
}

/// Rule 1: steer toward the centre of mass of same-role agents in view.
///
/// The agent counts itself (distance 0), so the neighborhood is never empty
/// for an indexed agent.
pub fn cohesion(ctx: &RuleContext, deltas: &mut [Vector2]) {
    accumulate(deltas, 0..ctx.bodies.len(), |i| cohesion_delta(ctx, i));
}

pub fn cohesion_delta(ctx: &RuleContext, i: usize) -> Vector2 {
    let me = &ctx.bodies[i];
    let view = ctx.config.role(me.role).view_distance;
    let factor = match me.role {
        Role::Ordinary => ctx.config.factors.centering,
        Role::Predator => ctx.config.factors.predator_centering,
    };

    let mut sum = Vector2::ZERO;
    let mut count = 0;
    for (_, other) in ctx.candidates(i) {
        if other.role == me.role && me.position.distance(other.position) < view {
            sum += other.position;
            count += 1;
        }
    }
    centroid_pull(me.position, sum, count, factor)
}

/// Rule 2: ordinary agents push away from anything inside their collision
/// distance. Not normalized by neighbor count, so crowding scales the push.
pub fn separation(ctx: &RuleContext, deltas: &mut [Vector2]) {
    accumulate(deltas, 0..ctx.boid_count, |i| separation_delta(ctx, i));
}

pub fn separation_delta(ctx: &RuleContext, i: usize) -> Vector2 {
    let me = &ctx.bodies[i];
    let reach = ctx.config.role(me.role).collision_distance;

    let mut adjust = Vector2::ZERO;
    for (j, other) in ctx.candidates(i) {
        if j == i {
            continue;
        }
        let offset = me.position - other.position;
        if offset.magnitude() < reach {
            adjust -= offset;
        }
    }
    adjust.scale(-ctx.config.factors.collision)
}

/// Rule 3: ordinary agents drift toward the mean velocity of the other
/// ordinary agents, world-wide or within view depending on
/// [`MatchingScope`].
pub fn velocity_matching(ctx: &RuleContext, deltas: &mut [Vector2]) {
    let factor = ctx.config.factors.matching;
    match ctx.config.behavior.matching_scope {
        MatchingScope::Global => {
            if ctx.boid_count < 2 {
                return;
            }
            let total = ctx.bodies[..ctx.boid_count]
                .iter()
                .fold(Vector2::ZERO, |acc, b| acc + b.velocity);
            let others = (ctx.boid_count - 1) as f64;
            accumulate(deltas, 0..ctx.boid_count, |i| {
                (total - ctx.bodies[i].velocity).scale(factor / others)
            });
        }
        MatchingScope::Neighborhood => {
            accumulate(deltas, 0..ctx.boid_count, |i| {
                local_matching_delta(ctx, i).scale(factor)
            });
        }
    }
}

/// Mean velocity of the other ordinary agents within view of body `i`, or
/// zero when there are none.
pub fn local_matching_delta(ctx: &RuleContext, i: usize) -> Vector2 {
    let me = &ctx.bodies[i];
    let view = ctx.config.role(me.role).view_distance;

    let mut sum = Vector2::ZERO;
    let mut count = 0usize;
    for (j, other) in ctx.candidates(i) {
        if j != i && other.role == Role::Ordinary && me.position.distance(other.position) < view {
            sum += other.velocity;
            count += 1;
        }
    }
    if count == 0 {
        Vector2::ZERO
    } else {
        sum.scale(1.0 / count as f64)
    }
}
