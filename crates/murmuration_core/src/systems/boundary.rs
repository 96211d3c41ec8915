use super::{accumulate, RuleContext};
use murmuration_data::Vector2;

/// Rule 4: push agents back inside the world.
///
/// The push grows linearly with how deep the agent sits in the margin of
/// width `collision_distance(role)` along each edge. Agents already outside
/// the world get the same linear push, which keeps growing with distance.
pub fn stay_within_bounds(ctx: &RuleContext, deltas: &mut [Vector2]) {
    let world = &ctx.config.world;
    let factor = ctx.config.factors.boundary;
    accumulate(deltas, 0..ctx.bodies.len(), |i| {
        let body = &ctx.bodies[i];
        let margin = ctx.config.role(body.role).collision_distance;
        margin_push(body.position, world.width, world.height, margin).scale(factor)
    });
}

/// Unscaled push for a point against the world margins.
pub fn margin_push(position: Vector2, width: f64, height: f64, margin: f64) -> Vector2 {
    Vector2::new(
        axis_push(position.x, width, margin),
        axis_push(position.y, height, margin),
    )
}

fn axis_push(value: f64, extent: f64, margin: f64) -> f64 {
    if value < margin {
        margin - value
    } else if value > extent - margin {
        (extent - margin) - value
    } else {
        0.0
    }
}
