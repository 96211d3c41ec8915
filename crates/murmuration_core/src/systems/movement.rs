use murmuration_data::{Agent, Vector2};

/// Rule 6: rescale `velocity` to `max_speed` when it is faster, keeping the
/// heading.
#[must_use]
pub fn limit_speed(velocity: Vector2, max_speed: f64) -> Vector2 {
    let speed = velocity.magnitude();
    if speed > max_speed && speed > 0.0 {
        velocity.scale(max_speed / speed)
    } else {
        velocity
    }
}

/// Moves `agent` one tick along its velocity and records the trail.
///
/// The speed multiplier affects displacement only; the stored velocity stays
/// within the speed limit.
pub fn integrate(agent: &mut Agent, history_length: usize) {
    agent.last_position = agent.position;
    agent.position += agent.velocity.scale(agent.speed_multiplier);
    agent.history.push_back(agent.position);
    while agent.history.len() > history_length {
        agent.history.pop_front();
    }
}
