/// Asserts the number of live ordinary agents and predators.
#[macro_export]
macro_rules! assert_population {
    ($world:expr, $boids:expr, $predators:expr) => {
        assert_eq!(
            $world.population.boid_count(),
            $boids,
            "Ordinary population mismatch"
        );
        assert_eq!(
            $world.population.predator_count(),
            $predators,
            "Predator population mismatch"
        );
    };
}

/// Asserts that an agent with the given ID is no longer in the world.
#[macro_export]
macro_rules! assert_agent_dead {
    ($world:expr, $id:expr) => {
        let exists = $world.population.iter().any(|a| a.id == $id);
        assert!(!exists, "Agent {} should be dead but was found alive", $id);
    };
}

/// Asserts every agent respects its role's speed limit.
#[macro_export]
macro_rules! assert_speed_bounded {
    ($world:expr) => {
        for agent in $world.population.iter() {
            let max = $world.config.role(agent.role).max_speed;
            assert!(
                agent.velocity.magnitude() <= max + 1e-9,
                "Agent {} moves at {} above {}",
                agent.id,
                agent.velocity.magnitude(),
                max
            );
        }
    };
}
