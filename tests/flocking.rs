mod common;

use common::{AgentBuilder, WorldBuilder};
use murmuration_lib::model::config::MatchingScope;

#[test]
fn test_boundary_pushes_agent_inward() {
    let mut world = WorldBuilder::new()
        .without_jitter()
        .with_agent(AgentBuilder::new().at(2.0, 400.0).build())
        .build();

    world.update();

    let agent = &world.population.boids[0];
    // (collision_distance 10 - 2) * boundary factor 0.5
    assert!((agent.velocity.x - 4.0).abs() < 1e-9);
    assert_eq!(agent.velocity.y, 0.0);
    assert!((agent.position.x - 6.0).abs() < 1e-9);
}

#[test]
fn test_close_pair_separates() {
    let mut world = WorldBuilder::new()
        .without_jitter()
        .with_agent(AgentBuilder::new().at(600.0, 400.0).build())
        .with_agent(AgentBuilder::new().at(605.0, 400.0).build())
        .build();

    world.update();

    let a = world.population.boids[0].position;
    let b = world.population.boids[1].position;
    assert!(a.x < 600.0);
    assert!(b.x > 605.0);
    assert!(a.distance(b) > 5.0);
}

#[test]
fn test_distant_pair_converges() {
    let mut world = WorldBuilder::new()
        .without_jitter()
        .with_agent(AgentBuilder::new().at(500.0, 400.0).build())
        .with_agent(AgentBuilder::new().at(650.0, 400.0).build())
        .build();

    let before = 150.0;
    for _ in 0..10 {
        world.update();
    }
    let a = world.population.boids[0].position;
    let b = world.population.boids[1].position;
    assert!(a.distance(b) < before);
}

#[test]
fn test_global_matching_aligns_far_agents() {
    let mut world = WorldBuilder::new()
        .without_jitter()
        .with_agent(AgentBuilder::new().at(300.0, 200.0).velocity(0.0, 0.0).build())
        .with_agent(AgentBuilder::new().at(900.0, 600.0).velocity(4.0, 0.0).build())
        .build();

    world.update();
    assert!(world.population.boids[0].velocity.x > 0.0);
}

#[test]
fn test_neighborhood_matching_ignores_far_agents() {
    let mut world = WorldBuilder::new()
        .without_jitter()
        .with_config(|c| c.behavior.matching_scope = MatchingScope::Neighborhood)
        .with_agent(AgentBuilder::new().at(300.0, 200.0).velocity(0.0, 0.0).build())
        .with_agent(AgentBuilder::new().at(900.0, 600.0).velocity(4.0, 0.0).build())
        .build();

    world.update();
    assert_eq!(world.population.boids[0].velocity.x, 0.0);
}

#[test]
fn test_speed_limit_holds_in_dense_flock() {
    let mut world = WorldBuilder::new().with_seed(7).with_population(200).build();
    world.add_predator();
    world.add_predator();
    for _ in 0..50 {
        world.update();
        assert_speed_bounded!(world);
    }
}

#[test]
fn test_trails_are_capped_per_role() {
    let mut world = WorldBuilder::new().with_seed(3).with_population(20).with_edge_predators(1).build();
    for _ in 0..80 {
        world.update();
    }
    for agent in world.population.iter() {
        let cap = world.config.role(agent.role).history_length;
        assert!(agent.history.len() <= cap);
    }
    assert_eq!(world.population.predators[0].history.len(), 50);
}
