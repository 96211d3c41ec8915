mod common;

use common::WorldBuilder;
use murmuration_lib::model::world::World;

fn seeded_world(seed: u64) -> World {
    WorldBuilder::new()
        .with_seed(seed)
        .with_population(120)
        .with_edge_predators(2)
        .build()
}

#[test]
fn test_determinism_consistency() {
    let mut world1 = seeded_world(12345);
    let mut world2 = seeded_world(12345);

    for _ in 0..150 {
        let (snap1, events1) = world1.step();
        let (snap2, events2) = world2.step();
        assert_eq!(events1, events2);
        assert_eq!(snap1, snap2);
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut world1 = seeded_world(1);
    let mut world2 = seeded_world(2);
    world1.update();
    world2.update();
    assert_ne!(world1.snapshot(), world2.snapshot());
}

#[test]
fn test_thread_count_does_not_change_results() {
    let mut parallel = seeded_world(99);
    let mut single = seeded_world(99);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .expect("thread pool");

    for _ in 0..60 {
        parallel.update();
        pool.install(|| single.update());
    }
    assert_eq!(parallel.snapshot(), single.snapshot());
}

#[test]
fn test_fingerprint_tracks_behavior() {
    let a = seeded_world(5);
    let mut b = seeded_world(6);
    assert_eq!(a.config.fingerprint(), b.config.fingerprint());
    b.set_max_speed(murmuration_data::Role::Ordinary, 4.0)
        .expect("valid speed");
    assert_ne!(a.config.fingerprint(), b.config.fingerprint());
}
