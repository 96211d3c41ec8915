use murmuration_data::Vector2;
use murmuration_lib::model::spatial_index::{Tile, TileIndex};

fn v(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

#[test]
fn test_tile_index_empty() {
    let mut index = TileIndex::new(100.0, 300.0, 300.0);
    index.build(&[], 300.0, 300.0);
    assert_eq!(index.neighbors_of(v(150.0, 150.0)).count(), 0);
    assert_eq!(index.count_candidates(v(150.0, 150.0)), 0);
}

#[test]
fn test_corner_and_edge_windows_are_clipped() {
    let index = TileIndex::new(100.0, 300.0, 300.0);
    assert_eq!(index.neighbor_tiles(Tile { col: 0, row: 0 }).count(), 4);
    assert_eq!(index.neighbor_tiles(Tile { col: 1, row: 0 }).count(), 6);
    assert_eq!(index.neighbor_tiles(Tile { col: 1, row: 1 }).count(), 9);
    assert_eq!(index.neighbor_tiles(Tile { col: 2, row: 2 }).count(), 4);
}

#[test]
fn test_grid_does_not_wrap() {
    let mut index = TileIndex::new(100.0, 300.0, 300.0);
    index.build(&[v(5.0, 5.0), v(295.0, 295.0)], 300.0, 300.0);
    let near_origin: Vec<usize> = index.neighbors_of(v(5.0, 5.0)).collect();
    assert_eq!(near_origin, vec![0]);
}

#[test]
fn test_partial_last_tile() {
    let mut index = TileIndex::new(400.0, 1000.0, 500.0);
    assert_eq!((index.cols, index.rows), (3, 2));
    index.build(&[v(999.0, 499.0), v(700.0, 300.0)], 1000.0, 500.0);
    let found: Vec<usize> = index.neighbors_of(v(999.0, 499.0)).collect();
    assert!(found.contains(&0));
    assert!(found.contains(&1));
}

#[test]
fn test_out_of_bounds_agents_stay_visible() {
    let mut index = TileIndex::new(100.0, 300.0, 300.0);
    let positions = [v(10.0, 10.0), v(-20.0, 10.0), v(150.0, 150.0)];
    index.build(&positions, 300.0, 300.0);

    assert_eq!(index.strays, vec![1]);
    let from_inside: Vec<usize> = index.neighbors_of(v(10.0, 10.0)).collect();
    assert!(from_inside.contains(&1));

    let mut from_outside: Vec<usize> = index.neighbors_of(v(-20.0, 10.0)).collect();
    from_outside.sort_unstable();
    assert_eq!(from_outside, vec![0, 1, 2]);
}

#[test]
fn test_non_finite_position_is_a_stray() {
    let mut index = TileIndex::new(100.0, 300.0, 300.0);
    index.build(&[v(f64::NAN, 10.0), v(50.0, 50.0)], 300.0, 300.0);
    assert_eq!(index.strays, vec![0]);
    assert_eq!(index.agents_in(Tile { col: 0, row: 0 }), &[1]);
}

#[test]
fn test_rebuild_after_resize() {
    let mut index = TileIndex::new(100.0, 300.0, 300.0);
    index.build(&[v(250.0, 250.0)], 300.0, 300.0);
    assert_eq!(index.tile_count(), 9);
    index.build(&[v(250.0, 250.0)], 200.0, 200.0);
    assert_eq!(index.tile_count(), 4);
    assert_eq!(index.strays, vec![0]);
}
