use murmuration_data::Vector2;
use rayon::prelude::*;
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

/// Grid address of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub col: usize,
    pub row: usize,
}

#[derive(Clone, Debug, Default)]
/// Uniform grid partition of the world used to bound neighbor search.
///
/// The world is cut into square tiles of side `tile_size`. Agents are bucketed
/// by the tile containing their position once per tick; a neighbor query then
/// only visits the agent's own tile and the (up to) eight tiles around it.
///
/// The query result is a candidate set, never an exact-radius result. As long
/// as `tile_size` is at least the query radius, every agent within that radius
/// is among the candidates; callers filter by exact distance themselves.
///
/// # Fields
/// - `tile_size`: Side of each tile in world units
/// - `cols/rows`: Grid dimensions; the grid spans `[0, cols * tile_size) x [0, rows * tile_size)`
/// - `tile_offsets`: `tile_offsets[i]..tile_offsets[i+1]` indexes the agents of tile i
/// - `agent_indices`: Agent indices grouped by tile, ascending inside each tile
/// - `strays`: Agents whose position lies outside the grid this tick
///
/// # Implementation Notes
/// - Uses the "offset array" pattern (like compressed sparse rows)
/// - Counting pass runs in parallel with `AtomicUsize` counters, the fill pass is sequential
/// - Strays are appended to every in-grid query and an out-of-grid query
///   falls back to the whole population, so agents that drift past the edge
///   are still seen by their neighbors
///
/// # Examples
/// ```
/// use murmuration_core::spatial_index::TileIndex;
/// use murmuration_data::Vector2;
///
/// let mut index = TileIndex::new(10.0, 100.0, 100.0);
/// let positions = vec![Vector2::new(15.0, 15.0), Vector2::new(25.0, 25.0), Vector2::new(85.0, 85.0)];
/// index.build(&positions, 100.0, 100.0);
///
/// let near: Vec<usize> = index.neighbors_of(Vector2::new(15.0, 15.0)).collect();
/// assert_eq!(near, vec![0, 1]);
/// ```
pub struct TileIndex {
    pub tile_size: f64,
    pub cols: usize,
    pub rows: usize,
    pub tile_offsets: Vec<usize>,
    pub agent_indices: Vec<usize>,
    pub strays: Vec<usize>,
    pub agent_count: usize,
}

impl TileIndex {
    /// Creates an empty index covering a `world_width` x `world_height` world.
    ///
    /// `tile_size` is expected to be positive; configuration validation
    /// guarantees this before an index is ever built from it.
    pub fn new(tile_size: f64, world_width: f64, world_height: f64) -> Self {
        let mut index = Self {
            tile_size,
            ..Default::default()
        };
        index.resize(world_width, world_height);
        index
    }

    /// A world whose grid would exceed [`MAX_TILES`] gets an empty grid, so
    /// every agent becomes a stray and queries fall back to a full scan.
    fn resize(&mut self, world_width: f64, world_height: f64) {
        let (cols, rows) =
            grid_dimensions(self.tile_size, world_width, world_height).unwrap_or((0, 0));
        self.cols = cols;
        self.rows = rows;
        self.tile_offsets.clear();
        self.tile_offsets.resize(self.tile_count() + 1, 0);
    }

    #[inline]
    pub fn tile_count(&self) -> usize {
        self.cols.checked_mul(self.rows).unwrap_or(0)
    }

    /// Maps a world coordinate to its tile.
    ///
    /// Returns `None` for non-finite coordinates and for anything outside
    /// `[0, cols * tile_size) x [0, rows * tile_size)`.
    #[inline]
    pub fn tile_containing(&self, position: Vector2) -> Option<Tile> {
        if !position.is_finite() || position.x < 0.0 || position.y < 0.0 {
            return None;
        }
        if self.tile_count() == 0 {
            return None;
        }
        let col = (position.x / self.tile_size).floor();
        let row = (position.y / self.tile_size).floor();
        if col >= self.cols as f64 || row >= self.rows as f64 {
            return None;
        }
        Some(Tile {
            col: col as usize,
            row: row as usize,
        })
    }

    #[inline]
    fn flat(&self, tile: Tile) -> usize {
        tile.row * self.cols + tile.col
    }

    /// World-space rectangle `[min, max)` covered by `tile`.
    pub fn tile_bounds(&self, tile: Tile) -> (Vector2, Vector2) {
        let min = Vector2::new(
            tile.col as f64 * self.tile_size,
            tile.row as f64 * self.tile_size,
        );
        let max = Vector2::new(min.x + self.tile_size, min.y + self.tile_size);
        (min, max)
    }

    /// The tile itself plus its adjacent tiles, row-major. Fewer than nine at
    /// the grid edge; the grid does not wrap.
    pub fn neighbor_tiles(&self, tile: Tile) -> NeighborTiles {
        let last_col = self.cols.saturating_sub(1);
        let last_row = self.rows.saturating_sub(1);
        let cols = tile.col.saturating_sub(1)..(tile.col + 1).min(last_col) + 1;
        let rows = tile.row.saturating_sub(1)..(tile.row + 1).min(last_row) + 1;
        NeighborTiles {
            col: cols.start,
            row: rows.start,
            cols,
            rows,
        }
    }

    /// Agents bucketed into `tile` during the last build, ascending.
    pub fn agents_in(&self, tile: Tile) -> &[usize] {
        let idx = self.flat(tile);
        match (self.tile_offsets.get(idx), self.tile_offsets.get(idx + 1)) {
            (Some(&start), Some(&end)) => &self.agent_indices[start..end],
            _ => &[],
        }
    }

    /// Rebuilds the bucket mapping for `positions` in O(n).
    ///
    /// Agent `i` of the result refers to `positions[i]`.
    pub fn build(&mut self, positions: &[Vector2], world_width: f64, world_height: f64) {
        self.resize(world_width, world_height);
        let tile_count = self.tile_count();
        self.agent_count = positions.len();

        let atomic_counts: Vec<AtomicUsize> =
            (0..tile_count).map(|_| AtomicUsize::new(0)).collect();
        positions.par_iter().for_each(|&p| {
            if let Some(tile) = self.tile_containing(p) {
                atomic_counts[self.flat(tile)].fetch_add(1, AtomicOrdering::Relaxed);
            }
        });
        let counts: Vec<usize> = atomic_counts.into_iter().map(|a| a.into_inner()).collect();

        let mut total = 0;
        for (i, &count) in counts.iter().enumerate() {
            self.tile_offsets[i] = total;
            total += count;
        }
        self.tile_offsets[tile_count] = total;

        self.agent_indices.clear();
        self.agent_indices.resize(total, 0);
        self.strays.clear();

        let mut cursor = self.tile_offsets[..tile_count].to_vec();
        for (agent_idx, &p) in positions.iter().enumerate() {
            match self.tile_containing(p) {
                Some(tile) => {
                    let slot = &mut cursor[self.flat(tile)];
                    self.agent_indices[*slot] = agent_idx;
                    *slot += 1;
                }
                None => self.strays.push(agent_idx),
            }
        }
    }

    /// Candidate neighbors of an agent at `position`.
    ///
    /// Yields the agents of the 3x3 tile window around `position` followed by
    /// the strays. When `position` itself is outside the grid every agent is a
    /// candidate. The querying agent is included when it was indexed.
    pub fn neighbors_of(&self, position: Vector2) -> Candidates<'_> {
        match self.tile_containing(position) {
            Some(tile) => Candidates::Window {
                index: self,
                tiles: self.neighbor_tiles(tile),
                current: (&[]).iter(),
                strays: self.strays.iter(),
            },
            None => Candidates::Everyone(0..self.agent_count),
        }
    }

    /// Number of candidates `neighbors_of` would yield, without visiting them.
    pub fn count_candidates(&self, position: Vector2) -> usize {
        match self.tile_containing(position) {
            Some(tile) => {
                self.neighbor_tiles(tile)
                    .map(|t| self.agents_in(t).len())
                    .sum::<usize>()
                    + self.strays.len()
            }
            None => self.agent_count,
        }
    }
}

/// Largest number of tiles an index will allocate.
pub const MAX_TILES: usize = 1 << 22;

/// Columns and rows needed to cover a `world_width` x `world_height` world.
///
/// Returns `None` when the grid would hold more than [`MAX_TILES`] tiles.
/// Invalid extents or tile sizes give an empty `(0, 0)` grid.
pub fn grid_dimensions(
    tile_size: f64,
    world_width: f64,
    world_height: f64,
) -> Option<(usize, usize)> {
    let cols = grid_span(world_width, tile_size)?;
    let rows = grid_span(world_height, tile_size)?;
    match cols.checked_mul(rows) {
        Some(tiles) if tiles <= MAX_TILES => Some((cols, rows)),
        _ => None,
    }
}

fn grid_span(extent: f64, tile_size: f64) -> Option<usize> {
    if !extent.is_finite() || !tile_size.is_finite() || extent <= 0.0 || tile_size <= 0.0 {
        return Some(0);
    }
    let span = (extent / tile_size).ceil();
    if span > MAX_TILES as f64 {
        return None;
    }
    Some(span as usize)
}

/// Iterator over a tile and its adjacent tiles.
#[derive(Debug, Clone)]
pub struct NeighborTiles {
    cols: Range<usize>,
    rows: Range<usize>,
    col: usize,
    row: usize,
}

impl Iterator for NeighborTiles {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        if self.cols.is_empty() || self.row >= self.rows.end {
            return None;
        }
        let tile = Tile {
            col: self.col,
            row: self.row,
        };
        self.col += 1;
        if self.col >= self.cols.end {
            self.col = self.cols.start;
            self.row += 1;
        }
        Some(tile)
    }
}

/// Candidate agent indices produced by [`TileIndex::neighbors_of`].
pub enum Candidates<'a> {
    Window {
        index: &'a TileIndex,
        tiles: NeighborTiles,
        current: std::slice::Iter<'a, usize>,
        strays: std::slice::Iter<'a, usize>,
    },
    Everyone(Range<usize>),
}

impl<'a> Iterator for Candidates<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            Candidates::Window {
                index,
                tiles,
                current,
                strays,
            } => loop {
                if let Some(&i) = current.next() {
                    return Some(i);
                }
                match tiles.next() {
                    Some(tile) => *current = TileIndex::agents_in(*index, tile).iter(),
                    None => return strays.next().copied(),
                }
            },
            Candidates::Everyone(range) => range.next(),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }

    #[test]
    fn test_tile_containing_maps_coordinates() {
        let index = TileIndex::new(200.0, 1200.0, 800.0);
        assert_eq!(index.cols, 6);
        assert_eq!(index.rows, 4);
        assert_eq!(
            index.tile_containing(v(311.0, 201.0)),
            Some(Tile { col: 1, row: 1 })
        );
        assert_eq!(index.tile_containing(v(0.0, 0.0)), Some(Tile { col: 0, row: 0 }));
    }

    #[test]
    fn test_tile_containing_rejects_out_of_bounds() {
        let index = TileIndex::new(200.0, 1200.0, 800.0);
        assert_eq!(index.tile_containing(v(-0.1, 10.0)), None);
        assert_eq!(index.tile_containing(v(10.0, -0.1)), None);
        assert_eq!(index.tile_containing(v(1200.0, 10.0)), None);
        assert_eq!(index.tile_containing(v(10.0, 800.0)), None);
        assert_eq!(index.tile_containing(v(f64::NAN, 10.0)), None);
        assert_eq!(index.tile_containing(v(f64::INFINITY, 10.0)), None);
    }

    #[test]
    fn test_neighbor_tiles_interior_has_nine() {
        let index = TileIndex::new(10.0, 50.0, 50.0);
        let tiles: Vec<Tile> = index.neighbor_tiles(Tile { col: 2, row: 2 }).collect();
        assert_eq!(tiles.len(), 9);
        assert_eq!(tiles[0], Tile { col: 1, row: 1 });
        assert_eq!(tiles[8], Tile { col: 3, row: 3 });
    }

    #[test]
    fn test_neighbor_tiles_corner_and_edge() {
        let index = TileIndex::new(10.0, 50.0, 50.0);
        assert_eq!(index.neighbor_tiles(Tile { col: 0, row: 0 }).count(), 4);
        assert_eq!(index.neighbor_tiles(Tile { col: 4, row: 4 }).count(), 4);
        assert_eq!(index.neighbor_tiles(Tile { col: 2, row: 0 }).count(), 6);
        assert_eq!(index.neighbor_tiles(Tile { col: 0, row: 3 }).count(), 6);
    }

    #[test]
    fn test_neighbor_tiles_single_tile_grid() {
        let index = TileIndex::new(100.0, 50.0, 50.0);
        let tiles: Vec<Tile> = index.neighbor_tiles(Tile { col: 0, row: 0 }).collect();
        assert_eq!(tiles, vec![Tile { col: 0, row: 0 }]);
    }

    #[test]
    fn test_build_buckets_every_agent_once() {
        let mut index = TileIndex::new(5.0, 20.0, 20.0);
        let positions = vec![v(1.0, 1.0), v(2.0, 2.0), v(10.0, 10.0), v(-3.0, 4.0)];
        index.build(&positions, 20.0, 20.0);

        assert_eq!(index.agents_in(Tile { col: 0, row: 0 }), &[0, 1]);
        assert_eq!(index.agents_in(Tile { col: 2, row: 2 }), &[2]);
        assert_eq!(index.strays, vec![3]);
        assert_eq!(index.agent_indices.len() + index.strays.len(), positions.len());
    }

    #[test]
    fn test_neighbors_of_skips_far_tiles_but_keeps_strays() {
        let mut index = TileIndex::new(5.0, 20.0, 20.0);
        let positions = vec![v(1.0, 1.0), v(2.0, 2.0), v(18.0, 18.0), v(-1.0, 1.0)];
        index.build(&positions, 20.0, 20.0);

        let near: Vec<usize> = index.neighbors_of(v(1.5, 1.5)).collect();
        assert_eq!(near, vec![0, 1, 3]);
        assert_eq!(index.count_candidates(v(1.5, 1.5)), 3);
    }

    #[test]
    fn test_neighbors_of_out_of_bounds_sees_everyone() {
        let mut index = TileIndex::new(5.0, 20.0, 20.0);
        let positions = vec![v(1.0, 1.0), v(18.0, 18.0), v(-1.0, 1.0)];
        index.build(&positions, 20.0, 20.0);

        let near: Vec<usize> = index.neighbors_of(v(-1.0, 1.0)).collect();
        assert_eq!(near, vec![0, 1, 2]);
    }

    #[test]
    fn test_rebuild_clears_previous_tick() {
        let mut index = TileIndex::new(5.0, 20.0, 20.0);
        index.build(&[v(1.0, 1.0)], 20.0, 20.0);
        index.build(&[], 20.0, 20.0);
        assert_eq!(index.neighbors_of(v(1.0, 1.0)).count(), 0);
    }

    #[test]
    fn test_grid_dimensions_caps_tile_count() {
        assert_eq!(grid_dimensions(400.0, 1200.0, 800.0), Some((3, 2)));
        assert_eq!(grid_dimensions(1.0, 1e13, 1e13), None);
        assert_eq!(grid_dimensions(1.0, 4096.0, 1024.0), Some((4096, 1024)));
        assert_eq!(grid_dimensions(1.0, 4096.0, 1025.0), None);
        assert_eq!(grid_dimensions(0.0, 100.0, 100.0), Some((0, 0)));
    }

    #[test]
    fn test_oversized_world_degrades_to_strays() {
        let mut index = TileIndex::new(1.0, 1e13, 1e13);
        assert_eq!(index.tile_count(), 0);

        let positions = vec![v(1.0, 1.0), v(2.0, 2.0)];
        index.build(&positions, 1e13, 1e13);
        assert_eq!(index.strays, vec![0, 1]);
        assert_eq!(index.neighbors_of(v(1.0, 1.0)).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_build_follows_resized_world() {
        let mut index = TileIndex::new(10.0, 20.0, 20.0);
        index.build(&[v(35.0, 5.0)], 40.0, 20.0);
        assert_eq!(index.cols, 4);
        assert!(index.strays.is_empty());
        assert_eq!(index.agents_in(Tile { col: 3, row: 0 }), &[0]);
    }
}
