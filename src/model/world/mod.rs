use crate::model::config::SimulationConfig;
use crate::model::population::Population;
use crate::model::snapshot::Body;
use crate::model::spatial_index::TileIndex;
use murmuration_data::{Splash, Vector2};
use rand_chacha::ChaCha8Rng;

pub mod control;
pub mod finalize;
pub mod init;
pub mod update;

/// The simulation aggregate: configuration, agents, tile index, splashes and
/// the seeded RNG used for spawning.
pub struct World {
    pub config: SimulationConfig,
    pub tick: u64,
    pub population: Population,
    pub index: TileIndex,
    pub splashes: Vec<Splash>,
    pub kills_total: u64,
    pub rng: ChaCha8Rng,

    body_buffer: Vec<Body>,
    position_buffer: Vec<Vector2>,
}
