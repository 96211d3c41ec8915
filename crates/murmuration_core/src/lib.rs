//! # Murmuration Core
//!
//! The deterministic flocking engine behind murmuration.
//!
//! This crate contains:
//! - Validated configuration with TOML loading
//! - A uniform tile index bounding neighbor queries
//! - The interaction rules (cohesion, separation, velocity matching,
//!   boundary avoidance, predator avoidance and hunting, speed limiting)
//! - Population management (edge spawning, resizing, deferred kills)
//! - Metrics collection and structured logging
//!
//! ## Architecture
//!
//! Each tick follows a snapshot → parallel compute → serial apply staging:
//! - **Snapshot**: agents are captured as immutable [`snapshot::Body`] values
//! - **Parallel compute**: rules accumulate per-agent velocity deltas with rayon
//! - **Serial apply**: deltas, speed limits, integration and removals run in order
//!
//! ## Example
//!
//! ```
//! use murmuration_core::config::SimulationConfig;
//! use murmuration_core::population::Population;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let config = SimulationConfig::default();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut population = Population::new();
//! population.set_target_count(25, &config, 0, &mut rng);
//! assert_eq!(population.boid_count(), 25);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Configuration errors
pub mod error;
/// Agent creation and edge spawning
pub mod lifecycle;
/// Performance metrics collection and logging
pub mod metrics;
/// Ownership of the ordinary and predator sets
pub mod population;
/// Immutable agent views and render snapshots
pub mod snapshot;
/// Uniform tile grid for neighbor candidate queries
pub mod spatial_index;
/// Per-tick interaction rules
pub mod systems;

pub use config::SimulationConfig;
pub use error::ConfigError;
pub use metrics::{init_logging, Metrics};
pub use population::Population;
pub use spatial_index::TileIndex;
