//! Error types for murmuration_core.
//!
//! Configuration is the only fallible surface of the core: once a
//! configuration is accepted, ticks cannot fail.

use murmuration_data::Role;
use thiserror::Error;

/// Rejection reasons for a simulation configuration or a runtime patch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// World width/height not positive or not finite
    #[error("Invalid world dimensions: {width} x {height}")]
    InvalidDimensions { width: f64, height: f64 },

    /// Tile side not positive or not finite
    #[error("Invalid tile size: {0}")]
    InvalidTileSize(f64),

    /// Tile side smaller than the widest neighborhood radius
    #[error("Tile size {tile_size} is smaller than the largest configured radius {required}")]
    TileTooSmall { tile_size: f64, required: f64 },

    /// World too large to cover with tiles of this size
    #[error("World {width} x {height} needs too many tiles of size {tile_size}")]
    GridTooLarge {
        width: f64,
        height: f64,
        tile_size: f64,
    },

    /// Negative or non-finite distance
    #[error("Invalid {name} for {role}: {value}")]
    InvalidDistance {
        role: Role,
        name: &'static str,
        value: f64,
    },

    /// Speed cap not positive or not finite
    #[error("Invalid max speed for {role}: {value}")]
    InvalidSpeed { role: Role, value: f64 },

    /// Rule factor negative or not finite
    #[error("Invalid factor {name}: {value}")]
    InvalidFactor { name: &'static str, value: f64 },

    /// Speed jitter outside [0, 2)
    #[error("Invalid velocity jitter: {0} (must be in [0, 2))")]
    InvalidJitter(f64),

    /// Splash marker lifetime of zero ticks
    #[error("Invalid splash lifetime: {0} ticks (must be at least 1)")]
    InvalidSplashTicks(u32),
}

/// Result type alias for configuration checks.
pub type Result<T> = std::result::Result<T, ConfigError>;
