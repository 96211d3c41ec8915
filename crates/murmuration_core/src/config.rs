//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every section has a default, so a file only needs
//! to name the values it changes.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command line flags and runtime patches from the controller
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! width = 1200.0
//! height = 800.0
//! tile_size = 400.0
//! initial_population = 300
//! seed = 42
//!
//! [boid]
//! max_speed = 6.0
//!
//! [behavior]
//! matching_scope = "neighborhood"
//! ```

use crate::error::{ConfigError, Result};
use crate::spatial_index::grid_dimensions;
use anyhow::Context;
use murmuration_data::Role;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// World geometry and start-up population.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    /// Side of a spatial-index tile. Must cover the widest neighborhood radius.
    pub tile_size: f64,
    pub initial_population: usize,
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            tile_size: 400.0,
            initial_population: 100,
            seed: None,
        }
    }
}

/// Per-role perception, speed and trail settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RoleConfig {
    pub view_distance: f64,
    pub collision_distance: f64,
    pub max_speed: f64,
    pub history_length: usize,
}

impl RoleConfig {
    #[must_use]
    pub fn boid() -> Self {
        Self {
            view_distance: 200.0,
            collision_distance: 10.0,
            max_speed: 8.0,
            history_length: 5,
        }
    }

    #[must_use]
    pub fn predator() -> Self {
        Self {
            view_distance: 400.0,
            collision_distance: 10.0,
            max_speed: 9.0,
            history_length: 50,
        }
    }

    /// Largest radius this role ever queries the spatial index with.
    #[must_use]
    pub fn widest_radius(&self) -> f64 {
        self.view_distance.max(self.collision_distance)
    }

    fn validate(&self, role: Role) -> Result<()> {
        if !self.view_distance.is_finite() || self.view_distance <= 0.0 {
            return Err(ConfigError::InvalidDistance {
                role,
                name: "view_distance",
                value: self.view_distance,
            });
        }
        if !self.collision_distance.is_finite() || self.collision_distance < 0.0 {
            return Err(ConfigError::InvalidDistance {
                role,
                name: "collision_distance",
                value: self.collision_distance,
            });
        }
        validate_speed(role, self.max_speed)
    }
}

impl Default for RoleConfig {
    fn default() -> Self {
        Self::boid()
    }
}

/// Weights of the interaction rules.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FactorConfig {
    pub centering: f64,
    pub predator_centering: f64,
    pub collision: f64,
    pub boundary: f64,
    pub matching: f64,
    /// Weight of the prey velocity term in the hunt rule.
    pub predator_matching: f64,
    pub predator_avoidance: f64,
    pub hunt: f64,
}

impl Default for FactorConfig {
    fn default() -> Self {
        Self {
            centering: 0.005,
            predator_centering: 0.005,
            collision: 0.1,
            boundary: 0.5,
            matching: 0.05,
            predator_matching: 0.075,
            predator_avoidance: 0.009,
            hunt: 0.1,
        }
    }
}

impl FactorConfig {
    fn named(&self) -> [(&'static str, f64); 8] {
        [
            ("centering", self.centering),
            ("predator_centering", self.predator_centering),
            ("collision", self.collision),
            ("boundary", self.boundary),
            ("matching", self.matching),
            ("predator_matching", self.predator_matching),
            ("predator_avoidance", self.predator_avoidance),
            ("hunt", self.hunt),
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PredationConfig {
    pub kill_distance: f64,
    pub splash_ticks: u32,
}

impl Default for PredationConfig {
    fn default() -> Self {
        Self {
            kill_distance: 10.0,
            splash_ticks: 10,
        }
    }
}

/// Population the velocity-matching rule averages over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchingScope {
    /// Every other ordinary agent in the world (herd-wide alignment).
    #[default]
    Global,
    /// Only ordinary agents inside the view distance (local alignment).
    Neighborhood,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BehaviorConfig {
    pub matching_scope: MatchingScope,
    /// Width of the per-agent speed multiplier range, centred on 1.0.
    pub velocity_jitter: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            matching_scope: MatchingScope::Global,
            velocity_jitter: 1.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub world: WorldConfig,
    pub boid: RoleConfig,
    pub predator: RoleConfig,
    pub factors: FactorConfig,
    pub predation: PredationConfig,
    pub behavior: BehaviorConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            boid: RoleConfig::boid(),
            predator: RoleConfig::predator(),
            factors: FactorConfig::default(),
            predation: PredationConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl SimulationConfig {
    #[must_use]
    pub fn role(&self, role: Role) -> &RoleConfig {
        match role {
            Role::Ordinary => &self.boid,
            Role::Predator => &self.predator,
        }
    }

    pub fn role_mut(&mut self, role: Role) -> &mut RoleConfig {
        match role {
            Role::Ordinary => &mut self.boid,
            Role::Predator => &mut self.predator,
        }
    }

    /// Smallest tile side that keeps every neighborhood inside a 3x3 window.
    #[must_use]
    pub fn required_tile_size(&self) -> f64 {
        self.boid.widest_radius().max(self.predator.widest_radius())
    }

    /// Validates all configuration parameters.
    ///
    /// Returns the first failure found.
    ///
    /// # Validation Rules
    /// - World dimensions and tile size must be positive and finite
    /// - Tile size must be at least the largest view/collision distance
    /// - The tile grid covering the world must stay within [`MAX_TILES`](crate::spatial_index::MAX_TILES)
    /// - Speeds must be positive, factors and distances non-negative
    /// - Velocity jitter must lie in [0, 2) so multipliers stay positive
    /// - Splash markers must live at least one tick
    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.world.width, self.world.height)?;

        let tile = self.world.tile_size;
        if !tile.is_finite() || tile <= 0.0 {
            return Err(ConfigError::InvalidTileSize(tile));
        }

        self.boid.validate(Role::Ordinary)?;
        self.predator.validate(Role::Predator)?;

        let required = self.required_tile_size();
        if tile < required {
            return Err(ConfigError::TileTooSmall {
                tile_size: tile,
                required,
            });
        }
        validate_grid(self.world.width, self.world.height, tile)?;

        for (name, value) in self.factors.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidFactor { name, value });
            }
        }

        let kill = self.predation.kill_distance;
        if !kill.is_finite() || kill < 0.0 {
            return Err(ConfigError::InvalidDistance {
                role: Role::Predator,
                name: "kill_distance",
                value: kill,
            });
        }

        let jitter = self.behavior.velocity_jitter;
        if !jitter.is_finite() || !(0.0..2.0).contains(&jitter) {
            return Err(ConfigError::InvalidJitter(jitter));
        }

        if self.predation.splash_ticks == 0 {
            return Err(ConfigError::InvalidSplashTicks(0));
        }

        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parsing {}", path.display()))
    }

    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.boid).as_bytes());
        hasher.update(format!("{:?}", self.predator).as_bytes());
        hasher.update(format!("{:?}", self.factors).as_bytes());
        hasher.update(format!("{:?}", self.predation).as_bytes());
        hasher.update(format!("{:?}", self.behavior).as_bytes());
        hex::encode(hasher.finalize())
    }
}

pub fn validate_dimensions(width: f64, height: f64) -> Result<()> {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(ConfigError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Rejects worlds whose tile grid would exceed
/// [`MAX_TILES`](crate::spatial_index::MAX_TILES).
pub fn validate_grid(width: f64, height: f64, tile_size: f64) -> Result<()> {
    if grid_dimensions(tile_size, width, height).is_none() {
        return Err(ConfigError::GridTooLarge {
            width,
            height,
            tile_size,
        });
    }
    Ok(())
}

pub fn validate_speed(role: Role, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::InvalidSpeed { role, value });
    }
    Ok(())
}
