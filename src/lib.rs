//! Murmuration: a boids flocking simulation with predators.
//!
//! [`model::world::World`] owns the simulation state and runs the tick
//! pipeline; [`app::App`] adds the pause/step controller and metrics on top.

pub mod app;
pub mod model;
