//! Ownership of the live agent sets.
//!
//! Ordinary agents and predators live in separate vectors kept in spawn
//! order. Removals requested while a tick is evaluating are only marked;
//! `compact` applies them in one pass after every rule has run.

use crate::config::SimulationConfig;
use crate::lifecycle;
use crate::snapshot::Body;
use murmuration_data::{Agent, Role};
use rand::Rng;
use std::collections::HashSet;
use uuid::Uuid;

/// Outcome of a resize request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulationChange {
    pub spawned: Vec<Uuid>,
    pub removed: Vec<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct Population {
    pub boids: Vec<Agent>,
    pub predators: Vec<Agent>,
    /// Desired number of ordinary agents.
    pub target: usize,
    killed: HashSet<usize>,
}

impl Population {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boid_count(&self) -> usize {
        self.boids.len()
    }

    pub fn predator_count(&self) -> usize {
        self.predators.len()
    }

    pub fn len(&self) -> usize {
        self.boids.len() + self.predators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ordinary agents then predators, the order bodies and snapshots use.
    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.boids.iter().chain(self.predators.iter())
    }

    /// Captures the pre-tick bodies into `out`, reusing its allocation.
    pub fn capture_bodies(&self, out: &mut Vec<Body>) {
        out.clear();
        out.extend(self.iter().map(Body::from));
    }

    /// Adds an agent as-is. Ordinary agents raise the target so the next
    /// reconcile keeps them.
    pub fn insert(&mut self, agent: Agent) {
        match agent.role {
            Role::Ordinary => {
                self.boids.push(agent);
                self.target += 1;
            }
            Role::Predator => self.predators.push(agent),
        }
    }

    pub fn spawn_ordinary<R: Rng>(
        &mut self,
        config: &SimulationConfig,
        tick: u64,
        rng: &mut R,
    ) -> Uuid {
        let agent = lifecycle::spawn_on_edge(
            Role::Ordinary,
            config.world.width,
            config.world.height,
            tick,
            config.behavior.velocity_jitter,
            rng,
        );
        let id = agent.id;
        self.boids.push(agent);
        id
    }

    /// Sets the ordinary-agent target and immediately spawns or removes the
    /// difference. Shrinking removes the oldest agents first.
    pub fn set_target_count<R: Rng>(
        &mut self,
        target: usize,
        config: &SimulationConfig,
        tick: u64,
        rng: &mut R,
    ) -> PopulationChange {
        self.target = target;
        self.reconcile(config, tick, rng)
    }

    /// Brings the ordinary population back to `target`.
    pub fn reconcile<R: Rng>(
        &mut self,
        config: &SimulationConfig,
        tick: u64,
        rng: &mut R,
    ) -> PopulationChange {
        let mut change = PopulationChange::default();
        if self.boids.len() > self.target {
            let excess = self.boids.len() - self.target;
            change.removed = self.boids.drain(..excess).map(|a| a.id).collect();
        }
        while self.boids.len() < self.target {
            change.spawned.push(self.spawn_ordinary(config, tick, rng));
        }
        change
    }

    pub fn add_predator<R: Rng>(
        &mut self,
        config: &SimulationConfig,
        tick: u64,
        rng: &mut R,
    ) -> Uuid {
        let agent = lifecycle::spawn_on_edge(
            Role::Predator,
            config.world.width,
            config.world.height,
            tick,
            config.behavior.velocity_jitter,
            rng,
        );
        let id = agent.id;
        self.predators.push(agent);
        id
    }

    /// Removes the most recently added predator.
    pub fn remove_predator(&mut self) -> Option<Agent> {
        self.predators.pop()
    }

    /// Marks ordinary agent `boid_idx` as eaten.
    ///
    /// Returns `true` only the first time an index is marked, so two
    /// predators catching the same prey in one tick remove it once and lower
    /// the target once.
    pub fn remove_on_kill(&mut self, boid_idx: usize) -> bool {
        if boid_idx >= self.boids.len() || !self.killed.insert(boid_idx) {
            return false;
        }
        self.target = self.target.saturating_sub(1);
        true
    }

    /// Drops every agent marked by `remove_on_kill`, preserving order.
    pub fn compact(&mut self) -> Vec<Agent> {
        if self.killed.is_empty() {
            return Vec::new();
        }
        let killed = std::mem::take(&mut self.killed);
        let mut removed = Vec::with_capacity(killed.len());
        let mut kept = Vec::with_capacity(self.boids.len() - killed.len());
        for (idx, agent) in std::mem::take(&mut self.boids).into_iter().enumerate() {
            if killed.contains(&idx) {
                removed.push(agent);
            } else {
                kept.push(agent);
            }
        }
        self.boids = kept;
        removed
    }
}
