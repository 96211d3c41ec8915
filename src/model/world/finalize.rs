use crate::model::config::SimulationConfig;
use crate::model::systems::Kill;
use crate::model::world::World;
use murmuration_data::{LiveEvent, Splash};

impl World {
    /// Serial post-pass of a tick: ages splashes, applies catches, drops the
    /// eaten agents and brings the ordinary population back to its target.
    pub(crate) fn finalize_tick(
        &mut self,
        config: &SimulationConfig,
        kills: Vec<Kill>,
    ) -> Vec<LiveEvent> {
        let tick = self.tick;
        self.splashes.retain_mut(Splash::decay);

        let mut events = Vec::with_capacity(kills.len());
        for kill in kills {
            // a victim claimed by several predators is removed once
            if !self.population.remove_on_kill(kill.victim_idx) {
                continue;
            }
            tracing::debug!(
                tick,
                predator = %kill.predator,
                victim = %kill.victim,
                x = kill.location.x,
                y = kill.location.y,
                "Agent killed"
            );
            self.splashes
                .push(Splash::new(kill.location, config.predation.splash_ticks));
            self.kills_total += 1;
            events.push(LiveEvent::Killed {
                victim: kill.victim,
                predator: kill.predator,
                location: kill.location,
                tick,
            });
        }

        self.population.compact();
        let change = self.population.reconcile(config, tick, &mut self.rng);
        if !change.spawned.is_empty() || !change.removed.is_empty() {
            tracing::debug!(
                tick,
                spawned = change.spawned.len(),
                removed = change.removed.len(),
                "Population reconciled"
            );
        }

        events
    }
}
