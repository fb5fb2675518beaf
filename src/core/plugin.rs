//! Core plugin that sets up the clock, RNG, events and step ordering.

use bevy::prelude::*;

use super::clock::{advance_sim_clock, SimClock};
use super::config::SimConfig;
use super::events::*;
use super::rng::SimRng;

/// Ordering of one simulation step inside `FixedUpdate`.
///
/// Deaths raised while attacking or applying damage are resolved in
/// `Death` of the same step, before any respawn deadline is evaluated.
/// `Despawn` runs before `Respawn` so a removed actor is never brought back.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimSet {
    Intent,
    Attack,
    Projectiles,
    Damage,
    Pickups,
    Death,
    Despawn,
    Respawn,
    Feedback,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - `SimConfig` (kept if already inserted), fixed step rate and `SimRng`
/// - The `SimClock` and its `FixedFirst` driver
/// - Global request and notification events
/// - `SimSet` ordering
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimConfig>();
        let config = app.world().resource::<SimConfig>().clone();

        app
            .insert_resource(Time::<Fixed>::from_duration(config.step()))
            .insert_resource(SimRng::new(config.seed))
            .init_resource::<SimClock>()

            // Requests
            .add_event::<AttackRequest>()
            .add_event::<FireRequest>()
            .add_event::<DamageEvent>()
            .add_event::<HealEvent>()
            .add_event::<HealthUpgrade>()
            .add_event::<ForceRespawn>()
            .add_event::<DespawnActor>()

            // Notifications
            .add_event::<HealthChanged>()
            .add_event::<Died>()
            .add_event::<Respawned>()
            .add_event::<AttackPerformed>()
            .add_event::<Knockback>()
            .add_event::<ActorRemoved>()

            .configure_sets(
                FixedUpdate,
                (
                    SimSet::Intent,
                    SimSet::Attack,
                    SimSet::Projectiles,
                    SimSet::Damage,
                    SimSet::Pickups,
                    SimSet::Death,
                    SimSet::Despawn,
                    SimSet::Respawn,
                    SimSet::Feedback,
                )
                    .chain(),
            )
            .add_systems(FixedFirst, advance_sim_clock);
    }
}
