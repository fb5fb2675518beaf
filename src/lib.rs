//! Skirmish - combat, health and respawn core for a 2D action game.
//!
//! Headless and engine-side only: rendering, input, audio and movement live
//! elsewhere and talk to the core through components and events.
//!
//! # Architecture
//!
//! The simulation is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Simulation clock, seeded RNG, factions, events, config, step ordering
//! - **Health**: Health pools, damage/heal application, death notification
//! - **Combat**: Melee cooldown gate, hit queries, knockback
//! - **Projectiles**: Ranged attacks
//! - **Respawn**: Death handling, respawn timers and placement
//! - **Actors**: Composition, RON definitions, spawning and removal
//! - **Pickups**: Healing consumables
//!
//! Everything runs in `FixedUpdate`, ordered by [`core::SimSet`]. Use
//! [`core::step_simulation`] to drive it deterministically.

pub mod actors;
pub mod combat;
pub mod core;
pub mod health;
#[cfg(feature = "rapier")]
pub mod physics;
pub mod pickups;
pub mod projectiles;
pub mod respawn;

use bevy::prelude::*;

/// Main plugin that adds all sub-plugins.
pub struct SkirmishPlugin;

impl Plugin for SkirmishPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            .add_plugins(health::HealthPlugin)
            .add_plugins(combat::CombatPlugin)
            .add_plugins(projectiles::ProjectilePlugin)
            .add_plugins(respawn::RespawnPlugin)
            .add_plugins(actors::ActorPlugin)
            .add_plugins(pickups::PickupPlugin);

        #[cfg(feature = "rapier")]
        app.add_plugins(physics::PhysicsBridgePlugin);
    }
}
