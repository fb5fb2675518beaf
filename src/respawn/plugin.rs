//! Respawn plugin - death resolution and delayed respawning.

use bevy::prelude::*;

use super::systems;
use crate::core::SimSet;

/// Respawn plugin - turns deaths into scheduled respawns or removals.
pub struct RespawnPlugin;

impl Plugin for RespawnPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(FixedUpdate, systems::handle_deaths.in_set(SimSet::Death))
            .add_systems(
                FixedUpdate,
                (systems::process_forced_respawns, systems::tick_respawns)
                    .chain()
                    .in_set(SimSet::Respawn),
            );
    }
}
