//! Pickup plugin - health consumables.

use bevy::prelude::*;

use super::components::{PickupCollected, PickupSpawner};
use super::systems::{collect_pickups, spawn_pickups};
use crate::core::{SimConfig, SimSet};

/// Registers pickup collection, and the periodic spawner when configured.
///
/// Must be added after `CorePlugin`, which provides `SimConfig`.
pub struct PickupPlugin;

impl Plugin for PickupPlugin {
    fn build(&self, app: &mut App) {
        let spawner = app
            .world()
            .get_resource::<SimConfig>()
            .and_then(|config| config.pickups.as_ref())
            .map(PickupSpawner::from_config);

        if let Some(spawner) = spawner {
            app.insert_resource(spawner);
        }

        app.add_event::<PickupCollected>().add_systems(
            FixedUpdate,
            (
                spawn_pickups.run_if(resource_exists::<PickupSpawner>),
                collect_pickups,
            )
                .chain()
                .in_set(SimSet::Pickups),
        );
    }
}
