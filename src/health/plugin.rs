//! Health plugin - damage, healing and upgrade application.

use bevy::prelude::*;

use super::systems;
use crate::core::SimSet;

/// Health plugin - applies event-driven health mutations.
///
/// Melee hits are applied inside the attack itself; this plugin handles
/// everything else that touches health.
pub struct HealthPlugin;

impl Plugin for HealthPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (
                systems::apply_damage_events,
                systems::apply_heal_events,
                systems::apply_health_upgrades,
            )
                .chain()
                .in_set(SimSet::Damage),
        );
    }
}
