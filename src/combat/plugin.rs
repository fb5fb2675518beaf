//! Combat plugin - melee attack resolution and knockback.

use bevy::prelude::*;

use super::systems;
use crate::core::SimSet;

/// Combat plugin - handles melee attack systems.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(FixedUpdate, systems::resolve_attacks.in_set(SimSet::Attack))
            .add_systems(FixedUpdate, systems::apply_knockback.in_set(SimSet::Feedback));
    }
}
