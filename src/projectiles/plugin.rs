//! Projectile plugin - ranged attacks.

use bevy::prelude::*;

use super::systems;
use crate::core::SimSet;

pub struct ProjectilePlugin;

impl Plugin for ProjectilePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, systems::fire_projectiles.in_set(SimSet::Attack))
            .add_systems(
                FixedUpdate,
                systems::update_projectiles.in_set(SimSet::Projectiles),
            );
    }
}
