//! Bridge to a rapier physics world (feature `rapier`).
//!
//! The core never steps physics itself. With this plugin, knockback becomes
//! an `ExternalImpulse` on rapier bodies and respawned bodies lose their
//! leftover velocity.

use std::collections::HashMap;

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::{Knockback, Respawned, SimSet};

pub struct PhysicsBridgePlugin;

impl Plugin for PhysicsBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (push_knockback_impulses, stop_respawned_bodies).in_set(SimSet::Feedback),
        );
    }
}

/// Add knockback to the target's `ExternalImpulse`, inserting one if missing.
pub fn push_knockback_impulses(
    mut commands: Commands,
    mut knockbacks: EventReader<Knockback>,
    mut bodies: Query<Option<&mut ExternalImpulse>, With<RigidBody>>,
) {
    // Bodies without the component yet; inserted once with the summed impulse
    let mut missing: HashMap<Entity, Vec3> = HashMap::new();

    for event in knockbacks.read() {
        let Ok(impulse) = bodies.get_mut(event.target) else {
            continue;
        };

        match impulse {
            Some(mut impulse) => impulse.impulse += event.impulse,
            None => *missing.entry(event.target).or_default() += event.impulse,
        }
    }

    for (target, impulse) in missing {
        commands.entity(target).insert(ExternalImpulse {
            impulse,
            ..default()
        });
    }
}

/// Clear the rapier velocity of bodies that just respawned.
pub fn stop_respawned_bodies(
    mut respawned: EventReader<Respawned>,
    mut velocities: Query<&mut Velocity>,
) {
    for event in respawned.read() {
        if let Ok(mut velocity) = velocities.get_mut(event.actor) {
            *velocity = Velocity::zero();
        }
    }
}
