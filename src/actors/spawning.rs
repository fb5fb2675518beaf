//! Spawning actors from their definitions.

use bevy::prelude::*;

use super::components::{Actor, Hurtbox};
use super::data::{ActorDefinition, ActorRegistry};
use crate::health::Health;

/// Spawn an actor described by `definition` at `position`.
///
/// Combat and respawn components are only added when the definition has the
/// matching block. A `Home` spawn point resolves to `position`.
pub fn spawn_actor(commands: &mut Commands, definition: &ActorDefinition, position: Vec3) -> Entity {
    let mut entity = commands.spawn((
        Actor {
            name: definition.name.clone(),
        },
        Health::new(definition.max_health),
        definition.faction,
        definition.facing,
        Hurtbox {
            radius: definition.hurtbox_radius,
        },
        Transform::from_translation(position),
    ));

    if let Some(attacker) = definition.to_attacker() {
        entity.insert(attacker);
    }
    if let Some(shooter) = definition.to_shooter() {
        entity.insert(shooter);
    }
    if let Some(respawner) = definition.to_respawner(position) {
        entity.insert(respawner);
    }

    info!("Spawned {} at {}", definition.name, position);
    entity.id()
}

/// Spawn a registered actor type. Unknown types are logged and skipped.
pub fn spawn_registered(
    commands: &mut Commands,
    registry: &ActorRegistry,
    actor_type: &str,
    position: Vec3,
) -> Option<Entity> {
    let Some(definition) = registry.get(actor_type) else {
        warn!("Unknown actor type: {}", actor_type);
        return None;
    };

    Some(spawn_actor(commands, definition, position))
}
