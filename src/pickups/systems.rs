//! Pickup systems - periodic spawning and collection.

use bevy::prelude::*;
use rand::Rng;

use super::components::{HealthPickup, PickupCollected, PickupSpawner};
use crate::actors::{ActorState, Hurtbox};
use crate::combat::HitShape;
use crate::core::{Faction, SimClock, SimRng};
use crate::health::{Health, HealthNotifier};

/// Spawn a pickup at a random spawn point when the interval has passed.
pub fn spawn_pickups(
    mut commands: Commands,
    clock: Res<SimClock>,
    mut spawner: ResMut<PickupSpawner>,
    mut rng: ResMut<SimRng>,
    active: Query<(), With<HealthPickup>>,
) {
    if !spawner.take_due(clock.now()) {
        return;
    }

    let count = active.iter().count();
    if count >= spawner.max_active {
        debug!("{} pickups already active, skipping spawn", count);
        return;
    }

    if spawner.spawn_points.is_empty() {
        warn!("Pickup spawner has no spawn points");
        return;
    }

    let index = rng.rng.gen_range(0..spawner.spawn_points.len());
    let position = spawner.spawn_points[index];

    commands.spawn((spawner.pickup(), Transform::from_translation(position)));
    info!("Spawned health pickup at {}", position);
}

/// Let player actors collect the pickups they touch.
///
/// The nearest eligible actor wins; the pickup is consumed even if the
/// collector was already at full health.
pub fn collect_pickups(
    mut commands: Commands,
    pickups: Query<(Entity, &HealthPickup, &Transform)>,
    mut collectors: Query<(Entity, &Faction, &ActorState, &Transform, Option<&Hurtbox>, &mut Health)>,
    mut notifier: HealthNotifier,
    mut collected: EventWriter<PickupCollected>,
) {
    for (pickup_entity, pickup, pickup_transform) in pickups.iter() {
        let center = pickup_transform.translation;
        let shape = HitShape::Circle {
            radius: pickup.radius,
        };

        let collector = collectors
            .iter()
            .filter(|(_, faction, state, _, _, health)| {
                **faction == Faction::Player && state.is_active() && health.is_alive()
            })
            .filter(|(_, _, _, transform, hurtbox, _)| {
                let radius = hurtbox.map_or(0.0, |h| h.radius);
                shape.overlaps(center, transform.translation, radius)
            })
            .map(|(entity, _, _, transform, _, _)| {
                (entity, transform.translation.distance_squared(center))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(entity, _)| entity);

        let Some(collector) = collector else {
            continue;
        };
        let Ok((_, _, _, _, _, mut health)) = collectors.get_mut(collector) else {
            continue;
        };

        let healed = health.heal(pickup.amount);
        if healed > 0.0 {
            notifier.changed(collector, &health);
        }

        collected.send(PickupCollected {
            pickup: pickup_entity,
            collector,
            healed,
        });
        commands.entity(pickup_entity).despawn_recursive();

        debug!("Actor {:?} collected pickup {:?} (+{})", collector, pickup_entity, healed);
    }
}
