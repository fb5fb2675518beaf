//! Projectile systems - firing, flight, hits and expiry.

use bevy::prelude::*;

use super::components::{Projectile, Shooter};
use crate::actors::{ActorState, Facing};
use crate::combat::{HitBodyData, HitQuery, HitShape, ProximityHitQuery};
use crate::core::{DamageEvent, FireRequest, SimClock};
use crate::health::Health;

/// Spawn projectiles for this step's fire requests.
///
/// Requests without a usable direction fall back to the shooter's facing.
pub fn fire_projectiles(
    mut commands: Commands,
    clock: Res<SimClock>,
    mut requests: EventReader<FireRequest>,
    mut shooters: Query<(&mut Shooter, &ActorState, &Transform, Option<&Facing>)>,
) {
    let now = clock.now();

    for request in requests.read() {
        let Ok((mut shooter, state, transform, facing)) = shooters.get_mut(request.shooter) else {
            debug!("Fire request for {:?} without a Shooter, ignoring", request.shooter);
            continue;
        };

        if !state.is_active() {
            continue;
        }

        if !shooter.is_configured() {
            warn!("Shooter {:?} is misconfigured, not firing", request.shooter);
            continue;
        }

        if !shooter.try_fire(now) {
            debug!("Actor {:?} shot rejected: on cooldown", request.shooter);
            continue;
        }

        let facing = facing.copied().unwrap_or_default();
        let direction = request
            .direction
            .and_then(|d| d.try_normalize())
            .map(|d| d.extend(0.0))
            .unwrap_or_else(|| facing.direction());
        let origin = transform.translation + facing.mirror(shooter.muzzle_offset);

        commands.spawn((
            Projectile {
                owner: request.shooter,
                damage: shooter.damage,
                velocity: direction * shooter.speed,
                radius: shooter.radius,
                targets: shooter.targets,
                expires_at: now.saturating_add(shooter.lifetime),
            },
            Transform::from_translation(origin),
        ));

        debug!("Actor {:?} fired towards {}", request.shooter, direction);
    }
}

/// Move projectiles, resolve hits and drop expired ones.
///
/// A projectile damages at most one target, the nearest active hostile it
/// overlaps after moving, and is consumed by the hit.
pub fn update_projectiles(
    mut commands: Commands,
    clock: Res<SimClock>,
    mut projectiles: Query<(Entity, &Projectile, &mut Transform), Without<Health>>,
    bodies: Query<HitBodyData, With<Health>>,
    mut damage: EventWriter<DamageEvent>,
) {
    if projectiles.is_empty() {
        return;
    }

    let now = clock.now();
    let dt = clock.step().as_secs_f32();
    let hit_query = ProximityHitQuery::from_bodies(bodies.iter());

    for (entity, projectile, mut transform) in projectiles.iter_mut() {
        transform.translation += projectile.velocity * dt;
        let position = transform.translation;

        let shape = HitShape::Circle {
            radius: projectile.radius,
        };
        let target = hit_query
            .query_region(position, &shape, projectile.targets)
            .into_iter()
            .filter(|target| *target != projectile.owner)
            .filter_map(|target| {
                hit_query
                    .position_of(target)
                    .map(|p| (target, p.distance_squared(position)))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(target, _)| target);

        if let Some(target) = target {
            damage.send(DamageEvent {
                target,
                source: Some(projectile.owner),
                amount: projectile.damage,
            });
            commands.entity(entity).despawn_recursive();
            debug!("Projectile {:?} hit {:?}", entity, target);
            continue;
        }

        if projectile.is_expired(now) {
            commands.entity(entity).despawn_recursive();
        }
    }
}
