//! Combat systems - attack resolution and knockback.

use bevy::prelude::*;

use super::components::{AttackOutcome, Attacker};
use super::hit_query::{HitBodyData, ProximityHitQuery};
use crate::actors::{ActorState, Facing, LinearVelocity};
use crate::core::{AttackPerformed, AttackRequest, Knockback, SimClock};
use crate::health::{Health, HealthNotifier};

/// Resolve this step's attack requests.
///
/// Each request goes through the attacker's cooldown gate; a successful
/// swing damages every distinct target in reach before the next request is
/// looked at. Problems with a single request (unknown attacker, dead
/// attacker, no position) skip that request and never stop the step.
pub fn resolve_attacks(
    clock: Res<SimClock>,
    mut requests: EventReader<AttackRequest>,
    mut attackers: Query<(&mut Attacker, &ActorState, Option<&Transform>, Option<&Facing>)>,
    bodies: Query<HitBodyData, With<Health>>,
    mut healths: Query<&mut Health>,
    mut notifier: HealthNotifier,
    mut performed: EventWriter<AttackPerformed>,
    mut knockbacks: EventWriter<Knockback>,
) {
    if requests.is_empty() {
        return;
    }

    let now = clock.now();
    let hit_query = ProximityHitQuery::from_bodies(bodies.iter());

    for request in requests.read() {
        let actor = request.attacker;

        let Ok((mut attacker, state, transform, facing)) = attackers.get_mut(actor) else {
            debug!("Attack request for {:?} without an Attacker, ignoring", actor);
            continue;
        };

        if !state.is_active() {
            debug!("Attack request for inactive actor {:?} ({:?})", actor, state);
            continue;
        }

        let Some(transform) = transform else {
            warn!("Attacker {:?} has no Transform, cannot place the attack", actor);
            continue;
        };

        let position = transform.translation;
        let origin = attacker.attack_point(position, facing.copied().unwrap_or_default());
        let knockback = attacker.knockback;

        let outcome = attacker.attack(actor, now, origin, &hit_query, |target, damage| {
            let mut health = healths.get_mut(target).ok()?;
            if health.is_dead() {
                return None;
            }

            let result = health.damage(damage);
            notifier.damaged(target, Some(actor), &health, result);

            if knockback > 0.0 {
                if let Some(target_position) = hit_query.position_of(target) {
                    let direction = (target_position - position).normalize_or_zero();
                    knockbacks.send(Knockback {
                        target,
                        impulse: direction * knockback,
                    });
                }
            }

            Some(result.applied)
        });

        match outcome {
            AttackOutcome::Swung(hits) => {
                debug!("Actor {:?} attacked, hit {} target(s)", actor, hits.len());
                performed.send(AttackPerformed {
                    actor,
                    hit_count: hits.len(),
                });
            }
            AttackOutcome::OnCooldown => {
                debug!("Actor {:?} attack rejected: on cooldown", actor);
            }
            AttackOutcome::Misconfigured => {}
        }
    }
}

/// Fold knockback impulses into actor velocity (unit mass).
pub fn apply_knockback(
    mut knockbacks: EventReader<Knockback>,
    mut velocities: Query<(&mut LinearVelocity, &ActorState)>,
) {
    for event in knockbacks.read() {
        let Ok((mut velocity, state)) = velocities.get_mut(event.target) else {
            continue;
        };

        // Dead actors were stopped on death and stay put
        if state.is_active() {
            velocity.0 += event.impulse;
        }
    }
}
