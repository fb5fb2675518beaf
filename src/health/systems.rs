//! Health systems - apply damage, healing and upgrades from events.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::components::{DamageOutcome, Health};
use crate::core::{DamageEvent, Died, HealEvent, HealthChanged, HealthUpgrade};

/// Writers for the two health notifications.
///
/// Every code path that mutates a `Health` reports through this, so the
/// health bar and the single death notification stay in sync no matter
/// where the damage came from.
#[derive(SystemParam)]
pub struct HealthNotifier<'w> {
    changed: EventWriter<'w, HealthChanged>,
    died: EventWriter<'w, Died>,
}

impl HealthNotifier<'_> {
    /// Report the result of `Health::damage`.
    pub fn damaged(
        &mut self,
        actor: Entity,
        source: Option<Entity>,
        health: &Health,
        outcome: DamageOutcome,
    ) {
        if outcome.applied > 0.0 {
            self.changed(actor, health);
        }

        if outcome.killed {
            info!("Actor {:?} died (killed by {:?})", actor, source);
            self.died.send(Died {
                actor,
                killed_by: source,
            });
        }
    }

    pub fn changed(&mut self, actor: Entity, health: &Health) {
        self.changed.send(HealthChanged {
            actor,
            current: health.current(),
            maximum: health.maximum(),
        });
    }
}

/// Apply damage from projectiles, hazards and scripts.
pub fn apply_damage_events(
    mut damage_events: EventReader<DamageEvent>,
    mut targets: Query<&mut Health>,
    mut notifier: HealthNotifier,
) {
    for event in damage_events.read() {
        // Target may have been despawned earlier this step
        let Ok(mut health) = targets.get_mut(event.target) else {
            debug!("Damage target {:?} has no Health, skipping", event.target);
            continue;
        };

        let outcome = health.damage(event.amount);
        notifier.damaged(event.target, event.source, &health, outcome);
    }
}

/// Apply healing requests.
pub fn apply_heal_events(
    mut heal_events: EventReader<HealEvent>,
    mut targets: Query<&mut Health>,
    mut notifier: HealthNotifier,
) {
    for event in heal_events.read() {
        let Ok(mut health) = targets.get_mut(event.target) else {
            debug!("Heal target {:?} has no Health, skipping", event.target);
            continue;
        };

        if health.heal(event.amount) > 0.0 {
            notifier.changed(event.target, &health);
        }
    }
}

/// Apply maximum-health upgrades.
pub fn apply_health_upgrades(
    mut upgrades: EventReader<HealthUpgrade>,
    mut targets: Query<&mut Health>,
    mut notifier: HealthNotifier,
) {
    for event in upgrades.read() {
        let Ok(mut health) = targets.get_mut(event.target) else {
            continue;
        };

        let before = health.maximum();
        health.raise_max(event.amount);
        if health.maximum() != before {
            notifier.changed(event.target, &health);
        }
    }
}
