//! Respawn systems - death resolution, forced respawns and the respawn tick.

use bevy::prelude::*;

use super::components::{DeathResolution, Respawner};
use crate::actors::{place_actor, ActorState, LinearVelocity};
use crate::core::{DespawnActor, Died, ForceRespawn, Respawned, SimClock, SimRng};
use crate::health::{Health, HealthNotifier};

/// Resolve this step's deaths.
///
/// The actor stops and leaves the `Active` state. With a `Respawner` the
/// death either arms the single respawn timer or, for actors that never come
/// back, requests removal. Actors without one stay as corpses.
pub fn handle_deaths(
    clock: Res<SimClock>,
    mut deaths: EventReader<Died>,
    mut actors: Query<(&mut ActorState, Option<&mut Respawner>, Option<&mut LinearVelocity>)>,
    mut despawns: EventWriter<DespawnActor>,
) {
    let now = clock.now();

    for event in deaths.read() {
        let Ok((mut state, respawner, velocity)) = actors.get_mut(event.actor) else {
            continue;
        };

        if *state == ActorState::Removed {
            continue;
        }

        if let Some(mut velocity) = velocity {
            velocity.0 = Vec3::ZERO;
        }

        let Some(mut respawner) = respawner else {
            *state = ActorState::Dead;
            continue;
        };

        match respawner.on_death(now) {
            DeathResolution::Scheduled { deadline } => {
                info!(
                    "Actor {:?} will respawn in {:.2}s",
                    event.actor,
                    (deadline - now).as_secs_f32()
                );
                *state = ActorState::AwaitingRespawn { deadline };
            }
            DeathResolution::AlreadyPending => {
                debug!("Actor {:?} already has a respawn pending", event.actor);
            }
            DeathResolution::Remove => {
                info!("Actor {:?} died and will not respawn", event.actor);
                *state = ActorState::Dead;
                despawns.send(DespawnActor { actor: event.actor });
            }
        }
    }
}

/// Make forced respawns due this step.
pub fn process_forced_respawns(
    clock: Res<SimClock>,
    mut requests: EventReader<ForceRespawn>,
    mut actors: Query<(&mut Respawner, &ActorState)>,
) {
    for request in requests.read() {
        // Actors despawned earlier this step are already gone
        let Ok((mut respawner, state)) = actors.get_mut(request.actor) else {
            debug!("Forced respawn for {:?} without a Respawner, ignoring", request.actor);
            continue;
        };

        if *state == ActorState::Removed {
            continue;
        }

        respawner.force(clock.now());
    }
}

/// Bring back every actor whose respawn deadline has passed.
pub fn tick_respawns(
    clock: Res<SimClock>,
    mut rng: ResMut<SimRng>,
    mut actors: Query<(
        Entity,
        &mut Respawner,
        &mut Health,
        &mut ActorState,
        &mut Transform,
        Option<&mut LinearVelocity>,
    )>,
    mut notifier: HealthNotifier,
    mut respawned: EventWriter<Respawned>,
) {
    let now = clock.now();

    for (entity, mut respawner, mut health, mut state, mut transform, velocity) in actors.iter_mut() {
        if *state == ActorState::Removed {
            continue;
        }

        if !respawner.take_due(now) {
            continue;
        }

        let position = respawner.pick_position(&mut rng.rng);
        place_actor(&mut transform, velocity.map(|v| v.into_inner()), position);

        let maximum = health.maximum();
        health.reset(maximum);
        *state = ActorState::Active;

        notifier.changed(entity, &health);
        respawned.send(Respawned {
            actor: entity,
            position,
        });

        info!("Actor {:?} respawned at {}", entity, position);
    }
}
