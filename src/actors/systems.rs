//! Actor lifecycle systems.

use bevy::prelude::*;

use super::components::ActorState;
use crate::core::{ActorRemoved, DespawnActor};
use crate::respawn::Respawner;

/// Remove actors for good.
///
/// A pending respawn is cancelled first so a removed actor can never come
/// back. Repeated requests for the same actor are ignored.
pub fn despawn_actors(
    mut commands: Commands,
    mut requests: EventReader<DespawnActor>,
    mut actors: Query<(&mut ActorState, Option<&mut Respawner>)>,
    mut removed: EventWriter<ActorRemoved>,
) {
    for request in requests.read() {
        let Ok((mut state, respawner)) = actors.get_mut(request.actor) else {
            debug!("Despawn request for unknown actor {:?}", request.actor);
            continue;
        };

        if *state == ActorState::Removed {
            continue;
        }

        if let Some(mut respawner) = respawner {
            if let Some(deadline) = respawner.cancel() {
                debug!(
                    "Cancelled respawn of {:?} due at {:.2}s",
                    request.actor,
                    deadline.as_secs_f32()
                );
            }
        }

        *state = ActorState::Removed;
        commands.entity(request.actor).despawn_recursive();
        removed.send(ActorRemoved {
            actor: request.actor,
        });

        info!("Actor {:?} removed", request.actor);
    }
}
