//! Actor plugin - definitions and removal.

use bevy::prelude::*;

use super::data::{load_actor_definitions, ActorRegistry};
use super::systems::despawn_actors;
use crate::core::SimSet;

/// Loads actor definitions at startup and handles actor removal.
pub struct ActorPlugin;

impl Plugin for ActorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActorRegistry>()
            .add_systems(Startup, load_actor_definitions)
            .add_systems(FixedUpdate, despawn_actors.in_set(SimSet::Despawn));
    }
}
