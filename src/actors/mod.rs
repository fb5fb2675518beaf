//! Actors module - composition, definitions, spawning and removal.

mod components;
pub mod data;
mod error;
mod plugin;
mod spawning;
mod systems;

pub use components::*;
pub use data::{ActorDefinition, ActorRegistry};
pub use error::DataLoadError;
pub use plugin::ActorPlugin;
pub use spawning::{spawn_actor, spawn_registered};
pub use systems::despawn_actors;
