//! Respawn module - scheduling and executing respawns after death.

mod components;
mod plugin;
mod systems;

pub use components::{DeathResolution, Respawner, SpawnAxis, SpawnPoint, SpawnRegion};
pub use plugin::RespawnPlugin;
