//! Pickups module - health consumables and their spawner.

mod components;
mod plugin;
mod systems;

pub use components::{HealthPickup, PickupCollected, PickupSpawner};
pub use plugin::PickupPlugin;
