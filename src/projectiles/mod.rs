//! Projectiles module - ranged attacks fired on request.

mod components;
mod plugin;
mod systems;

pub use components::{Projectile, Shooter, DEFAULT_PROJECTILE_LIFETIME};
pub use plugin::ProjectilePlugin;
