//! Health module - per-actor health pools and death detection.

mod components;
mod plugin;
mod systems;

pub use components::{DamageOutcome, Health, LifeState};
pub use plugin::HealthPlugin;
pub use systems::HealthNotifier;
