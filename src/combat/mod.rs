//! Combat module - attack cooldowns, hit detection and damage application.

mod components;
mod hit_query;
mod plugin;
mod systems;

pub use components::{AttackOutcome, Attacker, Cooldown, HitResult};
pub use hit_query::{HitBody, HitBodyData, HitQuery, HitShape, ProximityHitQuery};
pub use plugin::CombatPlugin;
