//! Global events used for cross-system communication.
//!
//! Requests flow in from outside the core (input, AI, animation hit frames,
//! admin tools). Notifications flow out to whoever subscribes: health bars,
//! sound, score. The core never waits on a subscriber.

use bevy::prelude::*;

// === Requests ===

/// Ask an actor to perform its melee attack this step.
///
/// Input, AI and animation hit frames all go through this one path; the
/// attacker's cooldown decides whether the swing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct AttackRequest {
    pub attacker: Entity,
}

/// Ask an actor to fire its ranged weapon.
#[derive(Event, Debug, Clone, Copy)]
pub struct FireRequest {
    pub shooter: Entity,
    /// Aim override; `None` shoots along the shooter's facing.
    pub direction: Option<Vec2>,
}

/// Damage from a source other than a melee swing (projectiles, hazards, scripts).
#[derive(Event, Debug, Clone, Copy)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage (if any)
    pub source: Option<Entity>,
    pub amount: f32,
}

/// Restore health, e.g. from a consumable.
#[derive(Event, Debug, Clone, Copy)]
pub struct HealEvent {
    pub target: Entity,
    pub amount: f32,
}

/// Permanently raise an actor's maximum health.
#[derive(Event, Debug, Clone, Copy)]
pub struct HealthUpgrade {
    pub target: Entity,
    pub amount: f32,
}

/// Respawn an actor right away, dead or not.
#[derive(Event, Debug, Clone, Copy)]
pub struct ForceRespawn {
    pub actor: Entity,
}

/// Remove an actor for good. Cancels any pending respawn.
#[derive(Event, Debug, Clone, Copy)]
pub struct DespawnActor {
    pub actor: Entity,
}

// === Notifications ===

/// Sent whenever an actor's health value changes.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct HealthChanged {
    pub actor: Entity,
    pub current: f32,
    pub maximum: f32,
}

/// Sent exactly once per life, when health reaches zero.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Died {
    /// Entity that died
    pub actor: Entity,
    /// Entity that killed them (if any)
    pub killed_by: Option<Entity>,
}

/// Sent when a dead actor is brought back.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct Respawned {
    pub actor: Entity,
    pub position: Vec3,
}

/// Sent after every swing that passed the cooldown gate, hit or miss.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackPerformed {
    pub actor: Entity,
    pub hit_count: usize,
}

/// Push applied to a target by a hit. Consumed by the physics side.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct Knockback {
    pub target: Entity,
    pub impulse: Vec3,
}

/// Sent when an actor has been despawned for good.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorRemoved {
    pub actor: Entity,
}
