//! Actor composition and lifecycle components.

use std::time::Duration;

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::Faction;
use crate::health::Health;

/// A simulated entity with a position, health and a faction.
///
/// Combat (`Attacker`, `Shooter`) and respawning (`Respawner`) are optional
/// and added per actor from its definition.
#[derive(Component, Debug, Clone, Default)]
#[require(Health, ActorState, Faction, Facing, Hurtbox, LinearVelocity, Transform)]
pub struct Actor {
    pub name: String,
}

/// Lifecycle of an actor.
///
/// Only `Active` actors attack, shoot, collect pickups or show up in hit
/// queries. `AwaitingRespawn` is the hidden state between death and respawn.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActorState {
    #[default]
    Active,
    /// Dead with no respawn scheduled (corpse, or about to be removed)
    Dead,
    AwaitingRespawn {
        deadline: Duration,
    },
    /// Despawned for good; never comes back
    Removed,
}

impl ActorState {
    pub fn is_active(&self) -> bool {
        matches!(self, ActorState::Active)
    }
}

/// Horizontal facing, used to mirror attack points and aim shots.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// Unit vector along the facing.
    pub fn direction(self) -> Vec3 {
        Vec3::X * self.sign()
    }

    /// Mirror a right-facing offset into this facing.
    pub fn mirror(self, offset: Vec2) -> Vec3 {
        Vec3::new(offset.x * self.sign(), offset.y, 0.0)
    }
}

/// Radius of the area in which an actor can be hit.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Hurtbox {
    pub radius: f32,
}

impl Default for Hurtbox {
    fn default() -> Self {
        Self { radius: 0.5 }
    }
}

/// Velocity owned by the external movement/physics side.
///
/// The core only ever writes it: knockback adds to it, death and respawn
/// clear it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearVelocity(pub Vec3);

/// Move an actor to `position` and stop it.
pub fn place_actor(transform: &mut Transform, velocity: Option<&mut LinearVelocity>, position: Vec3) {
    transform.translation = position;
    if let Some(velocity) = velocity {
        velocity.0 = Vec3::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_mirrors_offsets() {
        let offset = Vec2::new(1.0, 0.5);
        assert_eq!(Facing::Right.mirror(offset), Vec3::new(1.0, 0.5, 0.0));
        assert_eq!(Facing::Left.mirror(offset), Vec3::new(-1.0, 0.5, 0.0));
        assert_eq!(Facing::Left.direction(), Vec3::NEG_X);
    }

    #[test]
    fn test_place_actor_clears_velocity() {
        let mut transform = Transform::from_xyz(3.0, 1.0, 0.0);
        let mut velocity = LinearVelocity(Vec3::new(4.0, -2.0, 0.0));

        place_actor(&mut transform, Some(&mut velocity), Vec3::new(-1.0, 0.0, 0.0));

        assert_eq!(transform.translation, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(velocity.0, Vec3::ZERO);
    }
}
