//! Ranged combat components.

use std::time::Duration;

use bevy::prelude::*;

use crate::combat::Cooldown;
use crate::core::FactionMask;

/// Projectiles that hit nothing disappear after this long.
pub const DEFAULT_PROJECTILE_LIFETIME: Duration = Duration::from_secs(4);

/// Ranged attack capability of an actor.
#[derive(Component, Debug, Clone)]
pub struct Shooter {
    pub damage: f32,
    /// Projectile speed in units per second
    pub speed: f32,
    pub lifetime: Duration,
    /// Projectile hit radius
    pub radius: f32,
    /// Spawn point relative to the actor, for a right-facing actor
    pub muzzle_offset: Vec2,
    pub targets: FactionMask,
    cooldown: Cooldown,
}

impl Shooter {
    pub fn new(damage: f32, speed: f32, cooldown: Duration, targets: FactionMask) -> Self {
        Self {
            damage,
            speed,
            lifetime: DEFAULT_PROJECTILE_LIFETIME,
            radius: 0.2,
            muzzle_offset: Vec2::ZERO,
            targets,
            cooldown: Cooldown::new(cooldown),
        }
    }

    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_muzzle_offset(mut self, offset: Vec2) -> Self {
        self.muzzle_offset = offset;
        self
    }

    pub fn can_fire(&self, now: Duration) -> bool {
        self.cooldown.is_ready(now)
    }

    pub fn last_shot(&self) -> Option<Duration> {
        self.cooldown.last_triggered()
    }

    /// Consume the cooldown if it is ready.
    pub fn try_fire(&mut self, now: Duration) -> bool {
        self.cooldown.trigger(now)
    }

    /// Speed, radius and damage must be usable for a shot to make sense.
    pub fn is_configured(&self) -> bool {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        positive(self.speed) && positive(self.radius) && self.damage.is_finite()
    }
}

/// A projectile in flight.
#[derive(Component, Debug, Clone)]
pub struct Projectile {
    pub owner: Entity,
    pub damage: f32,
    pub velocity: Vec3,
    pub radius: f32,
    pub targets: FactionMask,
    pub expires_at: Duration,
}

impl Projectile {
    pub fn is_expired(&self, now: Duration) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Faction;

    #[test]
    fn test_shooter_cooldown() {
        let mut shooter = Shooter::new(20.0, 10.0, Duration::from_millis(500), Faction::Enemy.hostile_targets());

        assert!(shooter.try_fire(Duration::ZERO));
        assert!(!shooter.try_fire(Duration::from_millis(499)));
        assert_eq!(shooter.last_shot(), Some(Duration::ZERO));
        assert!(shooter.can_fire(Duration::from_millis(500)));
    }

    #[test]
    fn test_shooter_configuration() {
        let shooter = Shooter::new(20.0, 10.0, Duration::ZERO, FactionMask::ALL);
        assert!(shooter.is_configured());
        assert!(!shooter.clone().with_radius(0.0).is_configured());
        assert!(!Shooter::new(20.0, -1.0, Duration::ZERO, FactionMask::ALL).is_configured());
    }
}
