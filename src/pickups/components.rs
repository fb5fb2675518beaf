//! Health pickup components and the spawner resource.

use std::time::Duration;

use bevy::prelude::*;

use crate::core::PickupSpawnerConfig;

/// A consumable that heals the first player actor to touch it.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct HealthPickup {
    pub amount: f32,
    pub radius: f32,
}

/// Sent when an actor collects a pickup.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PickupCollected {
    pub pickup: Entity,
    pub collector: Entity,
    /// Health actually restored; zero when the collector was already full
    pub healed: f32,
}

/// Periodic pickup spawning state.
#[derive(Resource, Debug, Clone)]
pub struct PickupSpawner {
    pub interval: Duration,
    pub max_active: usize,
    pub heal_amount: f32,
    pub radius: f32,
    pub spawn_points: Vec<Vec3>,
    next_spawn: Duration,
}

impl PickupSpawner {
    pub fn from_config(config: &PickupSpawnerConfig) -> Self {
        // Unrepresentable intervals are rejected on load; saturate otherwise
        let interval = Duration::try_from_secs_f32(config.interval).unwrap_or(Duration::MAX);
        Self {
            interval,
            max_active: config.max_active,
            heal_amount: config.heal_amount,
            radius: config.radius,
            spawn_points: config
                .spawn_points
                .iter()
                .map(|&(x, y, z)| Vec3::new(x, y, z))
                .collect(),
            next_spawn: interval,
        }
    }

    pub fn next_spawn(&self) -> Duration {
        self.next_spawn
    }

    /// Whether a spawn attempt is due. Moves the deadline on when it is.
    pub fn take_due(&mut self, now: Duration) -> bool {
        if now < self.next_spawn {
            return false;
        }
        self.next_spawn = now.saturating_add(self.interval);
        true
    }

    pub fn pickup(&self) -> HealthPickup {
        HealthPickup {
            amount: self.heal_amount,
            radius: self.radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawner_deadline() {
        let mut spawner = PickupSpawner::from_config(&PickupSpawnerConfig::default());
        assert_eq!(spawner.next_spawn(), Duration::from_secs(10));

        assert!(!spawner.take_due(Duration::from_secs(9)));
        assert!(spawner.take_due(Duration::from_secs(10)));
        assert_eq!(spawner.next_spawn(), Duration::from_secs(20));
        assert!(!spawner.take_due(Duration::from_secs(10)));
    }

    #[test]
    fn test_spawner_saturates_huge_interval() {
        let spawner = PickupSpawner::from_config(&PickupSpawnerConfig {
            interval: 1e20,
            ..default()
        });
        assert_eq!(spawner.interval, Duration::MAX);
        assert!(!spawner.clone().take_due(Duration::from_secs(1_000_000)));
    }
}
