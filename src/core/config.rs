//! Simulation-wide settings loaded from `assets/data/sim.ron`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use bevy::prelude::*;
use serde::Deserialize;

use crate::actors::DataLoadError;

fn default_fixed_hz() -> f64 {
    60.0
}

fn default_seed() -> u64 {
    42
}

/// Top-level simulation configuration.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct SimConfig {
    /// Simulation steps per second
    #[serde(default = "default_fixed_hz")]
    pub fixed_hz: f64,
    /// Seed for the simulation RNG (respawn placement, pickup spawning)
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Periodic health pickup spawning; disabled when absent
    #[serde(default)]
    pub pickups: Option<PickupSpawnerConfig>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_hz: default_fixed_hz(),
            seed: default_seed(),
            pickups: None,
        }
    }
}

impl SimConfig {
    /// Length of one fixed step.
    ///
    /// Falls back to the default rate when `fixed_hz` gives no usable step,
    /// which `validate` rejects for loaded configs.
    pub fn step(&self) -> Duration {
        match Duration::try_from_secs_f64(1.0 / self.fixed_hz) {
            Ok(step) if !step.is_zero() => step,
            _ => Duration::from_secs_f64(1.0 / default_fixed_hz()),
        }
    }

    /// Parse and validate a config from RON text.
    pub fn from_ron_str(path: &str, contents: &str) -> Result<Self, DataLoadError> {
        let config: SimConfig = ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        if !path.exists() {
            return Err(DataLoadError::FileNotFound(display));
        }

        let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
            path: display.clone(),
            details: e.to_string(),
        })?;

        Self::from_ron_str(&display, &contents)
    }

    fn validate(&self, path: &str) -> Result<(), DataLoadError> {
        let invalid = |reason: &str| DataLoadError::InvalidDefinition {
            name: path.to_string(),
            reason: reason.to_string(),
        };

        let usable_step = Duration::try_from_secs_f64(1.0 / self.fixed_hz)
            .is_ok_and(|step| !step.is_zero());
        if !(self.fixed_hz.is_finite() && self.fixed_hz > 0.0 && usable_step) {
            return Err(invalid("fixed_hz must be a positive, usable step rate"));
        }

        if let Some(pickups) = &self.pickups {
            let usable_interval = Duration::try_from_secs_f32(pickups.interval).is_ok();
            if !(pickups.interval.is_finite() && pickups.interval > 0.0 && usable_interval) {
                return Err(invalid("pickup interval must be a positive number of seconds"));
            }
            if !(pickups.heal_amount.is_finite() && pickups.heal_amount >= 0.0) {
                return Err(invalid("pickup heal amount must be non-negative"));
            }
        }

        Ok(())
    }
}

fn default_pickup_interval() -> f32 {
    10.0
}

fn default_max_active() -> usize {
    3
}

fn default_heal_amount() -> f32 {
    20.0
}

fn default_pickup_radius() -> f32 {
    0.5
}

fn default_spawn_points() -> Vec<(f32, f32, f32)> {
    vec![
        (-5.0, 2.0, 0.0),
        (5.0, 2.0, 0.0),
        (0.0, 5.0, 0.0),
        (-3.0, -1.0, 0.0),
        (3.0, -1.0, 0.0),
    ]
}

/// Settings for the periodic health pickup spawner.
#[derive(Debug, Clone, Deserialize)]
pub struct PickupSpawnerConfig {
    /// Seconds between spawn attempts
    #[serde(default = "default_pickup_interval")]
    pub interval: f32,
    /// No new pickup while this many are in the world
    #[serde(default = "default_max_active")]
    pub max_active: usize,
    #[serde(default = "default_heal_amount")]
    pub heal_amount: f32,
    /// Collection radius
    #[serde(default = "default_pickup_radius")]
    pub radius: f32,
    #[serde(default = "default_spawn_points")]
    pub spawn_points: Vec<(f32, f32, f32)>,
}

impl Default for PickupSpawnerConfig {
    fn default() -> Self {
        Self {
            interval: default_pickup_interval(),
            max_active: default_max_active(),
            heal_amount: default_heal_amount(),
            radius: default_pickup_radius(),
            spawn_points: default_spawn_points(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = SimConfig::from_ron_str("sim.ron", "(pickups: Some(()))").unwrap();
        assert_eq!(config.fixed_hz, 60.0);
        assert_eq!(config.seed, 42);

        let pickups = config.pickups.unwrap();
        assert_eq!(pickups.interval, 10.0);
        assert_eq!(pickups.max_active, 3);
        assert_eq!(pickups.heal_amount, 20.0);
        assert_eq!(pickups.spawn_points.len(), 5);
    }

    #[test]
    fn test_rejects_zero_rate() {
        let err = SimConfig::from_ron_str("sim.ron", "(fixed_hz: 0.0)").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidDefinition { .. }));
    }

    #[test]
    fn test_rejects_unrepresentable_durations() {
        let err = SimConfig::from_ron_str("sim.ron", "(pickups: Some((interval: 1e20)))").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidDefinition { .. }));

        let err = SimConfig::from_ron_str("sim.ron", "(fixed_hz: 1e-300)").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidDefinition { .. }));

        let err = SimConfig::from_ron_str("sim.ron", "(fixed_hz: 1e300)").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidDefinition { .. }));
    }

    #[test]
    fn test_step_never_panics() {
        let slow = SimConfig {
            fixed_hz: 1e-300,
            ..default()
        };
        assert_eq!(slow.step(), SimConfig::default().step());

        let fast = SimConfig {
            fixed_hz: 1e300,
            ..default()
        };
        assert!(!fast.step().is_zero());
    }

    #[test]
    fn test_reports_parse_errors() {
        let err = SimConfig::from_ron_str("sim.ron", "(fixed_hz: \"fast\")").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { .. }));
    }
}
